use axum::{extract::Extension, Json};
use serde::Deserialize;

use crate::domains::reports::{Report, ReportData};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ReportSubmission {
    pub report: String,
}

/// Process a medical report
///
/// Detects the drug, adverse events, severity and outcome mentioned in the
/// submitted text, persists the result and returns the structured report
/// with the outcome in English and French. Extraction never fails: text with
/// no matches (including the empty string) is stored with sentinel values.
pub async fn process_report_handler(
    Extension(state): Extension<AppState>,
    Json(submission): Json<ReportSubmission>,
) -> Result<Json<ReportData>, ApiError> {
    let report_text = submission.report.trim();

    let detected_drug = extraction::find_drug(report_text);
    let adverse_events = extraction::find_adverse_events(report_text);
    let severity_level = extraction::find_severity(report_text);
    let outcome = extraction::find_outcome(report_text);

    let report = Report::create(
        report_text,
        &detected_drug,
        &adverse_events,
        &severity_level,
        &outcome.english,
        &state.db_pool,
    )
    .await?;

    tracing::info!(id = report.id, drug = %report.detected_drug, "report processed");

    Ok(Json(report.into()))
}

/// Retrieve all processed reports, latest first
///
/// The French outcome is re-derived from the stored English keyword on every
/// read, so translation-table changes apply retroactively.
pub async fn list_reports_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<ReportData>>, ApiError> {
    let reports = Report::list_all(&state.db_pool).await?;

    Ok(Json(reports.into_iter().map(ReportData::from).collect()))
}
