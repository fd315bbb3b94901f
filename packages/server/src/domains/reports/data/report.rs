use extraction::Outcome;
use serde::{Deserialize, Serialize};

use crate::domains::reports::models::{Report, EVENT_DELIMITER};

/// API shape of a processed report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub id: i64,
    pub report_text: String,
    pub drug: String,
    pub adverse_events: Vec<String>,
    pub severity: String,
    pub outcome: Outcome,
}

impl From<Report> for ReportData {
    fn from(report: Report) -> Self {
        // Empty stored string means no events, not one empty event.
        let adverse_events = if report.adverse_events.is_empty() {
            Vec::new()
        } else {
            report
                .adverse_events
                .split(EVENT_DELIMITER)
                .map(str::to_string)
                .collect()
        };

        // French is never persisted; always re-derived from the English
        // keyword so translation-table changes apply to old rows too.
        let french = extraction::translate_outcome(&report.outcome);

        Self {
            id: report.id,
            report_text: report.report_text,
            drug: report.detected_drug,
            adverse_events,
            severity: report.severity_level,
            outcome: Outcome {
                english: report.outcome,
                french,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(adverse_events: &str, outcome: &str) -> Report {
        Report {
            id: 1,
            report_text: "test".to_string(),
            detected_drug: "Not specified".to_string(),
            adverse_events: adverse_events.to_string(),
            severity_level: "not mentioned".to_string(),
            outcome: outcome.to_string(),
        }
    }

    #[test]
    fn splits_stored_events() {
        let data = ReportData::from(row("fever, nausea", "recovered"));
        assert_eq!(data.adverse_events, vec!["fever", "nausea"]);
    }

    #[test]
    fn empty_events_become_empty_list() {
        let data = ReportData::from(row("", "not mentioned"));
        assert!(data.adverse_events.is_empty());
    }

    #[test]
    fn french_recomputed_from_stored_english() {
        let data = ReportData::from(row("", "ongoing"));
        assert_eq!(data.outcome.english, "ongoing");
        assert_eq!(data.outcome.french, "en cours");
    }

    #[test]
    fn unknown_outcome_gets_fallback_translation() {
        let data = ReportData::from(row("", "not mentioned"));
        assert_eq!(data.outcome.french, "non traduit");
    }
}
