use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Separator used to store the adverse-event list in a single text column.
///
/// Known gap: this encoding is ambiguous if an event term ever contains the
/// delimiter itself. None of the current vocabulary does, and changing the
/// encoding would change the persisted format, so it stays as-is.
pub const EVENT_DELIMITER: &str = ", ";

/// A processed report row, exactly as persisted.
///
/// Rows are append-only: there is no update or delete path, and `id` is
/// assigned once by the database. Only the English outcome keyword is
/// stored; the French translation is derived at read time.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Report {
    pub id: i64,
    pub report_text: String,
    pub detected_drug: String,
    pub adverse_events: String,
    pub severity_level: String,
    pub outcome: String,
}

// =============================================================================
// Report Queries
// =============================================================================

impl Report {
    /// Insert a processed report and return the stored row.
    ///
    /// The database assigns the id atomically, so concurrent submissions
    /// always receive unique, strictly increasing ids.
    pub async fn create(
        report_text: &str,
        detected_drug: &str,
        adverse_events: &[String],
        severity_level: &str,
        outcome_english: &str,
        pool: &SqlitePool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO reports (report_text, detected_drug, adverse_events, severity_level, outcome)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(report_text)
        .bind(detected_drug)
        .bind(adverse_events.join(EVENT_DELIMITER))
        .bind(severity_level)
        .bind(outcome_english)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Fetch every stored report, most recently inserted first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM reports ORDER BY id DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
