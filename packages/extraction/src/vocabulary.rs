//! Fixed vocabularies, sentinels and the outcome translation table.
//!
//! Process-wide immutable configuration: built once at first use, never
//! mutated afterwards, so no synchronization is needed.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Known drug names, scanned in this order. Earliest entry wins when a
/// report mentions several.
pub const DRUG_LIST: &[&str] = &[
    "arvs",
    "tenofovir",
    "lamivudine",
    "efavirenz",
    "dolutegravir",
    "abacavir",
    "paracetamol",
    "aspirin",
    "amoxicillin",
];

/// HIV-domain adverse events, scanned before the general list.
pub const HIV_EVENTS: &[&str] = &["weight loss", "fever", "night sweats", "fatigue", "diarrhea"];

/// General adverse events.
pub const COMMON_EVENTS: &[&str] = &["nausea", "headache", "vomiting", "rash", "dizziness"];

/// Severity levels, scanned in this order; "mild" wins over "severe" when
/// both appear.
pub const SEVERITY_LEVELS: &[&str] = &["mild", "moderate", "severe"];

/// Outcome keywords, scanned in this order.
pub const OUTCOME_KEYWORDS: &[&str] = &["recovered", "ongoing", "fatal"];

/// Sentinel returned when no known drug is found.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Sentinel returned when no severity level or outcome keyword is found.
pub const NOT_MENTIONED: &str = "not mentioned";

/// Sentinel French translation for any outcome not in the table.
pub const NOT_TRANSLATED: &str = "non traduit";

lazy_static! {
    /// One compiled whole-word pattern per drug, in `DRUG_LIST` order.
    pub(crate) static ref DRUG_PATTERNS: Vec<(&'static str, Regex)> = DRUG_LIST
        .iter()
        .map(|drug| {
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(drug))).unwrap();
            (*drug, pattern)
        })
        .collect();

    /// English outcome keyword -> French translation.
    pub(crate) static ref OUTCOME_TRANSLATIONS: HashMap<&'static str, &'static str> = {
        let mut table = HashMap::new();
        table.insert("recovered", "rétabli");
        table.insert("ongoing", "en cours");
        table.insert("fatal", "fatal");
        table
    };
}
