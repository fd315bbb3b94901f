//! Extraction functions mapping raw report text to structured fields.

use serde::{Deserialize, Serialize};

use crate::vocabulary::{
    COMMON_EVENTS, DRUG_PATTERNS, HIV_EVENTS, NOT_MENTIONED, NOT_SPECIFIED, NOT_TRANSLATED,
    OUTCOME_KEYWORDS, OUTCOME_TRANSLATIONS, SEVERITY_LEVELS,
};

/// Detected outcome in English plus its French translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub english: String,
    pub french: String,
}

/// Return the first known drug found as a whole word in the report, or
/// [`NOT_SPECIFIED`]. Vocabulary order decides the winner, not position in
/// the text.
pub fn find_drug(report_text: &str) -> String {
    let text_lower = report_text.to_lowercase();
    for (drug, pattern) in DRUG_PATTERNS.iter() {
        if pattern.is_match(&text_lower) {
            return (*drug).to_string();
        }
    }
    NOT_SPECIFIED.to_string()
}

/// Return every adverse event mentioned in the report, in vocabulary scan
/// order (HIV events first, then common events). Substring matching, so
/// "fever" inside "feverish" counts. May be empty.
pub fn find_adverse_events(report_text: &str) -> Vec<String> {
    let text_lower = report_text.to_lowercase();
    let mut events_found = Vec::new();
    for event in HIV_EVENTS.iter().chain(COMMON_EVENTS.iter()) {
        if text_lower.contains(*event) {
            events_found.push((*event).to_string());
        }
    }
    events_found
}

/// Detect the severity level, or [`NOT_MENTIONED`]. First substring match in
/// vocabulary order wins.
pub fn find_severity(report_text: &str) -> String {
    let text_lower = report_text.to_lowercase();
    for level in SEVERITY_LEVELS.iter() {
        if text_lower.contains(*level) {
            return (*level).to_string();
        }
    }
    NOT_MENTIONED.to_string()
}

/// Detect the outcome and return it in both English and French.
pub fn find_outcome(report_text: &str) -> Outcome {
    let text_lower = report_text.to_lowercase();
    let mut outcome_detected = NOT_MENTIONED;
    for keyword in OUTCOME_KEYWORDS.iter() {
        if text_lower.contains(*keyword) {
            outcome_detected = *keyword;
            break;
        }
    }
    Outcome {
        english: outcome_detected.to_string(),
        french: translate_outcome(outcome_detected),
    }
}

/// Translate an English outcome keyword to French via the fixed table,
/// falling back to [`NOT_TRANSLATED`]. Exposed separately because stored
/// reports keep only the English value and re-derive the French at read
/// time.
pub fn translate_outcome(english: &str) -> String {
    OUTCOME_TRANSLATIONS
        .get(english.to_lowercase().as_str())
        .map(|french| (*french).to_string())
        .unwrap_or_else(|| NOT_TRANSLATED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drug_whole_word_match() {
        assert_eq!(find_drug("Patient started Tenofovir last week"), "tenofovir");
    }

    #[test]
    fn drug_match_is_case_insensitive() {
        assert_eq!(find_drug("prescribed TENOFOVIR and rest"), "tenofovir");
    }

    #[test]
    fn drug_substring_does_not_match() {
        // "arvs" appears only inside a longer word, so it must not count.
        assert_eq!(find_drug("patient visited arvstown clinic"), "Not specified");
    }

    #[test]
    fn drug_vocabulary_order_wins_over_text_position() {
        // tenofovir precedes aspirin in the vocabulary even though aspirin
        // appears first in the text.
        assert_eq!(find_drug("took aspirin then tenofovir"), "tenofovir");
    }

    #[test]
    fn no_drug_returns_sentinel() {
        assert_eq!(find_drug("patient feels fine"), "Not specified");
    }

    #[test]
    fn adverse_events_in_vocabulary_order() {
        let events = find_adverse_events("Patient reports FEVER and nausea");
        assert_eq!(events, vec!["fever", "nausea"]);
    }

    #[test]
    fn adverse_events_match_substrings() {
        // Substring semantics: "rash" matches even inside another word.
        let events = find_adverse_events("skin looks rashy");
        assert_eq!(events, vec!["rash"]);
    }

    #[test]
    fn adverse_events_empty_when_none_mentioned() {
        assert!(find_adverse_events("no complaints today").is_empty());
    }

    #[test]
    fn hiv_events_listed_before_common_events() {
        // "nausea" comes first in the text but "fatigue" is scanned first.
        let events = find_adverse_events("nausea and fatigue reported");
        assert_eq!(events, vec!["fatigue", "nausea"]);
    }

    #[test]
    fn severity_first_match_in_vocabulary_order() {
        // Both levels present; "mild" is earlier in the scan order.
        assert_eq!(find_severity("severe pain but mild fever"), "mild");
    }

    #[test]
    fn severity_sentinel_when_absent() {
        assert_eq!(find_severity("patient recovered"), "not mentioned");
    }

    #[test]
    fn outcome_recovered_translates_to_french() {
        let outcome = find_outcome("patient recovered fully");
        assert_eq!(outcome.english, "recovered");
        assert_eq!(outcome.french, "rétabli");
    }

    #[test]
    fn outcome_sentinels_when_unknown() {
        let outcome = find_outcome("status unknown");
        assert_eq!(outcome.english, "not mentioned");
        assert_eq!(outcome.french, "non traduit");
    }

    #[test]
    fn translate_outcome_is_case_insensitive() {
        assert_eq!(translate_outcome("Ongoing"), "en cours");
    }

    #[test]
    fn translate_unknown_outcome_falls_back() {
        assert_eq!(translate_outcome("not mentioned"), "non traduit");
    }

    #[test]
    fn empty_input_yields_all_sentinels() {
        assert_eq!(find_drug(""), "Not specified");
        assert!(find_adverse_events("").is_empty());
        assert_eq!(find_severity(""), "not mentioned");
        let outcome = find_outcome("");
        assert_eq!(outcome.english, "not mentioned");
        assert_eq!(outcome.french, "non traduit");
    }
}
