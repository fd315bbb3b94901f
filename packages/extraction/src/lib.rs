//! Keyword Extraction for Medical Adverse-Event Reports
//!
//! Pure, infallible extraction over small fixed vocabularies. Every function
//! takes raw report text and returns either a matched vocabulary term or a
//! sentinel value — there is no error path, and empty input simply yields
//! all sentinels.
//!
//! Matching semantics are part of the contract:
//!
//! - Drug names match as whole words (`\b`-bounded), so "arv" never matches
//!   inside "arvos".
//! - Adverse events, severity levels and outcome keywords match as plain
//!   substrings anywhere in the text.
//! - All matching is case-insensitive, and ties are broken by vocabulary
//!   scan order, never by position in the text.
//!
//! # Modules
//!
//! - [`vocabulary`] - Fixed term lists, sentinels and the outcome
//!   translation table
//! - [`detect`] - The extraction functions themselves

pub mod detect;
pub mod vocabulary;

pub use detect::{
    find_adverse_events, find_drug, find_outcome, find_severity, translate_outcome, Outcome,
};
pub use vocabulary::{NOT_MENTIONED, NOT_SPECIFIED, NOT_TRANSLATED};
