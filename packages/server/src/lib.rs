// Medical Report Processor - API Core
//
// This crate provides the backend API for processing free-text medical
// adverse-event reports: keyword extraction into structured fields plus an
// append-only report store served over HTTP.

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
