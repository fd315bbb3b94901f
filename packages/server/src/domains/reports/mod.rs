pub mod data;
pub mod models;

pub use data::ReportData;
pub use models::{Report, EVENT_DELIMITER};
