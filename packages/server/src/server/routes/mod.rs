// HTTP routes
pub mod health;
pub mod reports;

pub use health::*;
pub use reports::*;
