//! CLI command implementations.

pub mod dashboard;
pub mod fridge;
pub mod product;
pub mod session;
pub mod shopping;

use chrono::NaiveDate;

/// Render an optional calendar date for display.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "-".to_owned(), |d| d.to_string())
}
