// Application layer - view registry and the embedded tenant views
pub mod invoice_view;
pub mod property_view;
pub mod view_output;
pub mod view_registry;

use chrono::NaiveDate;

/// Dates in seed rows are fixed literals.
pub(crate) fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
