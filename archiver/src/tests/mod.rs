pub mod fixtures;

pub mod dates_tests;
pub mod scrape_tests;

use chrono::NaiveDate;

/// Shorthand for building dates in test assertions
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
