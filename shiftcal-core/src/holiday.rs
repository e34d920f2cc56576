//! Public-holiday reference data.
//!
//! The holiday feed is an external JSON object mapping ISO dates to holiday
//! names, fetched once per session and read-only afterwards.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};

/// Holiday names for the session, keyed by date.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    holidays: HashMap<NaiveDate, String>,
}

impl HolidaySet {
    pub fn new(holidays: HashMap<NaiveDate, String>) -> Self {
        HolidaySet { holidays }
    }

    /// Build from the raw feed body, skipping entries whose key is not a
    /// valid ISO date.
    pub fn from_feed(raw: HashMap<String, String>) -> Self {
        let holidays = raw
            .into_iter()
            .filter_map(|(date, name)| {
                NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                    .ok()
                    .map(|d| (d, name))
            })
            .collect();
        HolidaySet { holidays }
    }

    pub fn name_of(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Sundays count as rest days alongside listed holidays.
    pub fn is_rest_day(&self, date: NaiveDate) -> bool {
        date.weekday() == Weekday::Sun || self.is_holiday(date)
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}
