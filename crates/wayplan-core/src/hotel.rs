//! Hotels and stay timing.
//!
//! Check-in instants are always derived from the day's own date plus the
//! configured check-in time, never from the wall clock.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A hotel chosen for one or more trip days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// Day-relative stay timing applied to every hotel day.
///
/// The check-in window sits at the day boundary, before the first activity
/// slot, so that construction order and chronological order agree.
#[derive(Debug, Clone, Copy)]
pub struct StayTimes {
    pub check_in: NaiveTime,
    /// Length of the check-in window in minutes.
    pub window_minutes: i64,
}

impl Default for StayTimes {
    fn default() -> Self {
        Self {
            check_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            window_minutes: 60,
        }
    }
}

impl StayTimes {
    /// Check-in window for a concrete date.
    pub fn check_in_window(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = date.and_time(self.check_in).and_utc();
        (start, start + chrono::Duration::minutes(self.window_minutes))
    }
}
