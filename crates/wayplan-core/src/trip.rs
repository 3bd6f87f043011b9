//! Trip window: the absolute bounds of a planned trip.
//!
//! Every generated event is clamped into the window; a range that collapses
//! under clamping is skipped rather than reported.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Absolute bounds of one trip, immutable once a build begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripWindow {
    pub origin: String,
    pub destination: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TripWindow {
    /// Create a trip window, rejecting `end <= start`.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidTripWindow`] when the return instant
    /// does not come after departure.
    pub fn try_new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::InvalidTripWindow { start, end });
        }
        Ok(Self {
            origin: origin.into(),
            destination: destination.into(),
            start,
            end,
        })
    }

    /// Re-check the window invariant. Fields are public, so a planner run
    /// revalidates before building.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end <= self.start {
            return Err(ValidationError::InvalidTripWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Number of calendar days the trip touches: the whole-day distance
    /// between the two dates, plus one.
    pub fn day_count(&self) -> u32 {
        let days = (self.end.date_naive() - self.start.date_naive()).num_days();
        days as u32 + 1
    }

    /// Calendar date of day `day_number` (1-based).
    pub fn date_of_day(&self, day_number: u32) -> NaiveDate {
        self.start
            .date_naive()
            .checked_add_days(Days::new(u64::from(day_number.saturating_sub(1))))
            .unwrap_or_else(|| self.start.date_naive())
    }

    /// Clamp a time range into the window.
    ///
    /// Returns `None` when the clamped range collapses to zero or negative
    /// duration; the caller skips the range.
    pub fn clamp(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let s = start.max(self.start);
        let e = end.min(self.end);
        if s >= e {
            return None;
        }
        Some((s, e))
    }

    /// Check whether an instant lies within the window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Total trip duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window(start_day: u32, end_day: u32) -> TripWindow {
        TripWindow::try_new(
            "Tokyo",
            "Osaka",
            Utc.with_ymd_and_hms(2024, 3, start_day, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, end_day, 22, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_inverted_window() {
        let start = Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        assert!(TripWindow::try_new("a", "b", start, end).is_err());
        assert!(TripWindow::try_new("a", "b", start, start).is_err());
    }

    #[test]
    fn day_count_spans_dates() {
        assert_eq!(window(1, 1).day_count(), 1);
        assert_eq!(window(1, 3).day_count(), 3);
    }

    #[test]
    fn date_of_day_is_one_based() {
        let w = window(1, 3);
        assert_eq!(w.date_of_day(1), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(w.date_of_day(3), NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
    }

    #[test]
    fn clamp_collapses_outside_ranges() {
        let w = window(1, 1);
        let before = Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 3, 1, 23, 0, 0).unwrap();

        // Fully outside
        assert!(w.clamp(before, w.start).is_none());
        // Straddles the start
        let (s, e) = w.clamp(before, before + chrono::Duration::hours(3)).unwrap();
        assert_eq!(s, w.start);
        assert!(e > s);
        // Straddles the end
        let (_, e) = w.clamp(w.end - chrono::Duration::hours(1), after).unwrap();
        assert_eq!(e, w.end);
    }
}
