//! Recurring daily availability template.
//!
//! A [`DayTemplate`] carves one 24h cycle into labelled slots (sleep, meals,
//! free "available" time, venue time) expressed as day-relative times. The
//! template is validated once at definition time and instantiated against a
//! concrete calendar date during a build.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Purpose of an availability slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Sleep,
    Meal,
    Available,
    Venue,
}

impl SlotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Meal => "meal",
            Self::Available => "available",
            Self::Venue => "venue",
        }
    }

    /// Whether this slot is filled by the packer rather than emitted as-is.
    pub fn is_packable(&self) -> bool {
        matches!(self, Self::Available | Self::Venue)
    }
}

/// One day-relative slot. `end <= start` means the slot ends on the
/// following date (overnight sleep).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub label: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub kind: SlotKind,
}

impl AvailabilitySlot {
    pub fn new(
        label: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
        kind: SlotKind,
    ) -> Self {
        Self {
            label: label.into(),
            start,
            end,
            kind,
        }
    }

    /// Whether the slot wraps past midnight into the following date.
    pub fn crosses_midnight(&self) -> bool {
        self.end <= self.start
    }
}

/// Ordered sequence of slots covering (not necessarily contiguously) one
/// 24h cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayTemplate {
    slots: Vec<AvailabilitySlot>,
}

impl DayTemplate {
    /// Create a template from slots, failing fast on malformed input.
    ///
    /// # Errors
    /// Rejects zero-length slots (`end == start` on the same day is
    /// indistinguishable from a full-day wrap and is refused outright) and
    /// any pair of slots whose daily-tiled spans overlap.
    pub fn new(slots: Vec<AvailabilitySlot>) -> Result<Self, ValidationError> {
        let template = Self { slots };
        template.validate()?;
        Ok(template)
    }

    /// The built-in template: overnight sleep 19:00-10:00, attraction
    /// windows 10:00-12:00 and 13:00-17:00, venue windows 12:00-13:00 and
    /// 17:00-19:00. Fixed times, independent of the wall clock.
    pub fn standard() -> Self {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();
        Self {
            slots: vec![
                AvailabilitySlot::new("morning attractions", t(10, 0), t(12, 0), SlotKind::Available),
                AvailabilitySlot::new("lunch venue", t(12, 0), t(13, 0), SlotKind::Venue),
                AvailabilitySlot::new("afternoon attractions", t(13, 0), t(17, 0), SlotKind::Available),
                AvailabilitySlot::new("dinner venue", t(17, 0), t(19, 0), SlotKind::Venue),
                AvailabilitySlot::new("sleep", t(19, 0), t(10, 0), SlotKind::Sleep),
            ],
        }
    }

    pub fn slots(&self) -> &[AvailabilitySlot] {
        &self.slots
    }

    /// Validate the template: no zero-length slots, no silent overlap
    /// between the daily-tiled spans.
    pub fn validate(&self) -> Result<(), ValidationError> {
        // Segments in minutes-of-day; an overnight slot contributes the
        // pre-midnight and post-midnight parts separately.
        let mut segments: Vec<(i64, i64, &str)> = Vec::new();
        for slot in &self.slots {
            let s = minute_of_day(slot.start);
            let e = minute_of_day(slot.end);
            if s == e {
                return Err(ValidationError::InvalidSlot {
                    label: slot.label.clone(),
                    message: "slot has zero length".into(),
                });
            }
            if slot.crosses_midnight() {
                segments.push((s, 24 * 60, &slot.label));
                if e > 0 {
                    segments.push((0, e, &slot.label));
                }
            } else {
                segments.push((s, e, &slot.label));
            }
        }

        segments.sort_by_key(|&(s, _, _)| s);
        for pair in segments.windows(2) {
            let (_, prev_end, prev_label) = pair[0];
            let (next_start, _, next_label) = pair[1];
            if next_start < prev_end {
                return Err(ValidationError::OverlappingSlots {
                    first: prev_label.to_string(),
                    second: next_label.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Map each slot onto absolute instants for a calendar date. Overnight
    /// slots end on the following date. No error conditions.
    pub fn instantiate(&self, date: NaiveDate) -> Vec<DaySlot> {
        self.slots
            .iter()
            .map(|slot| {
                let end_date = if slot.crosses_midnight() {
                    date.checked_add_days(Days::new(1)).unwrap_or(date)
                } else {
                    date
                };
                DaySlot {
                    label: slot.label.clone(),
                    kind: slot.kind,
                    start: date.and_time(slot.start).and_utc(),
                    end: end_date.and_time(slot.end).and_utc(),
                }
            })
            .collect()
    }
}

/// A template slot instantiated against a concrete date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySlot {
    pub label: String,
    pub kind: SlotKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DaySlot {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

fn minute_of_day(t: NaiveTime) -> i64 {
    use chrono::Timelike;
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}
