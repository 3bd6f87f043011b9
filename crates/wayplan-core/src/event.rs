//! Timeline events.
//!
//! Every scheduled fact on the timeline -- a transit leg, an attraction
//! visit, a hotel check-in, a meal, a night's sleep -- is one event with a
//! deterministic id, a per-day construction sequence, and a declared
//! dependency set over earlier events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::transit::TransitMode;

/// Meal of the day, derived from a slot's start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub fn from_start_hour(hour: u32) -> Self {
        if hour < 11 {
            Self::Breakfast
        } else if hour < 15 {
            Self::Lunch
        } else {
            Self::Dinner
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

/// Kind-specific payload. Exhaustively matched wherever a payload is
/// interpreted (export, display).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventPayload {
    Transit {
        from: String,
        to: String,
        mode: TransitMode,
    },
    Attraction {
        name: String,
        category: String,
    },
    Hotel {
        name: String,
        address: String,
    },
    Meal {
        meal_type: MealType,
        /// Venue serving the meal, when one was placed into the window.
        venue: Option<String>,
    },
    Sleep,
}

impl EventPayload {
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::Transit { .. } => "transit",
            Self::Attraction { .. } => "attraction",
            Self::Hotel { .. } => "hotel",
            Self::Meal { .. } => "meal",
            Self::Sleep => "sleep",
        }
    }
}

/// One event on the trip timeline.
///
/// `sequence` is a per-day monotonically increasing construction counter --
/// a tie-break, not the final order. `dependencies` only ever reference
/// events constructed earlier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub day_number: u32,
    pub sequence: u32,
    #[serde(default)]
    pub dependencies: BTreeSet<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub payload: EventPayload,
}

impl TimelineEvent {
    /// Deterministic event id from day number and sequence.
    pub fn make_id(day_number: u32, sequence: u32) -> String {
        format!("d{day_number}e{sequence}")
    }

    pub fn kind_str(&self) -> &'static str {
        self.payload.kind_str()
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
