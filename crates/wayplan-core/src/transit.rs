//! Transit legs: fixed-purpose point-to-point movements.
//!
//! Legs are opaque duration+cost facts supplied externally per day and
//! kind. The engine only clips and sequences them; it never invents one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed purpose of a transit leg within a trip day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegKind {
    HomeToHub,
    HubToHotel,
    HotelToFirstStop,
    LastStopToHotel,
    HotelToHome,
}

impl LegKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HomeToHub => "home_to_hub",
            Self::HubToHotel => "hub_to_hotel",
            Self::HotelToFirstStop => "hotel_to_first_stop",
            Self::LastStopToHotel => "last_stop_to_hotel",
            Self::HotelToHome => "hotel_to_home",
        }
    }
}

/// Mode of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitMode {
    Train,
    Subway,
    Bus,
    Taxi,
    Walk,
    Flight,
    Ferry,
}

impl TransitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Subway => "subway",
            Self::Bus => "bus",
            Self::Taxi => "taxi",
            Self::Walk => "walk",
            Self::Flight => "flight",
            Self::Ferry => "ferry",
        }
    }
}

/// A point-to-point leg supplied by the external directions provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitLeg {
    pub kind: LegKind,
    pub from: String,
    pub to: String,
    pub departs: DateTime<Utc>,
    pub arrives: DateTime<Utc>,
    pub mode: TransitMode,
    /// Fare in the provider's smallest currency unit, when known.
    #[serde(default)]
    pub fare: Option<u32>,
}

impl TransitLeg {
    pub fn elapsed_minutes(&self) -> i64 {
        (self.arrives - self.departs).num_minutes()
    }
}
