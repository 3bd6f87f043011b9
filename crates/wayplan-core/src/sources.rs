//! Collaborator interfaces consumed by the planner.
//!
//! The engine never fetches anything itself: attractions, per-day hotel
//! selections, and transit legs arrive through these narrow traits. The
//! in-memory implementations below back the CLI catalog and the tests.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::hotel::Hotel;
use crate::items::MovableItem;
use crate::transit::{LegKind, TransitLeg};

/// Supplies the ordered, pre-deduplicated list of movable items for a trip.
pub trait AttractionSource {
    fn items(&self) -> Vec<MovableItem>;
}

/// Supplies the hotel chosen for a given day, if any.
pub trait HotelSelection {
    fn hotel_for_day(&self, day_number: u32) -> Option<Hotel>;
}

/// Supplies transit legs per kind and calendar date. Absence of a match
/// silently omits the leg; nothing is fabricated.
pub trait TransitLegProvider {
    fn find_leg(&self, kind: LegKind, date: NaiveDate) -> Option<TransitLeg>;
}

/// Plain list-backed attraction source.
#[derive(Debug, Clone, Default)]
pub struct StaticItems(pub Vec<MovableItem>);

impl AttractionSource for StaticItems {
    fn items(&self) -> Vec<MovableItem> {
        self.0.clone()
    }
}

/// Hotel selection keyed by day number.
#[derive(Debug, Clone, Default)]
pub struct PerDayHotels {
    by_day: HashMap<u32, Hotel>,
}

impl PerDayHotels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, day_number: u32, hotel: Hotel) {
        self.by_day.insert(day_number, hotel);
    }

    /// Select the same hotel for every day in `1..=days`.
    pub fn select_all(&mut self, days: u32, hotel: Hotel) {
        for day in 1..=days {
            self.by_day.insert(day, hotel.clone());
        }
    }
}

impl HotelSelection for PerDayHotels {
    fn hotel_for_day(&self, day_number: u32) -> Option<Hotel> {
        self.by_day.get(&day_number).cloned()
    }
}

/// Leg table matched by exact departure date and kind; first match wins.
#[derive(Debug, Clone, Default)]
pub struct StaticLegTable {
    legs: Vec<TransitLeg>,
}

impl StaticLegTable {
    pub fn new(legs: Vec<TransitLeg>) -> Self {
        Self { legs }
    }

    pub fn add(&mut self, leg: TransitLeg) {
        self.legs.push(leg);
    }
}

impl TransitLegProvider for StaticLegTable {
    fn find_leg(&self, kind: LegKind, date: NaiveDate) -> Option<TransitLeg> {
        self.legs
            .iter()
            .find(|leg| leg.kind == kind && leg.departs.date_naive() == date)
            .cloned()
    }
}
