//! Local JSON catalog loading.
//!
//! The catalog file carries everything the planner consumes through its
//! collaborator traits: attractions, venues, a hotel selection keyed by
//! day number, and raw transit legs.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

use wayplan_core::{
    Hotel, LegKind, MovableItem, PerDayHotels, StaticItems, StaticLegTable, TransitLeg,
    TransitMode,
};

#[derive(Debug, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub attractions: Vec<AttractionEntry>,
    #[serde(default)]
    pub venues: Vec<VenueEntry>,
    #[serde(default)]
    pub hotels: Vec<HotelEntry>,
    #[serde(default)]
    pub legs: Vec<LegEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AttractionEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub duration_minutes: i64,
}

#[derive(Debug, Deserialize)]
pub struct VenueEntry {
    pub id: String,
    pub name: String,
    /// Falls back to the configured default when omitted.
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct HotelEntry {
    pub day: u32,
    pub id: String,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct LegEntry {
    pub kind: LegKind,
    pub from: String,
    pub to: String,
    pub departs: DateTime<Utc>,
    pub arrives: DateTime<Utc>,
    pub mode: TransitMode,
    #[serde(default)]
    pub fare: Option<u32>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Ordered item list: attractions first, venues after, both in file
    /// order.
    pub fn items(&self, default_venue_minutes: i64) -> StaticItems {
        let mut items: Vec<MovableItem> = self
            .attractions
            .iter()
            .map(|a| MovableItem::Attraction {
                id: a.id.clone(),
                name: a.name.clone(),
                category: a.category.clone(),
                duration_minutes: a.duration_minutes,
            })
            .collect();
        items.extend(self.venues.iter().map(|v| MovableItem::Venue {
            id: v.id.clone(),
            name: v.name.clone(),
            duration_minutes: v.duration_minutes.unwrap_or(default_venue_minutes),
        }));
        StaticItems(items)
    }

    pub fn hotels(&self) -> PerDayHotels {
        let mut hotels = PerDayHotels::new();
        for entry in &self.hotels {
            hotels.select(
                entry.day,
                Hotel {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    address: entry.address.clone(),
                },
            );
        }
        hotels
    }

    pub fn legs(&self) -> StaticLegTable {
        let mut table = StaticLegTable::default();
        for entry in &self.legs {
            table.add(TransitLeg {
                kind: entry.kind,
                from: entry.from.clone(),
                to: entry.to.clone(),
                departs: entry.departs,
                arrives: entry.arrives,
                mode: entry.mode,
                fare: entry.fare,
            });
        }
        table
    }
}
