//! Movable items: attractions and venues awaiting placement.
//!
//! Items live in an explicit FIFO queue that is moved into each day's
//! packing call and returned with its remaining state -- no shared mutable
//! pool. Queue order defines precedence: first-listed items win earlier
//! slots. An item is consumed at most once across the whole trip.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::calendar::SlotKind;

/// An attraction or venue that can be placed into a compatible window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MovableItem {
    Attraction {
        id: String,
        name: String,
        category: String,
        duration_minutes: i64,
    },
    Venue {
        id: String,
        name: String,
        duration_minutes: i64,
    },
}

impl MovableItem {
    pub fn id(&self) -> &str {
        match self {
            Self::Attraction { id, .. } | Self::Venue { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Attraction { name, .. } | Self::Venue { name, .. } => name,
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        match self {
            Self::Attraction {
                duration_minutes, ..
            }
            | Self::Venue {
                duration_minutes, ..
            } => *duration_minutes,
        }
    }

    pub fn is_venue(&self) -> bool {
        matches!(self, Self::Venue { .. })
    }
}

/// FIFO queue of movable items, attractions and venues kept apart so each
/// window kind draws from its own line.
#[derive(Debug, Clone, Default)]
pub struct ItemQueue {
    attractions: VecDeque<MovableItem>,
    venues: VecDeque<MovableItem>,
}

impl ItemQueue {
    /// Build a queue from an ordered item list, preserving relative order
    /// within each kind.
    pub fn new(items: Vec<MovableItem>) -> Self {
        let mut queue = Self::default();
        for item in items {
            if item.is_venue() {
                queue.venues.push_back(item);
            } else {
                queue.attractions.push_back(item);
            }
        }
        queue
    }

    /// Pop the next item compatible with a window kind. `Available` windows
    /// draw attractions, `Venue` windows draw venues; sleep and meal slots
    /// never consume items.
    pub fn pop_for(&mut self, kind: SlotKind) -> Option<MovableItem> {
        match kind {
            SlotKind::Available => self.attractions.pop_front(),
            SlotKind::Venue => self.venues.pop_front(),
            SlotKind::Sleep | SlotKind::Meal => None,
        }
    }

    /// Partition into one queue per day: contiguous chunks of
    /// `ceil(len / days)` per day index, attractions and venues split
    /// independently. Chunks are fixed up front; a day that under-consumes
    /// its chunk does not roll items forward.
    pub fn partition(self, days: u32) -> Vec<ItemQueue> {
        let days = days.max(1) as usize;
        let attractions = chunk(self.attractions, days);
        let venues = chunk(self.venues, days);

        attractions
            .into_iter()
            .zip(venues)
            .map(|(attractions, venues)| ItemQueue {
                attractions,
                venues,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.attractions.len() + self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty() && self.venues.is_empty()
    }
}

fn chunk(items: VecDeque<MovableItem>, days: usize) -> Vec<VecDeque<MovableItem>> {
    let chunk_size = items.len().div_ceil(days).max(1);
    let mut items = items;
    let mut chunks = Vec::with_capacity(days);
    for _ in 0..days {
        let take = chunk_size.min(items.len());
        chunks.push(items.drain(..take).collect());
    }
    chunks
}
