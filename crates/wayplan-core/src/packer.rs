//! Greedy slot packing.
//!
//! Fills one concrete window with items taken from the head of the queue.
//! Not a bin-packing optimizer: no reordering, no lookahead, deterministic.
//! An item whose duration exceeds the remaining window is still placed but
//! truncated at the window boundary; the clipped remainder is not re-offered.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::DaySlot;
use crate::items::{ItemQueue, MovableItem};

/// One item placed into a window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub item: MovableItem,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Placement {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether the placement was cut short at the window boundary.
    pub fn clipped(&self) -> bool {
        self.duration_minutes() < self.item.duration_minutes()
    }
}

/// Pack a window from the head of the queue.
///
/// The cursor starts at the window start; each placement runs from the
/// cursor to `min(cursor + duration, window end)` and advances the cursor to
/// its own end. A window with `start >= end` yields no placements. The queue
/// is taken by value and returned with its remaining state.
pub fn pack(window: &DaySlot, mut queue: ItemQueue) -> (Vec<Placement>, ItemQueue) {
    let mut placements = Vec::new();
    let mut cursor = window.start;

    while cursor < window.end {
        let Some(item) = queue.pop_for(window.kind) else {
            break;
        };
        let natural_end = cursor + Duration::minutes(item.duration_minutes().max(0));
        let end = natural_end.min(window.end);
        placements.push(Placement {
            item,
            start: cursor,
            end,
        });
        cursor = end;
    }

    (placements, queue)
}
