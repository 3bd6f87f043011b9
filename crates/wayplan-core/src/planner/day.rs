//! Per-day event construction.
//!
//! Builds one day's events in a fixed order: inbound transit, hotel
//! check-in, then the template slots -- packing available/venue windows,
//! emitting meal and sleep slots as-is -- and the return leg on the final
//! day. Every event's dependency set is the full set of ids constructed so
//! far that day; the first event of a later day also depends on the previous
//! day's last event. Everything is clamped into the trip window; a range
//! that collapses is skipped.

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use std::collections::BTreeSet;

use crate::calendar::{DaySlot, SlotKind};
use crate::event::{EventPayload, MealType, TimelineEvent};
use crate::hotel::{Hotel, StayTimes};
use crate::items::{ItemQueue, MovableItem};
use crate::packer;
use crate::transit::TransitLeg;
use crate::trip::TripWindow;

/// Transit legs resolved for one day, by fixed purpose. A `None` means the
/// provider had no match for that kind on that date; the corresponding
/// event is simply not emitted.
#[derive(Debug, Clone, Default)]
pub struct DayLegs {
    pub home_to_hub: Option<TransitLeg>,
    pub hub_to_hotel: Option<TransitLeg>,
    pub hotel_to_first_stop: Option<TransitLeg>,
    pub last_stop_to_hotel: Option<TransitLeg>,
    pub hotel_to_home: Option<TransitLeg>,
}

/// Inputs for building one day's events.
#[derive(Debug)]
pub struct DayInput {
    pub day_number: u32,
    pub date: NaiveDate,
    pub is_first: bool,
    pub is_last: bool,
    pub hotel: Option<Hotel>,
    pub legs: DayLegs,
    pub slots: Vec<DaySlot>,
    pub queue: ItemQueue,
}

struct DayBuilder<'a> {
    trip: &'a TripWindow,
    day_number: u32,
    sequence: u32,
    day_ids: Vec<String>,
    cross_day_dep: Option<String>,
    events: Vec<TimelineEvent>,
}

impl<'a> DayBuilder<'a> {
    fn new(trip: &'a TripWindow, day_number: u32, cross_day_dep: Option<String>) -> Self {
        Self {
            trip,
            day_number,
            sequence: 0,
            day_ids: Vec::new(),
            cross_day_dep,
            events: Vec::new(),
        }
    }

    /// Clamp and append one event. Returns false when clamping collapsed the
    /// range and the event was skipped.
    fn push(&mut self, start: DateTime<Utc>, end: DateTime<Utc>, payload: EventPayload) -> bool {
        let Some((start, end)) = self.trip.clamp(start, end) else {
            return false;
        };

        let mut dependencies: BTreeSet<String> = self.day_ids.iter().cloned().collect();
        if self.day_ids.is_empty() {
            if let Some(prev) = &self.cross_day_dep {
                dependencies.insert(prev.clone());
            }
        }

        let id = TimelineEvent::make_id(self.day_number, self.sequence);
        self.day_ids.push(id.clone());
        self.events.push(TimelineEvent {
            id,
            day_number: self.day_number,
            sequence: self.sequence,
            dependencies,
            start,
            end,
            payload,
        });
        self.sequence += 1;
        true
    }

    fn push_leg(&mut self, leg: &TransitLeg) {
        self.push(
            leg.departs,
            leg.arrives,
            EventPayload::Transit {
                from: leg.from.clone(),
                to: leg.to.clone(),
                mode: leg.mode,
            },
        );
    }

    /// Synthetic transit event anchored to a placement instead of the leg's
    /// own instants.
    fn push_synthetic_leg(&mut self, leg: &TransitLeg, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.push(
            start,
            end,
            EventPayload::Transit {
                from: leg.from.clone(),
                to: leg.to.clone(),
                mode: leg.mode,
            },
        );
    }
}

fn placement_payload(item: &MovableItem, start: DateTime<Utc>) -> EventPayload {
    match item {
        MovableItem::Attraction { name, category, .. } => EventPayload::Attraction {
            name: name.clone(),
            category: category.clone(),
        },
        MovableItem::Venue { name, .. } => EventPayload::Meal {
            meal_type: MealType::from_start_hour(start.hour()),
            venue: Some(name.clone()),
        },
    }
}

/// Build one day's events. The item queue is moved in and its remaining
/// state moved out; the caller decides what happens to leftovers.
pub fn build_day(
    trip: &TripWindow,
    stay: &StayTimes,
    input: DayInput,
    prev_last: Option<String>,
) -> (Vec<TimelineEvent>, ItemQueue) {
    let mut builder = DayBuilder::new(trip, input.day_number, prev_last);
    let mut queue = input.queue;

    // Inbound transit: home to hub on day one, hub to hotel whenever a
    // hotel is selected that day.
    if input.is_first {
        if let Some(leg) = &input.legs.home_to_hub {
            builder.push_leg(leg);
        }
    }
    if input.hotel.is_some() {
        if let Some(leg) = &input.legs.hub_to_hotel {
            builder.push_leg(leg);
        }
    }

    // Hotel check-in window, derived from the day's own date.
    if let Some(hotel) = &input.hotel {
        let (start, end) = stay.check_in_window(input.date);
        builder.push(
            start,
            end,
            EventPayload::Hotel {
                name: hotel.name.clone(),
                address: hotel.address.clone(),
            },
        );
    }

    // Template slots in order. The return-to-hotel transit is emitted right
    // after the last packable slot so construction order stays aligned with
    // the clock.
    let last_packable = input.slots.iter().rposition(|s| s.kind.is_packable());
    let mut first_placement_done = false;
    let mut last_placement_end: Option<DateTime<Utc>> = None;

    for (index, slot) in input.slots.iter().enumerate() {
        match slot.kind {
            SlotKind::Sleep => {
                builder.push(slot.start, slot.end, EventPayload::Sleep);
            }
            SlotKind::Meal => {
                builder.push(
                    slot.start,
                    slot.end,
                    EventPayload::Meal {
                        meal_type: MealType::from_start_hour(slot.start.hour()),
                        venue: None,
                    },
                );
            }
            SlotKind::Available | SlotKind::Venue => {
                // Clamp the window before packing so an out-of-bounds window
                // consumes nothing from the queue.
                if let Some((ws, we)) = trip.clamp(slot.start, slot.end) {
                    let window = DaySlot {
                        label: slot.label.clone(),
                        kind: slot.kind,
                        start: ws,
                        end: we,
                    };
                    let (placements, rest) = packer::pack(&window, queue);
                    queue = rest;

                    for placement in &placements {
                        if !first_placement_done {
                            if let Some(leg) = &input.legs.hotel_to_first_stop {
                                let elapsed = Duration::minutes(leg.elapsed_minutes().max(0));
                                builder.push_synthetic_leg(
                                    leg,
                                    placement.start - elapsed,
                                    placement.start,
                                );
                            }
                            first_placement_done = true;
                        }
                        builder.push(
                            placement.start,
                            placement.end,
                            placement_payload(&placement.item, placement.start),
                        );
                        last_placement_end = Some(placement.end);
                    }
                }
            }
        }

        if Some(index) == last_packable {
            if let (Some(end), Some(leg)) =
                (last_placement_end, &input.legs.last_stop_to_hotel)
            {
                let elapsed = Duration::minutes(leg.elapsed_minutes().max(0));
                builder.push_synthetic_leg(leg, end, end + elapsed);
            }
        }
    }

    // Outbound return transit only on the final day.
    if input.is_last {
        if let Some(leg) = &input.legs.hotel_to_home {
            builder.push_leg(leg);
        }
    }

    (builder.events, queue)
}
