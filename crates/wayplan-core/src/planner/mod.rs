//! Trip orchestration.
//!
//! Walks the trip day by day: resolves that day's hotel and transit legs,
//! hands the day its share of the item pool, builds the day's events, then
//! runs one dependency-resolution pass over the whole multi-day set so
//! cross-day chaining is honored globally.

pub mod day;

use serde::{Deserialize, Serialize};

use crate::calendar::DayTemplate;
use crate::error::PlanError;
use crate::event::TimelineEvent;
use crate::hotel::StayTimes;
use crate::items::ItemQueue;
use crate::resolver::{self, ResolvedTimeline};
use crate::sources::{AttractionSource, HotelSelection, TransitLegProvider};
use crate::transit::LegKind;
use crate::trip::TripWindow;

use day::{DayInput, DayLegs};

/// A fully built and resolved trip timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    pub trip: TripWindow,
    pub events: Vec<TimelineEvent>,
    /// Event ids the resolver could not order by dependencies (cycle or
    /// dangling reference). Empty on a healthy build.
    #[serde(default)]
    pub unresolved: Vec<String>,
}

/// Builds one trip timeline from the collaborator sources.
///
/// A build is a pure function of its inputs: no wall-clock reads, no state
/// carried between calls.
pub struct TripPlanner<'a> {
    trip: TripWindow,
    template: DayTemplate,
    stay: StayTimes,
    attractions: &'a dyn AttractionSource,
    hotels: &'a dyn HotelSelection,
    legs: &'a dyn TransitLegProvider,
}

impl<'a> TripPlanner<'a> {
    pub fn new(
        trip: TripWindow,
        attractions: &'a dyn AttractionSource,
        hotels: &'a dyn HotelSelection,
        legs: &'a dyn TransitLegProvider,
    ) -> Self {
        Self {
            trip,
            template: DayTemplate::standard(),
            stay: StayTimes::default(),
            attractions,
            hotels,
            legs,
        }
    }

    /// Replace the standard availability template.
    pub fn with_template(mut self, template: DayTemplate) -> Self {
        self.template = template;
        self
    }

    /// Replace the default stay timing.
    pub fn with_stay_times(mut self, stay: StayTimes) -> Self {
        self.stay = stay;
        self
    }

    /// Build the timeline.
    ///
    /// # Errors
    /// Fails only on configuration errors: an invalid trip window or a
    /// malformed template. Missing hotels, an exhausted item pool, or
    /// absent transit legs degrade the plan instead.
    pub fn plan(&self) -> Result<TripPlan, PlanError> {
        self.trip.validate()?;
        self.template.validate()?;

        let days = self.trip.day_count();
        let queues = ItemQueue::new(self.attractions.items()).partition(days);
        tracing::debug!(days, "planning trip");

        let mut all_events: Vec<TimelineEvent> = Vec::new();
        let mut prev_last: Option<String> = None;

        // Legs are looked up day by day in trip order; each absence changes
        // which synthetic events the day emits.
        for (day_number, queue) in (1..=days).zip(queues) {
            let date = self.trip.date_of_day(day_number);
            let legs = DayLegs {
                home_to_hub: self.legs.find_leg(LegKind::HomeToHub, date),
                hub_to_hotel: self.legs.find_leg(LegKind::HubToHotel, date),
                hotel_to_first_stop: self.legs.find_leg(LegKind::HotelToFirstStop, date),
                last_stop_to_hotel: self.legs.find_leg(LegKind::LastStopToHotel, date),
                hotel_to_home: self.legs.find_leg(LegKind::HotelToHome, date),
            };
            let input = DayInput {
                day_number,
                date,
                is_first: day_number == 1,
                is_last: day_number == days,
                hotel: self.hotels.hotel_for_day(day_number),
                legs,
                slots: self.template.instantiate(date),
                queue,
            };

            let (events, leftover) = day::build_day(&self.trip, &self.stay, input, prev_last.clone());
            tracing::debug!(
                day = day_number,
                events = events.len(),
                dropped_items = leftover.len(),
                "day built"
            );
            // An under-consuming day's leftover chunk is dropped, not rolled
            // forward.
            drop(leftover);

            if let Some(last) = events.last() {
                prev_last = Some(last.id.clone());
            }
            all_events.extend(events);
        }

        let ResolvedTimeline { events, unresolved } = resolver::resolve(all_events);
        Ok(TripPlan {
            trip: self.trip.clone(),
            events,
            unresolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{AvailabilitySlot, SlotKind};
    use crate::hotel::Hotel;
    use crate::items::MovableItem;
    use crate::sources::{PerDayHotels, StaticItems, StaticLegTable};
    use crate::transit::{TransitLeg, TransitMode};
    use chrono::{NaiveTime, TimeZone, Utc};

    fn attraction(id: &str, minutes: i64) -> MovableItem {
        MovableItem::Attraction {
            id: id.to_string(),
            name: format!("Attraction {id}"),
            category: "museum".to_string(),
            duration_minutes: minutes,
        }
    }

    fn hotel() -> Hotel {
        Hotel {
            id: "h1".to_string(),
            name: "Harbor Inn".to_string(),
            address: "2 Quay St".to_string(),
        }
    }

    fn one_day_trip() -> TripWindow {
        TripWindow::try_new(
            "Home",
            "Kyoto",
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 22, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn three_day_trip() -> TripWindow {
        TripWindow::try_new(
            "Home",
            "Kyoto",
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 3, 20, 0, 0).unwrap(),
        )
        .unwrap()
    }

    /// Full leg table for every kind on every trip day.
    fn full_legs(trip: &TripWindow) -> StaticLegTable {
        let mut table = StaticLegTable::default();
        for day in 1..=trip.day_count() {
            let date = trip.date_of_day(day);
            let at = |h: u32, m: u32| date.and_hms_opt(h, m, 0).unwrap().and_utc();
            let leg = |kind, from: &str, to: &str, dep, arr, mode| TransitLeg {
                kind,
                from: from.to_string(),
                to: to.to_string(),
                departs: dep,
                arrives: arr,
                mode,
                fare: Some(500),
            };
            table.add(leg(
                LegKind::HomeToHub,
                "Home",
                "Central Station",
                at(8, 0),
                at(8, 30),
                TransitMode::Train,
            ));
            table.add(leg(
                LegKind::HubToHotel,
                "Central Station",
                "Harbor Inn",
                at(8, 35),
                at(8, 55),
                TransitMode::Taxi,
            ));
            table.add(leg(
                LegKind::HotelToFirstStop,
                "Harbor Inn",
                "first stop",
                at(9, 45),
                at(10, 0),
                TransitMode::Walk,
            ));
            table.add(leg(
                LegKind::LastStopToHotel,
                "last stop",
                "Harbor Inn",
                at(19, 0),
                at(19, 15),
                TransitMode::Walk,
            ));
            table.add(leg(
                LegKind::HotelToHome,
                "Harbor Inn",
                "Home",
                at(19, 30),
                at(20, 0),
                TransitMode::Train,
            ));
        }
        table
    }

    fn kinds(plan: &TripPlan) -> Vec<&'static str> {
        plan.events.iter().map(|e| e.kind_str()).collect()
    }

    #[test]
    fn sparse_day_trip_has_only_attractions_and_sleep() {
        // One day, two 90-minute attractions, no hotel, no legs.
        let trip = one_day_trip();
        let items = StaticItems(vec![attraction("a", 90), attraction("b", 90)]);
        let hotels = PerDayHotels::new();
        let legs = StaticLegTable::default();

        let plan = TripPlanner::new(trip.clone(), &items, &hotels, &legs)
            .plan()
            .unwrap();

        let attraction_events: Vec<_> = plan
            .events
            .iter()
            .filter(|e| e.kind_str() == "attraction")
            .collect();
        assert_eq!(attraction_events.len(), 2);
        assert!(!kinds(&plan).contains(&"transit"));
        assert!(!kinds(&plan).contains(&"hotel"));

        // Both placements fall inside the template's attraction windows.
        let morning = (
            trip.date_of_day(1).and_hms_opt(10, 0, 0).unwrap().and_utc(),
            trip.date_of_day(1).and_hms_opt(12, 0, 0).unwrap().and_utc(),
        );
        let afternoon = (
            trip.date_of_day(1).and_hms_opt(13, 0, 0).unwrap().and_utc(),
            trip.date_of_day(1).and_hms_opt(17, 0, 0).unwrap().and_utc(),
        );
        for event in &attraction_events {
            let in_morning = event.start >= morning.0 && event.end <= morning.1;
            let in_afternoon = event.start >= afternoon.0 && event.end <= afternoon.1;
            assert!(in_morning || in_afternoon);
        }
        assert!(plan.unresolved.is_empty());
    }

    #[test]
    fn full_three_day_trip_threads_transit_and_hotels() {
        let trip = three_day_trip();
        let items = StaticItems((0..6).map(|i| attraction(&i.to_string(), 90)).collect());
        let mut hotels = PerDayHotels::new();
        hotels.select_all(trip.day_count(), hotel());
        let legs = full_legs(&trip);

        let plan = TripPlanner::new(trip.clone(), &items, &hotels, &legs)
            .plan()
            .unwrap();
        assert!(plan.unresolved.is_empty());

        // Day 1 begins home -> hub, then hub -> hotel.
        let day1: Vec<_> = plan.events.iter().filter(|e| e.day_number == 1).collect();
        assert_eq!(day1[0].kind_str(), "transit");
        assert_eq!(day1[1].kind_str(), "transit");
        match (&day1[0].payload, &day1[1].payload) {
            (
                crate::event::EventPayload::Transit { to: first_to, .. },
                crate::event::EventPayload::Transit { to: second_to, .. },
            ) => {
                assert_eq!(first_to, "Central Station");
                assert_eq!(second_to, "Harbor Inn");
            }
            _ => panic!("expected transit payloads"),
        }

        // Day 3 ends with the return leg home.
        let last = plan.events.last().unwrap();
        assert_eq!(last.day_number, 3);
        match &last.payload {
            crate::event::EventPayload::Transit { to, .. } => assert_eq!(to, "Home"),
            other => panic!("expected return transit, got {other:?}"),
        }

        // Exactly one hotel event per day.
        for day in 1..=3 {
            let count = plan
                .events
                .iter()
                .filter(|e| e.day_number == day && e.kind_str() == "hotel")
                .count();
            assert_eq!(count, 1, "day {day}");
        }

        // Every event lies within the trip window.
        for event in &plan.events {
            assert!(event.start >= trip.start && event.end <= trip.end);
        }

        // Timeline is sorted by start instant, and dependencies resolve to
        // earlier indices.
        for pair in plan.events.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
        for (i, event) in plan.events.iter().enumerate() {
            for dep in &event.dependencies {
                assert!(
                    plan.events[..i].iter().any(|e| &e.id == dep),
                    "dependency {dep} of {} not earlier",
                    event.id
                );
            }
        }
    }

    #[test]
    fn zero_attractions_still_emit_meals_and_sleep() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let template = DayTemplate::new(vec![
            AvailabilitySlot::new("morning", t(10, 0), t(12, 0), SlotKind::Available),
            AvailabilitySlot::new("lunch", t(12, 0), t(13, 0), SlotKind::Meal),
            AvailabilitySlot::new("afternoon", t(13, 0), t(17, 0), SlotKind::Available),
            AvailabilitySlot::new("sleep", t(19, 0), t(10, 0), SlotKind::Sleep),
        ])
        .unwrap();

        let trip = one_day_trip();
        let items = StaticItems(Vec::new());
        let hotels = PerDayHotels::new();
        let legs = StaticLegTable::default();

        let plan = TripPlanner::new(trip, &items, &hotels, &legs)
            .with_template(template)
            .plan()
            .unwrap();

        assert_eq!(kinds(&plan), vec!["meal", "sleep"]);
    }

    #[test]
    fn identical_inputs_build_identical_plans() {
        let trip = three_day_trip();
        let items = StaticItems((0..5).map(|i| attraction(&i.to_string(), 75)).collect());
        let mut hotels = PerDayHotels::new();
        hotels.select_all(trip.day_count(), hotel());
        let legs = full_legs(&trip);

        let a = TripPlanner::new(trip.clone(), &items, &hotels, &legs)
            .plan()
            .unwrap();
        let b = TripPlanner::new(trip, &items, &hotels, &legs).plan().unwrap();

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn no_item_is_scheduled_twice_across_the_trip() {
        let trip = three_day_trip();
        let items = StaticItems((0..7).map(|i| attraction(&i.to_string(), 45)).collect());
        let hotels = PerDayHotels::new();
        let legs = StaticLegTable::default();

        let plan = TripPlanner::new(trip, &items, &hotels, &legs).plan().unwrap();

        let mut seen = std::collections::HashSet::new();
        for event in plan.events.iter().filter(|e| e.kind_str() == "attraction") {
            match &event.payload {
                crate::event::EventPayload::Attraction { name, .. } => {
                    assert!(seen.insert(name.clone()), "{name} scheduled twice");
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn inverted_window_is_fatal() {
        let trip = TripWindow {
            origin: "a".to_string(),
            destination: "b".to_string(),
            start: Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        };
        let items = StaticItems(Vec::new());
        let hotels = PerDayHotels::new();
        let legs = StaticLegTable::default();

        let result = TripPlanner::new(trip, &items, &hotels, &legs).plan();
        assert!(matches!(result, Err(PlanError::Validation(_))));
    }
}
