//! Boundary-format export.
//!
//! Serializes a resolved timeline to the XML-like exchange document: one
//! `<day>` per trip day, events ordered by construction sequence within a
//! day, kind-specific payload fields, times at minute granularity.
//
// TODO: import (parsing a document back into a TripPlan) is unimplemented;
// it needs a stability guarantee on this format first.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::event::{EventPayload, TimelineEvent};
use crate::planner::TripPlan;

/// Render a plan as the exchange document.
pub fn to_xml(plan: &TripPlan) -> String {
    let mut days: BTreeMap<u32, Vec<&TimelineEvent>> = BTreeMap::new();
    for event in &plan.events {
        days.entry(event.day_number).or_default().push(event);
    }
    for events in days.values_mut() {
        events.sort_by_key(|e| e.sequence);
    }

    let mut out = String::new();
    out.push_str("<trip-timeline>\n");
    let _ = writeln!(
        out,
        "  <trip-info origin=\"{}\" destination=\"{}\" start-date=\"{}\" end-date=\"{}\" start-time=\"{}\" end-time=\"{}\"/>",
        escape(&plan.trip.origin),
        escape(&plan.trip.destination),
        plan.trip.start.format("%Y-%m-%d"),
        plan.trip.end.format("%Y-%m-%d"),
        plan.trip.start.format("%H:%M"),
        plan.trip.end.format("%H:%M"),
    );
    out.push_str("  <timeline-events>\n");

    for (day_number, events) in &days {
        let date = plan.trip.date_of_day(*day_number);
        let _ = writeln!(out, "    <day number=\"{day_number}\" date=\"{date}\">");
        for event in events {
            write_event(&mut out, event);
        }
        out.push_str("    </day>\n");
    }

    out.push_str("  </timeline-events>\n");
    out.push_str("</trip-timeline>\n");
    out
}

fn write_event(out: &mut String, event: &TimelineEvent) {
    let deps: Vec<&str> = event.dependencies.iter().map(String::as_str).collect();
    let _ = writeln!(
        out,
        "      <event type=\"{}\" sequence=\"{}\" dependencies=\"{}\">",
        event.kind_str(),
        event.sequence,
        deps.join(","),
    );

    match &event.payload {
        EventPayload::Transit { from, to, mode } => {
            let _ = writeln!(
                out,
                "        <from>{}</from><to>{}</to><mode>{}</mode>",
                escape(from),
                escape(to),
                mode.as_str(),
            );
        }
        EventPayload::Attraction { name, category } => {
            let _ = writeln!(
                out,
                "        <name>{}</name><category>{}</category>",
                escape(name),
                escape(category),
            );
        }
        EventPayload::Hotel { name, address } => {
            let _ = writeln!(
                out,
                "        <name>{}</name><address>{}</address>",
                escape(name),
                escape(address),
            );
        }
        EventPayload::Meal { meal_type, venue } => {
            let _ = writeln!(out, "        <meal-type>{}</meal-type>", meal_type.as_str());
            if let Some(venue) = venue {
                let _ = writeln!(out, "        <venue>{}</venue>", escape(venue));
            }
        }
        EventPayload::Sleep => {}
    }

    let _ = writeln!(
        out,
        "        <start-time>{}</start-time>\n        <end-time>{}</end-time>",
        event.start.format("%H:%M"),
        event.end.format("%H:%M"),
    );
    out.push_str("      </event>\n");
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
