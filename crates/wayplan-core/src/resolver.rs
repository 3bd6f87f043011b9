//! Dependency resolution over a finite event set.
//!
//! Repeatedly appends any event whose dependencies are all satisfied. Events
//! left over when no progress is possible (a cycle, or a dependency id that
//! was never produced) are appended verbatim at the end and reported in the
//! diagnostic -- degraded, not fatal. The emitted guarantee is chronological
//! order: a final stable sort by start instant, with dependency order acting
//! as the tie-break among same-instant events.

use std::collections::HashSet;

use crate::event::TimelineEvent;

/// The event list after resolution, plus ids that could not be ordered by
/// their dependencies.
#[derive(Debug, Clone)]
pub struct ResolvedTimeline {
    pub events: Vec<TimelineEvent>,
    /// Ids appended without a satisfied dependency set. Empty on a healthy
    /// graph.
    pub unresolved: Vec<String>,
}

/// Resolve the dependency graph into one chronologically sorted list.
pub fn resolve(events: Vec<TimelineEvent>) -> ResolvedTimeline {
    let mut remaining = events;
    let mut resolved: Vec<TimelineEvent> = Vec::with_capacity(remaining.len());
    let mut completed: HashSet<String> = HashSet::with_capacity(remaining.len());

    loop {
        let next = remaining
            .iter()
            .position(|e| e.dependencies.iter().all(|dep| completed.contains(dep)));
        let Some(index) = next else {
            break;
        };
        let event = remaining.remove(index);
        completed.insert(event.id.clone());
        resolved.push(event);
    }

    let unresolved: Vec<String> = remaining.iter().map(|e| e.id.clone()).collect();
    if !unresolved.is_empty() {
        tracing::warn!(
            count = unresolved.len(),
            "events left unordered by dependency resolution"
        );
    }
    resolved.append(&mut remaining);

    // Stable: same-instant events keep their dependency-selection order.
    resolved.sort_by_key(|e| e.start);

    ResolvedTimeline {
        events: resolved,
        unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventPayload;
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap()
    }

    fn event(id: &str, deps: &[&str], start_hour: u32) -> TimelineEvent {
        TimelineEvent {
            id: id.to_string(),
            day_number: 1,
            sequence: 0,
            dependencies: deps.iter().map(|d| d.to_string()).collect::<BTreeSet<_>>(),
            start: at(start_hour, 0),
            end: at(start_hour, 30),
            payload: EventPayload::Sleep,
        }
    }

    #[test]
    fn dependencies_precede_dependents() {
        let events = vec![
            event("c", &["a", "b"], 12),
            event("a", &[], 10),
            event("b", &["a"], 11),
        ];
        let resolved = resolve(events);
        assert!(resolved.unresolved.is_empty());

        let order: Vec<_> = resolved.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn output_is_chronological_even_when_deps_disagree() {
        // "late" has no deps but starts first; chronological order wins.
        let events = vec![event("early", &[], 9), event("late", &["early"], 8)];
        let resolved = resolve(events);
        let order: Vec<_> = resolved.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order, vec!["late", "early"]);
        assert!(resolved.unresolved.is_empty());
    }

    #[test]
    fn cycle_degrades_with_diagnostic() {
        let events = vec![
            event("a", &[], 10),
            event("b", &["c"], 11),
            event("c", &["b"], 12),
        ];
        let resolved = resolve(events);

        assert_eq!(resolved.events.len(), 3);
        assert_eq!(resolved.unresolved, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn dangling_dependency_degrades_with_diagnostic() {
        let events = vec![event("a", &[], 10), event("b", &["ghost"], 11)];
        let resolved = resolve(events);

        assert_eq!(resolved.events.len(), 2);
        assert_eq!(resolved.unresolved, vec!["b".to_string()]);
    }

    #[test]
    fn same_instant_events_keep_dependency_order() {
        let events = vec![event("second", &["first"], 10), event("first", &[], 10)];
        let resolved = resolve(events);
        let order: Vec<_> = resolved.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    proptest! {
        #[test]
        fn chain_resolves_from_any_input_order(
            permutation in Just((0..6usize).collect::<Vec<_>>()).prop_shuffle(),
        ) {
            // A 6-event linear chain, shuffled arbitrarily, always resolves
            // completely and chronologically.
            let chain: Vec<TimelineEvent> = (0..6u32)
                .map(|i| {
                    let deps: Vec<String> = if i == 0 {
                        Vec::new()
                    } else {
                        vec![format!("e{}", i - 1)]
                    };
                    let dep_refs: Vec<&str> = deps.iter().map(String::as_str).collect();
                    event(&format!("e{i}"), &dep_refs, 8 + i)
                })
                .collect();
            let shuffled: Vec<TimelineEvent> =
                permutation.iter().map(|&i| chain[i].clone()).collect();

            let resolved = resolve(shuffled);
            prop_assert!(resolved.unresolved.is_empty());
            for pair in resolved.events.windows(2) {
                prop_assert!(pair[0].start <= pair[1].start);
            }
        }
    }
}
