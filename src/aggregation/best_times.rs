use log::debug;
use std::collections::BTreeMap;

use crate::domain::{EventKey, NameMatch, RaceResult};

/// Fastest valid result per event for one swimmer.
///
/// Results with an unparseable event label or time are skipped. On equal
/// times the first result encountered is kept.
pub fn best_time_per_event(
    results: &[RaceResult],
    swimmer: &str,
    mode: NameMatch,
) -> BTreeMap<EventKey, RaceResult> {
    let mut bests: BTreeMap<EventKey, (f64, &RaceResult)> = BTreeMap::new();

    for result in results.iter().filter(|r| r.matches_swimmer(swimmer, mode)) {
        let Ok(event) = result.event_key() else {
            debug!("Skipping result with unparseable event {:?}", result.event);
            continue;
        };
        let Some(seconds) = result.time_seconds() else {
            debug!("Skipping {} result with unparseable time {:?}", event, result.time);
            continue;
        };

        bests
            .entry(event)
            .and_modify(|best| {
                if seconds < best.0 {
                    *best = (seconds, result);
                }
            })
            .or_insert((seconds, result));
    }

    bests
        .into_iter()
        .map(|(event, (_, result))| (event, result.clone()))
        .collect()
}

/// Fastest valid result among candidates for a single event
pub fn best_for_event<'a, I>(candidates: I, event: &EventKey) -> Option<(f64, &'a RaceResult)>
where
    I: IntoIterator<Item = &'a RaceResult>,
{
    candidates
        .into_iter()
        .filter(|r| r.event_key().is_ok_and(|key| key == *event))
        .filter_map(|r| r.time_seconds().map(|seconds| (seconds, r)))
        .fold(None, |best, (seconds, result)| match best {
            Some((best_seconds, _)) if best_seconds <= seconds => best,
            _ => Some((seconds, result)),
        })
}
