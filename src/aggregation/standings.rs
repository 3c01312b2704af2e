use serde::Serialize;
use std::cmp::Ordering;

use super::best_times::best_for_event;
use crate::domain::{EventKey, NameMatch, RaceResult};
use crate::standards::{evaluate_motivational, scale_position, Achievement, StandardsEvaluator};

#[derive(Debug, Clone, Serialize)]
pub struct StandingsEntry {
    pub swimmer: String,
    pub best_seconds: Option<f64>,
    /// 0 = slowest end of the scale, 1 = fastest
    pub position: Option<f64>,
    pub achieved: Option<Achievement>,
}

impl StandingsEntry {
    pub fn level_label(&self) -> Option<String> {
        self.achieved.map(|a| a.compact_label())
    }
}

/// Where each named swimmer stands in one event relative to the motivational
/// scale. Swimmers with a time are ordered fastest first; the rest follow in
/// the order given. `None` when there are no standards for the event.
pub fn standings(
    results: &[RaceResult],
    event: &EventKey,
    swimmers: &[String],
    evaluator: &StandardsEvaluator,
    age: u32,
    padding: f64,
) -> Option<Vec<StandingsEntry>> {
    let cutoffs = evaluator.motivational_cutoffs(event, age)?;

    let mut entries: Vec<StandingsEntry> = swimmers
        .iter()
        .map(|swimmer| {
            let own = results
                .iter()
                .filter(|r| r.matches_swimmer(swimmer, NameMatch::Exact));
            let best_seconds = best_for_event(own, event).map(|(seconds, _)| seconds);

            StandingsEntry {
                swimmer: swimmer.clone(),
                best_seconds,
                position: best_seconds.and_then(|s| scale_position(s, &cutoffs, padding)),
                achieved: best_seconds.map(|s| evaluate_motivational(s, &cutoffs).achieved),
            }
        })
        .collect();

    entries.sort_by(|a, b| match (a.position, b.position) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    Some(entries)
}
