use std::collections::BTreeMap;

use crate::domain::dates::date_sort_key;
use crate::domain::{RaceResult, Stroke};

/// Results ordered newest first. The sort is stable and unparseable dates
/// sort as the oldest possible date.
pub fn newest_first(results: &[RaceResult]) -> Vec<&RaceResult> {
    let mut sorted: Vec<&RaceResult> = results.iter().collect();
    sorted.sort_by_key(|r| std::cmp::Reverse(date_sort_key(&r.date)));
    sorted
}

/// The `n` most recent results
pub fn most_recent_n(results: &[RaceResult], n: usize) -> Vec<&RaceResult> {
    let mut sorted = newest_first(results);
    sorted.truncate(n);
    sorted
}

/// The most recent result for each stroke. Results whose label carries no
/// recognisable stroke are left out.
pub fn most_recent_per_stroke(results: &[RaceResult]) -> BTreeMap<Stroke, &RaceResult> {
    let mut latest = BTreeMap::new();
    for result in newest_first(results) {
        if let Some(stroke) = result.stroke() {
            latest.entry(stroke).or_insert(result);
        }
    }
    latest
}
