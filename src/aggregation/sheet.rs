use serde::Serialize;

use super::best_times::best_for_event;
use crate::domain::{format_gap, format_seconds_to_time, Course, EventKey, NameMatch, RaceResult, Stroke};
use crate::standards::{evaluate_motivational, NextTier, StandardsEvaluator, TierResult};

/// Courses in the order the sheet lists them
pub const SHEET_COURSES: [Course; 2] = [Course::LCM, Course::SCY];

/// One event row of a per-stroke sheet
#[derive(Debug, Clone, Serialize)]
pub struct SheetRow {
    pub event: EventKey,
    pub best: Option<RaceResult>,
    pub tier: TierResult,
}

impl SheetRow {
    pub fn time_display(&self) -> String {
        let seconds = self.best.as_ref().and_then(|r| r.time_seconds());
        format_seconds_to_time(seconds)
    }

    pub fn is_unofficial(&self) -> bool {
        self.best.as_ref().is_some_and(|r| r.is_unofficial())
    }

    /// `"AA -1.20"` style delta towards the next tier, empty when there is
    /// nothing left to chase.
    pub fn delta_display(&self) -> String {
        match (self.tier.next, self.tier.gap_seconds) {
            (NextTier::Tier(next), Some(gap)) => format!("{} {}", next, format_gap(gap)),
            _ => String::new(),
        }
    }
}

/// Rows for every standard distance of `stroke`, long course first, limited
/// to events that have a motivational cell for the swimmer's age. The best
/// candidate may come from either feed.
pub fn stroke_sheet(
    results: &[RaceResult],
    swimmer: &str,
    stroke: Stroke,
    evaluator: &StandardsEvaluator,
    age: u32,
) -> Vec<SheetRow> {
    let candidates: Vec<&RaceResult> = results
        .iter()
        .filter(|r| r.matches_swimmer(swimmer, NameMatch::Exact))
        .collect();

    let mut rows = Vec::new();
    for course in SHEET_COURSES {
        for distance in stroke.standard_distances() {
            let event = EventKey::new(*distance, stroke, course);
            let Some(cutoffs) = evaluator.motivational_cutoffs(&event, age) else {
                continue;
            };

            let best = best_for_event(candidates.iter().copied(), &event);
            let tier = best
                .map(|(seconds, _)| evaluate_motivational(seconds, &cutoffs))
                .unwrap_or_else(TierResult::unrated);

            rows.push(SheetRow {
                event,
                best: best.map(|(_, result)| result.clone()),
                tier,
            });
        }
    }
    rows
}
