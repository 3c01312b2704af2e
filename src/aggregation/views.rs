use serde::Serialize;

use super::best_times::best_time_per_event;
use super::recent::newest_first;
use crate::domain::{EventKey, NameMatch, RaceResult};
use crate::standards::{Achievement, Evaluation, StandardsEvaluator};

/// A swimmer's fastest result in one event, with its evaluation
#[derive(Debug, Clone, Serialize)]
pub struct BestTimeView {
    pub event: EventKey,
    pub result: RaceResult,
    pub evaluation: Evaluation,
}

pub fn best_time_views(
    results: &[RaceResult],
    swimmer: &str,
    mode: NameMatch,
    evaluator: &StandardsEvaluator,
    age: u32,
) -> Vec<BestTimeView> {
    best_time_per_event(results, swimmer, mode)
        .into_iter()
        .map(|(event, result)| {
            let evaluation = evaluator.evaluate(result.time_seconds(), &event, age);
            BestTimeView {
                event,
                result,
                evaluation,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HighlightFilter {
    #[default]
    All,
    /// Leave out swims slower than every tier
    AchievedOnly,
}

/// Where a highlight's tier label came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelSource {
    Evaluated,
    /// The evaluator had no data; this is the label the feed recorded
    Recorded,
}

#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub result: RaceResult,
    pub tier_label: String,
    pub label_source: LabelSource,
    pub evaluation: Evaluation,
}

impl Highlight {
    fn build(result: &RaceResult, evaluator: &StandardsEvaluator, fallback_age: u32) -> Self {
        let age = result.age_years().unwrap_or(fallback_age);
        let evaluation = match result.event_key() {
            Ok(event) => evaluator.evaluate(result.time_seconds(), &event, age),
            Err(_) => Evaluation::unrated(),
        };

        let (tier_label, label_source) = match evaluation.tier.achieved {
            Achievement::Unrated if !result.time_standard.trim().is_empty() => {
                (result.time_standard.trim().to_string(), LabelSource::Recorded)
            }
            achieved => (achieved.label(), LabelSource::Evaluated),
        };

        Self {
            result: result.clone(),
            tier_label,
            label_source,
            evaluation,
        }
    }

    fn is_achievement(&self) -> bool {
        match self.evaluation.tier.achieved {
            Achievement::Tier(_) => true,
            Achievement::SlowerThan(_) => false,
            Achievement::Unrated => {
                self.label_source == LabelSource::Recorded && !self.tier_label.starts_with("Slower than")
            }
        }
    }
}

/// The `count` most recent results, newest first, each annotated with the
/// tier it achieved at the age recorded on it. `age` stands in for results
/// without one.
pub fn highlights(
    results: &[RaceResult],
    count: usize,
    evaluator: &StandardsEvaluator,
    age: u32,
    filter: HighlightFilter,
) -> Vec<Highlight> {
    newest_first(results)
        .into_iter()
        .map(|result| Highlight::build(result, evaluator, age))
        .filter(|highlight| filter == HighlightFilter::All || highlight.is_achievement())
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, Provenance, Stroke};
    use crate::standards::{Flavor, StandardsLibrary, StandardsTable, Tier};
    use serde_json::json;

    fn swim(event: &str, time: &str, date: &str, recorded: &str) -> RaceResult {
        RaceResult {
            name: "Jane Doe".to_string(),
            event: event.to_string(),
            time: time.to_string(),
            age: "12".to_string(),
            date: date.to_string(),
            meet: "Meet".to_string(),
            time_standard: recorded.to_string(),
            lsc: "PC".to_string(),
            team: "Harbor Aquatics".to_string(),
            provenance: Provenance::Official,
        }
    }

    fn library() -> StandardsLibrary {
        let feed = json!({ "Girls": { "11-12": { "SCY": { "FR": { "50": {
            "B": "41.20", "BB": "37.50", "A": "33.99", "AA": "31.00", "AAA": "29.80", "AAAA": "28.50"
        } } } } } });
        StandardsLibrary::new(
            Some(StandardsTable::from_feed(Flavor::Motivational, &feed).unwrap()),
            None,
            None,
        )
    }

    #[test]
    fn test_best_time_views_carry_evaluation() {
        let library = library();
        let evaluator = StandardsEvaluator::new(&library);
        let results = vec![
            swim("50 FR SCY", "32.00", "01/10/2025", "A"),
            swim("50 FR SCY", "30.50", "02/10/2025", "AA"),
            swim("100 FR SCY", "1:10.00", "02/10/2025", "A"),
        ];

        let views = best_time_views(&results, "Jane Doe", NameMatch::Exact, &evaluator, 12);
        assert_eq!(views.len(), 2);

        let fifty = views
            .iter()
            .find(|v| v.event == EventKey::new(50, Stroke::FR, Course::SCY))
            .unwrap();
        assert_eq!(fifty.result.time, "30.50");
        assert_eq!(fifty.evaluation.tier.achieved, Achievement::Tier(Tier::AA));

        let hundred = views.iter().find(|v| v.event.distance == 100).unwrap();
        assert_eq!(hundred.evaluation.tier.achieved, Achievement::Unrated);
    }

    #[test]
    fn test_highlights_newest_first_with_tiers() {
        let library = library();
        let evaluator = StandardsEvaluator::new(&library);
        let results = vec![
            swim("50 FR SCY", "45.00", "01/10/2025", ""),
            swim("50 FR SCY", "30.50", "03/10/2025", ""),
            swim("50 FR SCY", "33.00", "02/10/2025", ""),
        ];

        let top = highlights(&results, 2, &evaluator, 12, HighlightFilter::All);
        let labels: Vec<&str> = top.iter().map(|h| h.tier_label.as_str()).collect();
        assert_eq!(labels, vec!["AA", "A"]);
        assert!(top.iter().all(|h| h.label_source == LabelSource::Evaluated));
    }

    #[test]
    fn test_highlights_achieved_only_skips_slow_swims() {
        let library = library();
        let evaluator = StandardsEvaluator::new(&library);
        let results = vec![
            swim("50 FR SCY", "45.00", "04/10/2025", "Slower than B"),
            swim("100 BK SCY", "1:20.00", "03/10/2025", "BB"),
            swim("100 BR SCY", "1:40.00", "03/09/2025", "Slower than B"),
            swim("50 FR SCY", "33.00", "02/10/2025", "A"),
        ];

        let top = highlights(&results, 5, &evaluator, 12, HighlightFilter::AchievedOnly);
        let labels: Vec<(&str, LabelSource)> = top
            .iter()
            .map(|h| (h.tier_label.as_str(), h.label_source))
            .collect();
        assert_eq!(
            labels,
            vec![("BB", LabelSource::Recorded), ("A", LabelSource::Evaluated)]
        );
    }

    #[test]
    fn test_highlights_rate_each_swim_at_its_recorded_age() {
        let library = library();
        let evaluator = StandardsEvaluator::new(&library);
        let mut at_thirteen = swim("50 FR SCY", "30.50", "03/10/2025", "");
        at_thirteen.age = "13".to_string();
        let mut undated_age = swim("50 FR SCY", "33.00", "02/10/2025", "");
        undated_age.age = "N/A".to_string();
        let results = vec![
            at_thirteen,
            undated_age,
            swim("50 FR SCY", "33.50", "01/10/2025", ""),
        ];

        let top = highlights(&results, 5, &evaluator, 13, HighlightFilter::All);
        let labels: Vec<&str> = top.iter().map(|h| h.tier_label.as_str()).collect();

        // No 13-14 table: only the swims at 12 get a tier
        assert_eq!(labels, vec!["Unrated", "Unrated", "A"]);
    }

    #[test]
    fn test_unrated_without_recorded_label_says_unrated() {
        let library = library();
        let evaluator = StandardsEvaluator::new(&library);
        let results = vec![swim("50 FL LCM", "40.00", "01/10/2025", "")];

        let top = highlights(&results, 5, &evaluator, 12, HighlightFilter::All);
        assert_eq!(top[0].tier_label, "Unrated");
        assert_eq!(top[0].label_source, LabelSource::Evaluated);
    }
}
