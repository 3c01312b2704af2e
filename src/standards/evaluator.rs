use serde::Serialize;

use super::age_group::{motivational_age_group, regional_age_group};
use super::table::StandardsLibrary;
use super::types::{
    Achievement, NextTier, RegionalBody, RegionalCuts, Target, TargetLabel, Tier, TierCutoffs, TierResult,
};
use crate::domain::EventKey;

/// Evaluates a time against one motivational cell.
///
/// Tiers are scanned fastest to slowest in canonical order regardless of how
/// the cell was stored; absent tiers are skipped. The first tier with
/// `time <= cutoff` is achieved, so an exact cutoff counts. The gap to the
/// next tier is the raw signed `cutoff(next) - time`.
pub fn evaluate_motivational(time_seconds: f64, cutoffs: &TierCutoffs) -> TierResult {
    let present: Vec<(Tier, f64)> = Tier::CANONICAL_ORDER
        .into_iter()
        .filter_map(|tier| cutoffs.get(&tier).map(|cutoff| (tier, *cutoff)))
        .collect();

    if !time_seconds.is_finite() || present.is_empty() {
        return TierResult::unrated();
    }

    match present.iter().position(|(_, cutoff)| time_seconds <= *cutoff) {
        Some(0) => TierResult {
            achieved: Achievement::Tier(present[0].0),
            next: NextTier::Max,
            gap_seconds: None,
        },
        Some(index) => {
            let (next_tier, next_cutoff) = present[index - 1];
            TierResult {
                achieved: Achievement::Tier(present[index].0),
                next: NextTier::Tier(next_tier),
                gap_seconds: Some(next_cutoff - time_seconds),
            }
        }
        None => {
            let (loosest, cutoff) = present[present.len() - 1];
            TierResult {
                achieved: Achievement::SlowerThan(loosest),
                next: NextTier::Tier(loosest),
                gap_seconds: Some(cutoff - time_seconds),
            }
        }
    }
}

/// The regional meet a time qualifies for, checking bodies in
/// [`RegionalBody::PRIORITY`] order.
pub fn evaluate_regional(time_seconds: f64, cuts: &RegionalCuts) -> Option<RegionalBody> {
    RegionalBody::PRIORITY
        .into_iter()
        .find(|body| cuts.get(*body).is_some_and(|cut| time_seconds <= cut))
}

/// The slowest cutoff, across both standard systems, that the time has not
/// met yet. `None` when every known cutoff is already beaten.
pub fn unified_next_target(
    time_seconds: f64,
    cutoffs: Option<&TierCutoffs>,
    regional: &RegionalCuts,
) -> Option<Target> {
    let mut ladder: Vec<(TargetLabel, f64)> = Vec::new();

    if let Some(cutoffs) = cutoffs {
        ladder.extend(
            Tier::CANONICAL_ORDER
                .into_iter()
                .filter_map(|tier| cutoffs.get(&tier).map(|c| (TargetLabel::Motivational(tier), *c))),
        );
    }
    ladder.extend(
        RegionalBody::PRIORITY
            .into_iter()
            .filter_map(|body| regional.get(body).map(|c| (TargetLabel::Regional(body), c))),
    );

    ladder.sort_by(|a, b| b.1.total_cmp(&a.1));

    ladder
        .into_iter()
        .find(|(_, cutoff)| *cutoff < time_seconds)
        .map(|(label, cutoff)| Target {
            label,
            cutoff_seconds: cutoff,
            gap_seconds: time_seconds - cutoff,
        })
}

/// Everything known about one time for one event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub tier: TierResult,
    pub regional: Option<RegionalBody>,
    pub next_target: Option<Target>,
}

impl Evaluation {
    pub fn unrated() -> Self {
        Self {
            tier: TierResult::unrated(),
            regional: None,
            next_target: None,
        }
    }
}

/// Resolves standards cells for a swimmer's age and evaluates times against
/// them.
pub struct StandardsEvaluator<'a> {
    library: &'a StandardsLibrary,
}

impl<'a> StandardsEvaluator<'a> {
    pub fn new(library: &'a StandardsLibrary) -> Self {
        Self { library }
    }

    pub fn motivational_cutoffs(&self, event: &EventKey, age: u32) -> Option<TierCutoffs> {
        self.library.lookup_motivational(
            motivational_age_group(age),
            event.course,
            event.stroke,
            event.distance,
        )
    }

    pub fn regional_cuts(&self, event: &EventKey, age: u32) -> RegionalCuts {
        let cut = |body| {
            self.library.lookup_regional_cut(
                body,
                &regional_age_group(body, age),
                event.course,
                event.stroke,
                event.distance,
            )
        };

        RegionalCuts {
            fw: cut(RegionalBody::FW),
            agc: cut(RegionalBody::AGC),
        }
    }

    /// Full evaluation of a time; unknown times are unrated.
    pub fn evaluate(&self, time_seconds: Option<f64>, event: &EventKey, age: u32) -> Evaluation {
        let Some(time) = time_seconds else {
            return Evaluation::unrated();
        };

        let cutoffs = self.motivational_cutoffs(event, age);
        let regional = self.regional_cuts(event, age);

        Evaluation {
            tier: cutoffs
                .as_ref()
                .map(|c| evaluate_motivational(time, c))
                .unwrap_or_else(TierResult::unrated),
            regional: evaluate_regional(time, &regional),
            next_target: unified_next_target(time, cutoffs.as_ref(), &regional),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, Stroke};
    use crate::standards::table::{Flavor, StandardsTable};
    use serde_json::json;

    fn reference_cutoffs() -> TierCutoffs {
        TierCutoffs::from([
            (Tier::AAAA, 28.50),
            (Tier::AAA, 29.80),
            (Tier::AA, 31.00),
            (Tier::A, 33.99),
            (Tier::BB, 37.50),
            (Tier::B, 41.20),
        ])
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_exact_cutoff_achieves_tier_with_signed_gap() {
        let result = evaluate_motivational(33.99, &reference_cutoffs());

        assert_eq!(result.achieved, Achievement::Tier(Tier::A));
        assert_eq!(result.next, NextTier::Tier(Tier::AA));
        assert!(approx(result.gap_seconds.unwrap(), 31.00 - 33.99));
        assert!(result.gap_seconds.unwrap() < 0.0);
    }

    #[test]
    fn test_slower_than_loosest_tier() {
        let result = evaluate_motivational(45.00, &reference_cutoffs());

        assert_eq!(result.achieved, Achievement::SlowerThan(Tier::B));
        assert_eq!(result.achieved.label(), "Slower than B");
        assert_eq!(result.next, NextTier::Tier(Tier::B));
        assert!(approx(result.gap_seconds.unwrap(), 41.20 - 45.00));
    }

    #[test]
    fn test_fastest_tier_has_no_gap() {
        let result = evaluate_motivational(27.00, &reference_cutoffs());

        assert_eq!(result.achieved, Achievement::Tier(Tier::AAAA));
        assert_eq!(result.next, NextTier::Max);
        assert_eq!(result.gap_seconds, None);
    }

    #[test]
    fn test_absent_tiers_are_skipped() {
        let cutoffs = TierCutoffs::from([(Tier::AAAA, 28.50), (Tier::A, 33.99), (Tier::B, 41.20)]);

        let result = evaluate_motivational(33.00, &cutoffs);
        assert_eq!(result.achieved, Achievement::Tier(Tier::A));
        assert_eq!(result.next, NextTier::Tier(Tier::AAAA));
        assert!(approx(result.gap_seconds.unwrap(), 28.50 - 33.00));

        let only_a = TierCutoffs::from([(Tier::A, 33.99)]);
        let result = evaluate_motivational(35.00, &only_a);
        assert_eq!(result.achieved, Achievement::SlowerThan(Tier::A));
    }

    #[test]
    fn test_empty_cell_is_unrated() {
        assert_eq!(evaluate_motivational(30.0, &TierCutoffs::new()), TierResult::unrated());
        assert_eq!(evaluate_motivational(f64::NAN, &reference_cutoffs()), TierResult::unrated());
    }

    #[test]
    fn test_faster_time_never_ranks_worse() {
        let cutoffs = reference_cutoffs();
        let rank = |time: f64| match evaluate_motivational(time, &cutoffs).achieved {
            Achievement::Tier(tier) => tier as usize,
            Achievement::SlowerThan(_) => Tier::CANONICAL_ORDER.len(),
            Achievement::Unrated => unreachable!(),
        };

        let times: Vec<f64> = (2500..4800).map(|hundredths| hundredths as f64 / 100.0).collect();
        for pair in times.windows(2) {
            assert!(rank(pair[0]) <= rank(pair[1]), "{} ranked worse than {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_regional_prefers_fw() {
        let cuts = RegionalCuts {
            fw: Some(29.00),
            agc: Some(31.00),
        };

        assert_eq!(evaluate_regional(28.00, &cuts), Some(RegionalBody::FW));
        assert_eq!(evaluate_regional(29.00, &cuts), Some(RegionalBody::FW));
        assert_eq!(evaluate_regional(30.00, &cuts), Some(RegionalBody::AGC));
        assert_eq!(evaluate_regional(32.00, &cuts), None);
        assert_eq!(evaluate_regional(28.00, &RegionalCuts::default()), None);
    }

    #[test]
    fn test_unified_target_merges_both_systems() {
        let cutoffs = reference_cutoffs();
        let cuts = RegionalCuts {
            fw: Some(29.00),
            agc: Some(30.50),
        };

        let target = unified_next_target(30.70, Some(&cutoffs), &cuts).unwrap();
        assert_eq!(target.label, TargetLabel::Regional(RegionalBody::AGC));
        assert!(approx(target.gap_seconds, 0.20));

        let target = unified_next_target(30.50, Some(&cutoffs), &cuts).unwrap();
        assert_eq!(target.label, TargetLabel::Motivational(Tier::AAA));
        assert!(approx(target.gap_seconds, 0.70));

        let target = unified_next_target(50.0, Some(&cutoffs), &cuts).unwrap();
        assert_eq!(target.label, TargetLabel::Motivational(Tier::B));
        assert!(target.gap_seconds > 0.0);
    }

    #[test]
    fn test_unified_target_none_when_everything_beaten() {
        let cuts = RegionalCuts {
            fw: Some(29.00),
            agc: None,
        };

        assert_eq!(unified_next_target(28.00, Some(&reference_cutoffs()), &cuts), None);
        assert_eq!(unified_next_target(28.00, None, &RegionalCuts::default()), None);
    }

    fn library() -> StandardsLibrary {
        let motivational = json!({ "Girls": {
            "11-12": { "SCY": { "FR": { "50": { "B": "41.20", "A": "33.99", "AAAA": "28.50" } } } },
            "13-14": { "SCY": { "FR": { "50": { "B": "36.00", "A": "30.00", "AAAA": "26.00" } } } }
        } });
        let fw = json!({ "Girls": { "11-12": { "SCY": { "FR": { "50": { "CUT": "29.00" } } } } } });
        let agc = json!({ "Girls": { "12": { "SCY": { "FR": { "50": { "CUT": "31.00" } } } } } });

        StandardsLibrary::new(
            Some(StandardsTable::from_feed(Flavor::Motivational, &motivational).unwrap()),
            Some(StandardsTable::from_feed(Flavor::Regional, &agc).unwrap()),
            Some(StandardsTable::from_feed(Flavor::Regional, &fw).unwrap()),
        )
    }

    #[test]
    fn test_evaluator_applies_age_policy() {
        let library = library();
        let evaluator = StandardsEvaluator::new(&library);
        let event = EventKey::new(50, Stroke::FR, Course::SCY);

        let twelve = evaluator.evaluate(Some(30.50), &event, 12);
        assert_eq!(twelve.tier.achieved, Achievement::Tier(Tier::A));
        assert_eq!(twelve.regional, Some(RegionalBody::AGC));
        assert_eq!(
            twelve.next_target.unwrap().label,
            TargetLabel::Regional(RegionalBody::FW)
        );

        // No AGC table for "13"; FW shares the 13-14 bracket, which is absent.
        let thirteen = evaluator.evaluate(Some(30.50), &event, 13);
        assert_eq!(thirteen.tier.achieved, Achievement::Tier(Tier::B));
        assert_eq!(thirteen.regional, None);
    }

    #[test]
    fn test_evaluator_unknown_time_or_event_is_unrated() {
        let library = library();
        let evaluator = StandardsEvaluator::new(&library);

        let no_time = evaluator.evaluate(None, &EventKey::new(50, Stroke::FR, Course::SCY), 12);
        assert_eq!(no_time, Evaluation::unrated());

        let no_cell = evaluator.evaluate(Some(30.0), &EventKey::new(50, Stroke::FL, Course::LCM), 12);
        assert_eq!(no_cell.tier, TierResult::unrated());
        assert_eq!(no_cell.next_target, None);
    }
}
