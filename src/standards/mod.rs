pub mod age_group;
pub mod evaluator;
pub mod scale;
pub mod table;
pub mod types;

pub use age_group::{motivational_age_group, regional_age_group};
pub use evaluator::{evaluate_motivational, evaluate_regional, unified_next_target, Evaluation, StandardsEvaluator};
pub use scale::{scale_position, DEFAULT_SCALE_PADDING};
pub use table::{Flavor, StandardsLibrary, StandardsTable};
pub use types::{Achievement, NextTier, RegionalBody, RegionalCuts, Target, TargetLabel, Tier, TierCutoffs, TierResult};
