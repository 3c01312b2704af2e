use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Motivational time standard tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    AAAA,
    AAA,
    AA,
    A,
    BB,
    B,
}

impl Tier {
    /// Fastest to slowest
    pub const CANONICAL_ORDER: [Tier; 6] = [Tier::AAAA, Tier::AAA, Tier::AA, Tier::A, Tier::BB, Tier::B];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::AAAA => "AAAA",
            Tier::AAA => "AAA",
            Tier::AA => "AA",
            Tier::A => "A",
            Tier::BB => "BB",
            Tier::B => "B",
        }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::CANONICAL_ORDER
            .into_iter()
            .find(|tier| tier.label() == s.trim())
            .ok_or_else(|| format!("unknown tier {s:?}"))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cutoff seconds per tier for one event cell. Absent tiers do not apply.
pub type TierCutoffs = HashMap<Tier, f64>;

/// Regional qualifying bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionalBody {
    /// Far Westerns
    FW,
    /// Age Group Championships
    AGC,
}

impl RegionalBody {
    /// Checked in this order: FW is the more selective meet, so meeting its cut
    /// outranks an AGC qualification. This is a presentation policy, not a
    /// property of the cut times.
    pub const PRIORITY: [RegionalBody; 2] = [RegionalBody::FW, RegionalBody::AGC];

    pub fn label(&self) -> &'static str {
        match self {
            RegionalBody::FW => "FW",
            RegionalBody::AGC => "AGC",
        }
    }
}

impl fmt::Display for RegionalBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Regional cut seconds for one event, per body
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionalCuts {
    pub fw: Option<f64>,
    pub agc: Option<f64>,
}

impl RegionalCuts {
    pub fn get(&self, body: RegionalBody) -> Option<f64> {
        match body {
            RegionalBody::FW => self.fw,
            RegionalBody::AGC => self.agc,
        }
    }
}

/// What a time achieved against a tier map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Achievement {
    /// Time or standards cell missing
    Unrated,
    Tier(Tier),
    /// Slower than the loosest tier present in the cell
    SlowerThan(Tier),
}

impl Achievement {
    pub fn label(&self) -> String {
        match self {
            Achievement::Unrated => "Unrated".to_string(),
            Achievement::Tier(tier) => tier.label().to_string(),
            Achievement::SlowerThan(tier) => format!("Slower than {}", tier),
        }
    }

    /// Narrow-column form: "B+" instead of "Slower than B"
    pub fn compact_label(&self) -> String {
        match self {
            Achievement::SlowerThan(tier) => format!("{}+", tier),
            other => other.label(),
        }
    }

}

/// The tier to chase next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextTier {
    None,
    Tier(Tier),
    /// Already at the fastest tier in the cell
    Max,
}

impl NextTier {
    pub fn label(&self) -> &'static str {
        match self {
            NextTier::None => "none",
            NextTier::Tier(tier) => tier.label(),
            NextTier::Max => "MAX",
        }
    }
}

/// Outcome of evaluating one time against a motivational cell.
///
/// `gap_seconds` is `cutoff(next) - time`, signed: negative means the swimmer
/// still has to drop that many seconds. Display code clamps or re-signs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierResult {
    pub achieved: Achievement,
    pub next: NextTier,
    pub gap_seconds: Option<f64>,
}

impl TierResult {
    pub fn unrated() -> Self {
        Self {
            achieved: Achievement::Unrated,
            next: NextTier::None,
            gap_seconds: None,
        }
    }
}

/// One cutoff in the merged motivational + regional ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetLabel {
    Motivational(Tier),
    Regional(RegionalBody),
}

impl fmt::Display for TargetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLabel::Motivational(tier) => write!(f, "{}", tier),
            TargetLabel::Regional(body) => write!(f, "{}", body),
        }
    }
}

/// The single next cutoff to beat, with the (positive) seconds still needed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub label: TargetLabel,
    pub cutoff_seconds: f64,
    pub gap_seconds: f64,
}
