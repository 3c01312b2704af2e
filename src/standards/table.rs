use log::{debug, warn};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::types::{RegionalBody, Tier, TierCutoffs};
use crate::domain::{parse_time_to_seconds, Course, Stroke};
use crate::errors::SwimError;

/// Gender section the published feeds are wrapped in
pub const DEFAULT_SECTION: &str = "Girls";

/// Leaf key of regional tables
pub const CUT_KEY: &str = "CUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Multi-tier tables keyed by age range
    Motivational,
    /// Single `CUT` tables
    Regional,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CellKey {
    age_group: String,
    course: Course,
    stroke: Stroke,
    distance: u32,
}

/// Cutoff times by age group, course, stroke, distance and tier label.
///
/// Immutable once built; construct it at startup and pass it by reference.
#[derive(Debug, Clone)]
pub struct StandardsTable {
    flavor: Flavor,
    cells: HashMap<CellKey, HashMap<String, f64>>,
}

impl StandardsTable {
    pub fn empty(flavor: Flavor) -> Self {
        Self {
            flavor,
            cells: HashMap::new(),
        }
    }

    /// Builds a table from a parsed feed of the shape
    /// `{"Girls": {ageGroup: {course: {stroke: {distance: {tier: cutoff}}}}}}`.
    pub fn from_feed(flavor: Flavor, feed: &Value) -> Result<Self, SwimError> {
        Self::from_feed_section(flavor, feed, DEFAULT_SECTION)
    }

    fn from_feed_section(flavor: Flavor, feed: &Value, section: &str) -> Result<Self, SwimError> {
        let root = as_object(feed, "<root>")?;
        let age_groups = root
            .get(section)
            .ok_or_else(|| SwimError::MalformedStandards(format!("missing section {section:?}")))?;
        let age_groups = as_object(age_groups, section)?;

        let mut table = Self::empty(flavor);
        for (age_group, courses) in age_groups {
            let path = format!("{section}/{age_group}");
            table.load_age_group(age_group, courses, &path)?;
        }

        debug!("Loaded {:?} standards table with {} cells", flavor, table.cells.len());
        Ok(table)
    }

    fn load_age_group(&mut self, age_group: &str, courses: &Value, path: &str) -> Result<(), SwimError> {
        for (course_label, strokes) in as_object(courses, path)? {
            let path = format!("{path}/{course_label}");
            let Ok(course) = course_label.parse::<Course>() else {
                warn!("Skipping unknown course at {}", path);
                continue;
            };

            for (stroke_label, distances) in as_object(strokes, &path)? {
                let path = format!("{path}/{stroke_label}");
                let Ok(stroke) = stroke_label.parse::<Stroke>() else {
                    warn!("Skipping unknown stroke at {}", path);
                    continue;
                };

                for (distance_label, tiers) in as_object(distances, &path)? {
                    let path = format!("{path}/{distance_label}");
                    let Some(distance) = distance_label.trim().parse::<u32>().ok().filter(|d| *d > 0) else {
                        warn!("Skipping unknown distance at {}", path);
                        continue;
                    };

                    let cutoffs = parse_cutoffs(tiers, &path)?;
                    if self.flavor == Flavor::Motivational && !tiers_in_order(&cutoffs) {
                        warn!("Dropping cell with out-of-order tier cutoffs at {}", path);
                        continue;
                    }
                    let key = CellKey {
                        age_group: age_group.to_string(),
                        course,
                        stroke,
                        distance,
                    };
                    self.cells.insert(key, cutoffs);
                }
            }
        }
        Ok(())
    }

    /// Folds another table of the same flavor into this one. Cells present in
    /// both are taken from `other`.
    pub fn merge(&mut self, other: StandardsTable) -> Result<(), SwimError> {
        if other.flavor != self.flavor {
            return Err(SwimError::MalformedStandards(format!(
                "cannot merge {:?} table into {:?} table",
                other.flavor, self.flavor
            )));
        }
        self.cells.extend(other.cells);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn cell(&self, age_group: &str, course: Course, stroke: Stroke, distance: u32) -> Option<&HashMap<String, f64>> {
        let key = CellKey {
            age_group: age_group.to_string(),
            course,
            stroke,
            distance,
        };
        self.cells.get(&key)
    }

    /// Tier cutoffs for one event. `None` when the cell is absent or holds no
    /// recognised tier.
    pub fn lookup_motivational(
        &self,
        age_group: &str,
        course: Course,
        stroke: Stroke,
        distance: u32,
    ) -> Option<TierCutoffs> {
        let cell = self.cell(age_group, course, stroke, distance)?;
        let cutoffs = recognised_tiers(cell);
        (!cutoffs.is_empty()).then_some(cutoffs)
    }

    /// The single `CUT` value of a regional cell
    pub fn lookup_cut(&self, age_group: &str, course: Course, stroke: Stroke, distance: u32) -> Option<f64> {
        self.cell(age_group, course, stroke, distance)?
            .get(CUT_KEY)
            .copied()
    }
}

fn recognised_tiers(cell: &HashMap<String, f64>) -> TierCutoffs {
    cell.iter()
        .filter_map(|(label, seconds)| label.parse::<Tier>().ok().map(|tier| (tier, *seconds)))
        .collect()
}

/// Cutoffs must not get faster going from AAAA down to B
fn tiers_in_order(cell: &HashMap<String, f64>) -> bool {
    let tiers = recognised_tiers(cell);
    let ordered: Vec<f64> = Tier::CANONICAL_ORDER
        .into_iter()
        .filter_map(|tier| tiers.get(&tier).copied())
        .collect();
    ordered.windows(2).all(|pair| pair[0] <= pair[1])
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SwimError> {
    value
        .as_object()
        .ok_or_else(|| SwimError::MalformedStandards(format!("expected an object at {path}")))
}

fn parse_cutoffs(tiers: &Value, path: &str) -> Result<HashMap<String, f64>, SwimError> {
    let mut cutoffs = HashMap::new();

    for (label, cutoff) in as_object(tiers, path)? {
        let seconds = match cutoff {
            Value::String(text) => parse_time_to_seconds(text).ok(),
            Value::Number(number) => number.as_f64().filter(|s| s.is_finite() && *s >= 0.0),
            _ => {
                return Err(SwimError::MalformedStandards(format!(
                    "expected a cutoff time at {path}/{label}"
                )));
            }
        };

        match seconds {
            Some(seconds) => {
                cutoffs.insert(label.trim().to_string(), seconds);
            }
            None => warn!("Dropping unparseable cutoff {} at {}/{}", cutoff, path, label),
        }
    }

    Ok(cutoffs)
}

/// The motivational table plus the two regional tables, each independently
/// optional: a feed that failed to load leaves its slot empty.
#[derive(Debug, Clone, Default)]
pub struct StandardsLibrary {
    pub motivational: Option<StandardsTable>,
    pub agc: Option<StandardsTable>,
    pub fw: Option<StandardsTable>,
}

impl StandardsLibrary {
    pub fn new(
        motivational: Option<StandardsTable>,
        agc: Option<StandardsTable>,
        fw: Option<StandardsTable>,
    ) -> Self {
        Self { motivational, agc, fw }
    }

    pub fn regional(&self, body: RegionalBody) -> Option<&StandardsTable> {
        match body {
            RegionalBody::FW => self.fw.as_ref(),
            RegionalBody::AGC => self.agc.as_ref(),
        }
    }

    pub fn lookup_motivational(
        &self,
        age_group: &str,
        course: Course,
        stroke: Stroke,
        distance: u32,
    ) -> Option<TierCutoffs> {
        self.motivational
            .as_ref()?
            .lookup_motivational(age_group, course, stroke, distance)
    }

    pub fn lookup_regional_cut(
        &self,
        body: RegionalBody,
        age_group: &str,
        course: Course,
        stroke: Stroke,
        distance: u32,
    ) -> Option<f64> {
        self.regional(body)?
            .lookup_cut(age_group, course, stroke, distance)
    }
}
