use serde::{Deserialize, Serialize};

use super::event::{EventKey, Stroke};
use super::time_codec::parse_time_to_seconds;
use crate::errors::SwimError;

pub const UNKNOWN_AGE: &str = "N/A";
pub const UNKNOWN_LSC: &str = "N/A";
pub const UNATTACHED_TEAM: &str = "Unattached";

/// Where a result came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    #[default]
    Official,
    Unofficial,
}

/// One recorded swim, as published in the official results feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub name: String,
    pub event: String,
    pub time: String,
    pub age: String,
    pub date: String,
    pub meet: String,
    #[serde(rename = "time_standard")]
    pub time_standard: String,
    pub lsc: String,
    pub team: String,
    #[serde(skip_deserializing, default)]
    pub provenance: Provenance,
}

impl RaceResult {
    /// Identity used for deduplication: (name, event, date, time)
    pub fn identity(&self) -> (&str, &str, &str, &str) {
        (&self.name, &self.event, &self.date, &self.time)
    }

    pub fn event_key(&self) -> Result<EventKey, SwimError> {
        EventKey::parse(&self.event)
    }

    pub fn stroke(&self) -> Option<Stroke> {
        Stroke::from_event_label(&self.event)
    }

    pub fn time_seconds(&self) -> Option<f64> {
        parse_time_to_seconds(&self.time).ok()
    }

    pub fn age_years(&self) -> Option<u32> {
        self.age.trim().parse().ok()
    }

    pub fn is_unofficial(&self) -> bool {
        self.provenance == Provenance::Unofficial
    }

    /// Exact or substring match on the swimmer name
    pub fn matches_swimmer(&self, swimmer: &str, mode: NameMatch) -> bool {
        match mode {
            NameMatch::Exact => self.name == swimmer,
            NameMatch::Substring => self.name.contains(swimmer),
        }
    }
}

/// How swimmer names are compared when filtering results.
///
/// `Substring` reproduces the historical behavior but cross-matches swimmers
/// whose names share a fragment ("Anna" matches "Annabel").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameMatch {
    #[default]
    Exact,
    Substring,
}

/// A result from the secondary, lower-trust feed
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UnofficialRecord {
    pub name: String,
    pub event: String,
    pub time: String,
    pub date: String,
    pub meet: String,
    #[serde(rename = "time_standard", default)]
    pub time_standard: String,
}

impl UnofficialRecord {
    pub fn into_result(self) -> RaceResult {
        RaceResult {
            name: self.name,
            event: self.event,
            time: self.time,
            age: UNKNOWN_AGE.to_string(),
            date: self.date,
            meet: self.meet,
            time_standard: self.time_standard,
            lsc: UNKNOWN_LSC.to_string(),
            team: UNATTACHED_TEAM.to_string(),
            provenance: Provenance::Unofficial,
        }
    }
}

impl From<UnofficialRecord> for RaceResult {
    fn from(record: UnofficialRecord) -> Self {
        record.into_result()
    }
}
