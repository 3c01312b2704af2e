use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SwimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stroke {
    FR,
    BK,
    BR,
    FL,
    IM,
}

impl Stroke {
    pub const ALL: [Stroke; 5] = [Stroke::FR, Stroke::BK, Stroke::BR, Stroke::FL, Stroke::IM];

    pub fn code(&self) -> &'static str {
        match self {
            Stroke::FR => "FR",
            Stroke::BK => "BK",
            Stroke::BR => "BR",
            Stroke::FL => "FL",
            Stroke::IM => "IM",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Stroke::FR => "Free",
            Stroke::BK => "Back",
            Stroke::BR => "Breast",
            Stroke::FL => "Fly",
            Stroke::IM => "IM",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Stroke::FR => "Freestyle",
            Stroke::BK => "Backstroke",
            Stroke::BR => "Breaststroke",
            Stroke::FL => "Butterfly",
            Stroke::IM => "IM",
        }
    }

    /// Distances swum for this stroke in age-group meets
    pub fn standard_distances(&self) -> &'static [u32] {
        match self {
            Stroke::FR => &[50, 100, 200, 400],
            Stroke::BK | Stroke::BR | Stroke::FL => &[50, 100, 200],
            Stroke::IM => &[200, 400],
        }
    }

    /// Reads the stroke token of an event label, even one missing its course
    /// (`"50 FR"`).
    pub fn from_event_label(label: &str) -> Option<Stroke> {
        label.split_whitespace().nth(1)?.parse().ok()
    }
}

impl FromStr for Stroke {
    type Err = SwimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FR" | "FREE" => Ok(Stroke::FR),
            "BK" | "BACK" => Ok(Stroke::BK),
            "BR" | "BREAST" => Ok(Stroke::BR),
            "FL" | "FLY" => Ok(Stroke::FL),
            "IM" => Ok(Stroke::IM),
            _ => Err(SwimError::InvalidEvent(s.to_string())),
        }
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    SCY,
    LCM,
}

impl Course {
    pub fn code(&self) -> &'static str {
        match self {
            Course::SCY => "SCY",
            Course::LCM => "LCM",
        }
    }
}

impl FromStr for Course {
    type Err = SwimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SCY" => Ok(Course::SCY),
            "LCM" => Ok(Course::LCM),
            _ => Err(SwimError::InvalidEvent(s.to_string())),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A race event, e.g. `50 FR SCY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventKey {
    pub course: Course,
    pub stroke: Stroke,
    pub distance: u32,
}

impl EventKey {
    pub fn new(distance: u32, stroke: Stroke, course: Course) -> Self {
        Self {
            course,
            stroke,
            distance,
        }
    }

    /// Parses `"<distance> <stroke> <course>"`. Labels with any other token
    /// count are rejected rather than guessed at.
    pub fn parse(label: &str) -> Result<Self, SwimError> {
        let invalid = || SwimError::InvalidEvent(label.to_string());

        let tokens: Vec<&str> = label.split_whitespace().collect();
        let [distance, stroke, course] = tokens.as_slice() else {
            return Err(invalid());
        };

        let distance = distance
            .parse::<u32>()
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(invalid)?;
        let stroke = stroke.parse::<Stroke>().map_err(|_| invalid())?;
        let course = course.parse::<Course>().map_err(|_| invalid())?;

        Ok(Self::new(distance, stroke, course))
    }
}

impl FromStr for EventKey {
    type Err = SwimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKey::parse(s)
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.distance, self.stroke, self.course)
    }
}
