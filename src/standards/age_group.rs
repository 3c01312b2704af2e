//! Age-group keys used by the published standards tables.
//!
//! Motivational and FW tables are keyed by two-year brackets ("11-12",
//! "13-14"); AGC tables are keyed by the single-year age ("12"). The source
//! data is published that way, so the asymmetry is kept here and nowhere else.

use super::types::RegionalBody;

pub const YOUNGER_BRACKET: &str = "11-12";
pub const OLDER_BRACKET: &str = "13-14";

const OLDER_BRACKET_MIN_AGE: u32 = 13;

pub fn motivational_age_group(age: u32) -> &'static str {
    if age < OLDER_BRACKET_MIN_AGE {
        YOUNGER_BRACKET
    } else {
        OLDER_BRACKET
    }
}

pub fn regional_age_group(body: RegionalBody, age: u32) -> String {
    match body {
        RegionalBody::FW => motivational_age_group(age).to_string(),
        RegionalBody::AGC => age.to_string(),
    }
}
