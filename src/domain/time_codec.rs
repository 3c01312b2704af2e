use crate::errors::SwimError;

/// Rendered in place of a missing or zero time
pub const NO_TIME: &str = "--";

const RELAY_LEADOFF_MARKER: [char; 2] = ['r', 'R'];

/// Parses a race time such as `"1:02.34"`, `"23.45"` or `"28.91r"` into seconds.
///
/// A single trailing relay-leadoff marker is ignored. Anything else that is
/// not a non-negative finite number is rejected so callers can treat the
/// time as unknown.
pub fn parse_time_to_seconds(text: &str) -> Result<f64, SwimError> {
    let invalid = || SwimError::InvalidTime(text.to_string());

    let trimmed = text.trim();
    let clean = trimmed
        .strip_suffix(RELAY_LEADOFF_MARKER)
        .unwrap_or(trimmed);

    if clean.is_empty() {
        return Err(invalid());
    }

    let seconds = match clean.split_once(':') {
        Some((minutes, seconds)) => {
            if seconds.contains(':') {
                return Err(invalid());
            }
            let minutes = parse_component(minutes).ok_or_else(invalid)?;
            let seconds = parse_component(seconds).ok_or_else(invalid)?;
            minutes * 60.0 + seconds
        }
        None => parse_component(clean).ok_or_else(invalid)?,
    };

    Ok(seconds)
}

fn parse_component(part: &str) -> Option<f64> {
    let part = part.trim();
    if part.is_empty() || part.starts_with(['+', '-']) {
        return None;
    }
    part.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Formats seconds as `M:SS.ss` (or `S.ss` under a minute).
pub fn format_seconds_to_time(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite() && *s > 0.0) else {
        return NO_TIME.to_string();
    };

    let hundredths = (seconds * 100.0).round() as u64;
    let minutes = hundredths / 6000;
    let rest = hundredths % 6000;
    let (whole, fraction) = (rest / 100, rest % 100);

    if minutes > 0 {
        format!("{}:{:02}.{:02}", minutes, whole, fraction)
    } else {
        format!("{}.{:02}", whole, fraction)
    }
}

/// Formats a signed gap as `+1.23` / `-0.45`.
pub fn format_gap(gap_seconds: f64) -> String {
    format!("{:+.2}", gap_seconds)
}
