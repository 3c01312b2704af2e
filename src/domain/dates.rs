use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::SwimError;

const RESULT_DATE_FORMAT: &str = "%m/%d/%Y";
const SECONDS_PER_DAY: i64 = 86_400;

/// Parses a result date in `MM/DD/YYYY` form
pub fn parse_result_date(text: &str) -> Result<NaiveDate, SwimError> {
    NaiveDate::parse_from_str(text.trim(), RESULT_DATE_FORMAT)
        .map_err(|_| SwimError::InvalidDate(text.to_string()))
}

/// Sort key for result dates: unparseable dates sort as the oldest possible date
pub fn date_sort_key(text: &str) -> NaiveDate {
    parse_result_date(text).unwrap_or(NaiveDate::MIN)
}

/// Whole days elapsed from the result date (midnight) to `reference_now`,
/// rounded down. Future dates give negative values.
pub fn days_since(date_text: &str, reference_now: NaiveDateTime) -> Option<i64> {
    let date = parse_result_date(date_text).ok()?;
    let start = date.and_hms_opt(0, 0, 0)?;
    let elapsed = reference_now.signed_duration_since(start).num_seconds();
    Some(elapsed.div_euclid(SECONDS_PER_DAY))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_result_date() {
        assert_eq!(
            parse_result_date("03/09/2025").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
        assert!(parse_result_date("2025-03-09").is_err());
        assert!(parse_result_date("13/45/2025").is_err());
        assert!(parse_result_date("").is_err());
    }

    #[test]
    fn test_bad_dates_sort_oldest() {
        assert_eq!(date_sort_key("not a date"), NaiveDate::MIN);
        assert!(date_sort_key("01/01/1990") > date_sort_key("garbage"));
    }

    #[test]
    fn test_days_since_floors_partial_days() {
        assert_eq!(days_since("03/09/2025", at(2025, 3, 9, 23)), Some(0));
        assert_eq!(days_since("03/09/2025", at(2025, 3, 12, 8)), Some(3));
        assert_eq!(days_since("03/09/2025", at(2025, 3, 8, 12)), Some(-1));
    }

    #[test]
    fn test_days_since_unparseable_date() {
        assert_eq!(days_since("N/A", at(2025, 3, 9, 0)), None);
    }
}
