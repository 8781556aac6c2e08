//! Dataset date formatting

use crate::domain::DataMappingError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// HDX dataset date format
pub const DATASET_DATE_FORMAT: &str = "%m/%d/%Y";

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

// Offsets without a colon, e.g. `+0000`, which RFC 3339 parsing rejects
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z"];

/// Reformats an ISO 8601 date or date-time as `MM/DD/YYYY`
///
/// Only the date part is kept; any time or offset is dropped without
/// conversion.
///
/// # Errors
///
/// Returns [`DataMappingError::InvalidDate`] carrying the raw value when it
/// cannot be parsed.
///
/// # Example
///
/// ```
/// use mimu_harvester::core::transform::date::format_dataset_date;
///
/// assert_eq!(format_dataset_date("2019-08-05T22:06:00").unwrap(), "08/05/2019");
/// ```
pub fn format_dataset_date(raw: &str) -> Result<String, DataMappingError> {
    parse_iso_date(raw.trim())
        .map(|date| date.format(DATASET_DATE_FORMAT).to_string())
        .ok_or_else(|| DataMappingError::InvalidDate {
            value: raw.to_string(),
        })
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if let Some(date_time) = DateTime::parse_from_rfc3339(value).ok().or_else(|| {
        OFFSET_DATE_TIME_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(value, format).ok())
    }) {
        return Some(date_time.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|date_time| date_time.date())
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2019-08-05T22:06:00", "08/05/2019" ; "naive date time")]
    #[test_case("2019-02-12T11:12:00", "02/12/2019" ; "second corpus record")]
    #[test_case("2019-02-12T11:12:00.123456", "02/12/2019" ; "fractional seconds")]
    #[test_case("2019-02-12 11:12:00", "02/12/2019" ; "space separator")]
    #[test_case("2019-02-12T23:30:00-05:00", "02/12/2019" ; "offset keeps local date")]
    #[test_case("2019-02-12T11:12:00Z", "02/12/2019" ; "utc designator")]
    #[test_case("2019-02-12T11:12", "02/12/2019" ; "minutes precision")]
    #[test_case("2019-08-05T22:06:00+0000", "08/05/2019" ; "basic offset")]
    #[test_case("2019-08-05T22:06:00.5-0500", "08/05/2019" ; "basic offset with fraction")]
    #[test_case("2019-02-12", "02/12/2019" ; "date only")]
    fn test_format_dataset_date(raw: &str, expected: &str) {
        assert_eq!(format_dataset_date(raw).unwrap(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("yesterday" ; "words")]
    #[test_case("12/02/2019" ; "already us format")]
    #[test_case("2019-13-40T00:00:00" ; "out of range")]
    fn test_malformed_date_is_an_error(raw: &str) {
        let err = format_dataset_date(raw).unwrap_err();
        assert_eq!(
            err,
            DataMappingError::InvalidDate {
                value: raw.to_string()
            }
        );
    }
}
