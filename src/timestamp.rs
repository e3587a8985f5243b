// src/timestamp.rs - Timestamp normalization and header time formatting
use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;
use std::time::Duration;

use crate::error::LineError;

/// Fixed header rendering format: `YYYY-MM-DD HH:MM:SS.mmm TZ`
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %Z";

/// Convert the raw timestamp value of a record into a local-time instant.
///
/// Numbers are seconds since epoch with a fractional part; the fraction is
/// truncated to nanoseconds, never rounded. Strings are RFC3339 with an
/// optional variable-length fraction and a `Z` or offset suffix. Anything
/// else is a recoverable line-level error.
pub fn normalize(value: &Value) -> Result<DateTime<Local>, LineError> {
    match value {
        Value::Number(number) => {
            let seconds = number
                .as_f64()
                .ok_or_else(|| LineError::Timestamp(value.clone()))?;
            let whole = seconds.floor();
            let nanos = ((seconds - whole) * 1e9) as u32;

            Local
                .timestamp_opt(whole as i64, nanos)
                .single()
                .ok_or_else(|| LineError::Timestamp(value.clone()))
        }
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .map(|parsed| parsed.with_timezone(&Local))
            .map_err(|_| LineError::Timestamp(value.clone())),
        _ => Err(LineError::Timestamp(value.clone())),
    }
}

pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format(TIME_FORMAT).to_string()
}

/// Elapsed-time notation for delta mode, truncated to millisecond precision.
/// Out-of-order records yield a `-` prefix on the absolute duration.
pub fn format_delta(previous: &DateTime<Local>, current: &DateTime<Local>) -> String {
    let millis = current.signed_duration_since(*previous).num_milliseconds();
    let rendered = humantime::format_duration(Duration::from_millis(millis.unsigned_abs()));

    if millis < 0 {
        format!("-{}", rendered)
    } else {
        format!("+{}", rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use serde_json::json;

    #[test]
    fn test_numeric_fraction_truncates() {
        let timestamp = normalize(&json!(1545445711.144533)).unwrap();
        assert_eq!(timestamp.timestamp(), 1545445711);
        // 144, not 145: the fractional part is truncated, never rounded
        assert_eq!(timestamp.timestamp_subsec_millis(), 144);
    }

    #[test]
    fn test_numeric_whole_seconds() {
        let timestamp = normalize(&json!(1545445711.0)).unwrap();
        assert_eq!(timestamp.timestamp(), 1545445711);
        assert_eq!(timestamp.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_rfc3339_with_offset() {
        let timestamp = normalize(&json!("2018-12-21T23:06:49.435919-05:00")).unwrap();
        let expected = NaiveDate::from_ymd_opt(2018, 12, 22)
            .unwrap()
            .and_hms_micro_opt(4, 6, 49, 435919)
            .unwrap()
            .and_utc();
        assert_eq!(timestamp.with_timezone(&Utc), expected);
    }

    #[test]
    fn test_rfc3339_zulu_without_fraction() {
        let timestamp = normalize(&json!("2018-12-22T04:06:49Z")).unwrap();
        assert_eq!(timestamp.timestamp(), 1545451609);
    }

    #[test]
    fn test_rejects_unsupported_types() {
        assert!(matches!(
            normalize(&json!(true)),
            Err(LineError::Timestamp(_))
        ));
        assert!(matches!(
            normalize(&json!(null)),
            Err(LineError::Timestamp(_))
        ));
        assert!(matches!(
            normalize(&json!({"nested": 1})),
            Err(LineError::Timestamp(_))
        ));
    }

    #[test]
    fn test_rejects_unparseable_string() {
        assert!(matches!(
            normalize(&json!("yesterday at noon")),
            Err(LineError::Timestamp(_))
        ));
    }

    #[test]
    fn test_format_delta_forward() {
        let first = Local.timestamp_opt(1545445711, 0).unwrap();
        let second = Local.timestamp_opt(1545445751, 0).unwrap();
        assert_eq!(format_delta(&first, &second), "+40s");
    }

    #[test]
    fn test_format_delta_subsecond() {
        let first = Local.timestamp_opt(1545445711, 0).unwrap();
        let second = Local.timestamp_opt(1545445711, 500_000_000).unwrap();
        assert_eq!(format_delta(&first, &second), "+500ms");
    }

    #[test]
    fn test_format_delta_out_of_order() {
        let first = Local.timestamp_opt(1545445751, 0).unwrap();
        let second = Local.timestamp_opt(1545445711, 0).unwrap();
        assert_eq!(format_delta(&first, &second), "-40s");
    }
}
