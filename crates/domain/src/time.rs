//! Time and timestamp helpers.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};

/// UTC timestamp used for `creation_time`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time, truncated to microseconds.
///
/// Microseconds is the finest precision every store we persist to keeps, so a
/// device read back from storage compares equal to the one that was created.
#[must_use]
pub fn now() -> Timestamp {
    let ts = Utc::now();
    ts.with_nanosecond(ts.timestamp_subsec_micros() * 1_000)
        .unwrap_or(ts)
}

/// Render a timestamp as RFC 3339 with microsecond precision.
#[must_use]
pub fn to_rfc3339(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse an RFC 3339 timestamp into UTC.
///
/// # Errors
///
/// Returns [`chrono::ParseError`] if `value` is not valid RFC 3339.
pub fn parse_rfc3339(value: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|ts| ts.to_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts <= after);
        assert!(before - ts < chrono::Duration::microseconds(1));
    }

    #[test]
    fn should_drop_sub_microsecond_precision() {
        assert_eq!(now().timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn should_roundtrip_through_rfc3339() {
        let ts = now();
        let text = to_rfc3339(&ts);
        assert!(text.ends_with('Z'));
        assert_eq!(parse_rfc3339(&text).unwrap(), ts);
    }

    #[test]
    fn should_reject_malformed_timestamp() {
        assert!(parse_rfc3339("yesterday").is_err());
    }
}
