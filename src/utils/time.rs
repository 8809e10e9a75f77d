//! Timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Current UTC time as ISO-8601 with millisecond precision (`2024-01-01T00:00:00.000Z`)
pub fn now_iso() -> String {
    to_iso(&Utc::now())
}

/// Format a timestamp the same way envelopes do
pub fn to_iso(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serialize_with` adapter for [`to_iso`]
pub fn serialize_iso<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_iso(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_iso_uses_millis_and_zulu() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        assert_eq!(to_iso(&at), "2024-03-01T12:30:05.000Z");
    }
}
