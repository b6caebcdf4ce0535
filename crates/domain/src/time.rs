//! Time and timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp used for property samples, audit events, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp the way the smart-home protocol expects it
/// (ISO 8601, UTC, `Z` suffix).
#[must_use]
pub fn to_protocol_string(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter writing a [`Timestamp`] with [`to_protocol_string`].
///
/// ```ignore
/// #[serde(serialize_with = "crate::time::serialize_protocol")]
/// pub time_of_sample: Timestamp,
/// ```
///
/// # Errors
///
/// Propagates the serializer's error.
pub fn serialize_protocol<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&to_protocol_string(*ts))
}
