use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::{TypeError, TypeResult};

/// Number of fractional-second digits kept in a canonical timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Three digits. Used for lifecycle fields (`created`, `modified`).
    Milli,
    /// Six digits. Used for observation and validity windows.
    Micro,
}

impl Precision {
    /// Number of fractional digits emitted for this precision.
    pub fn digits(self) -> usize {
        match self {
            Self::Milli => 3,
            Self::Micro => 6,
        }
    }

    fn seconds_format(self) -> SecondsFormat {
        match self {
            Self::Milli => SecondsFormat::Millis,
            Self::Micro => SecondsFormat::Micros,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Milli => write!(f, "milli"),
            Self::Micro => write!(f, "micro"),
        }
    }
}

/// Canonical RFC 3339 timestamp string in UTC, e.g. `2016-04-06T20:03:00.000Z`.
///
/// Values built through [`Timestamp::parse`], [`Timestamp::from_datetime`] or
/// [`Timestamp::now`] always carry exactly [`Precision::digits`] fractional
/// digits and a `Z` suffix. Extra digits are truncated, missing ones padded.
///
/// Deserialization keeps the wire string as-is so that decoding and
/// re-encoding an object is byte-identical.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Read the clock once and format the instant at `precision`.
    pub fn now(precision: Precision, clock: &dyn Clock) -> Self {
        Self::from_datetime(clock.now(), precision)
    }

    /// Format a native time value at `precision`.
    pub fn from_datetime<Tz: TimeZone>(value: DateTime<Tz>, precision: Precision) -> Self {
        Self(
            value
                .with_timezone(&Utc)
                .to_rfc3339_opts(precision.seconds_format(), true),
        )
    }

    /// Parse an RFC 3339 string with any offset and re-emit it canonically.
    pub fn parse(value: &str, precision: Precision) -> TypeResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TypeError::InvalidTimestamp {
                value: value.to_string(),
                reason: "empty input".into(),
            });
        }
        let parsed =
            DateTime::parse_from_rfc3339(trimmed).map_err(|e| TypeError::InvalidTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::from_datetime(parsed, precision))
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the stored string back into an instant.
    ///
    /// Returns `None` only for values that were decoded from a malformed wire
    /// representation.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.0)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// The precision the stored string is written at, if it is canonical.
    pub fn precision(&self) -> Option<Precision> {
        let body = self.0.strip_suffix('Z')?;
        let (_, fraction) = body.rsplit_once('.')?;
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match fraction.len() {
            3 => Some(Precision::Milli),
            6 => Some(Precision::Micro),
            _ => None,
        }
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Timestamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Anything a timestamp property setter accepts: a pre-formatted string or a
/// native time value.
pub trait TimestampInput {
    fn to_timestamp(self, precision: Precision) -> TypeResult<Timestamp>;
}

impl TimestampInput for &str {
    fn to_timestamp(self, precision: Precision) -> TypeResult<Timestamp> {
        Timestamp::parse(self, precision)
    }
}

impl TimestampInput for String {
    fn to_timestamp(self, precision: Precision) -> TypeResult<Timestamp> {
        Timestamp::parse(&self, precision)
    }
}

impl TimestampInput for &String {
    fn to_timestamp(self, precision: Precision) -> TypeResult<Timestamp> {
        Timestamp::parse(self, precision)
    }
}

impl<Tz: TimeZone> TimestampInput for DateTime<Tz> {
    fn to_timestamp(self, precision: Precision) -> TypeResult<Timestamp> {
        Ok(Timestamp::from_datetime(self, precision))
    }
}

impl TimestampInput for SystemTime {
    fn to_timestamp(self, precision: Precision) -> TypeResult<Timestamp> {
        Ok(Timestamp::from_datetime(DateTime::<Utc>::from(self), precision))
    }
}

impl TimestampInput for &Timestamp {
    fn to_timestamp(self, precision: Precision) -> TypeResult<Timestamp> {
        Timestamp::parse(self.as_str(), precision)
    }
}

impl TimestampInput for Timestamp {
    fn to_timestamp(self, precision: Precision) -> TypeResult<Timestamp> {
        (&self).to_timestamp(precision)
    }
}

/// Current time at `precision`.
pub fn now(precision: Precision, clock: &dyn Clock) -> Timestamp {
    Timestamp::now(precision, clock)
}

/// Convert any accepted input into a canonical timestamp at `precision`.
pub fn normalize(value: impl TimestampInput, precision: Precision) -> TypeResult<Timestamp> {
    value.to_timestamp(precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{FixedOffset, NaiveDate};

    fn instant() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2016, 4, 6)
            .unwrap()
            .and_hms_nano_opt(20, 3, 0, 123_456_789)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn milli_truncates_to_three_digits() {
        let ts = Timestamp::from_datetime(instant(), Precision::Milli);
        assert_eq!(ts.as_str(), "2016-04-06T20:03:00.123Z");
        assert_eq!(ts.precision(), Some(Precision::Milli));
    }

    #[test]
    fn micro_truncates_to_six_digits() {
        let ts = Timestamp::from_datetime(instant(), Precision::Micro);
        assert_eq!(ts.as_str(), "2016-04-06T20:03:00.123456Z");
        assert_eq!(ts.precision(), Some(Precision::Micro));
    }

    #[test]
    fn parse_pads_missing_fraction() {
        let ts = Timestamp::parse("2016-09-01T00:00:01Z", Precision::Micro).unwrap();
        assert_eq!(ts.as_str(), "2016-09-01T00:00:01.000000Z");
    }

    #[test]
    fn parse_converts_offsets_to_utc() {
        let ts = Timestamp::parse("2016-09-01T02:00:01.5+02:00", Precision::Milli).unwrap();
        assert_eq!(ts.as_str(), "2016-09-01T00:00:01.500Z");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        let err = Timestamp::parse("yesterday at noon", Precision::Milli).unwrap_err();
        assert!(matches!(err, TypeError::InvalidTimestamp { .. }));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(Timestamp::parse("  ", Precision::Micro).is_err());
    }

    #[test]
    fn now_reads_clock() {
        let clock = FixedClock::new(instant());
        assert_eq!(now(Precision::Milli, &clock).as_str(), "2016-04-06T20:03:00.123Z");
    }

    #[test]
    fn normalize_accepts_native_values() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let local = instant().with_timezone(&offset);
        let a = normalize(local, Precision::Milli).unwrap();
        let b = normalize(SystemTime::from(instant()), Precision::Milli).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "2016-04-06T20:03:00.123Z");
    }

    #[test]
    fn normalize_changes_precision_of_existing_timestamp() {
        let micro = Timestamp::from_datetime(instant(), Precision::Micro);
        let milli = normalize(&micro, Precision::Milli).unwrap();
        assert_eq!(milli.as_str(), "2016-04-06T20:03:00.123Z");
    }

    #[test]
    fn round_trips_to_datetime() {
        let ts = Timestamp::from_datetime(instant(), Precision::Micro);
        let dt = ts.to_datetime().unwrap();
        assert_eq!(dt.timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn serde_is_a_plain_string() {
        let ts = Timestamp::from_datetime(instant(), Precision::Milli);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2016-04-06T20:03:00.123Z\"");
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ts);
    }
}
