/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: f64 = 1_000_000_000_f64;

/// A point in time, stored as seconds and nanoseconds since the Unix epoch
///
/// The JSON protocols transmit timestamps as (fractional) epoch seconds, which is also how
/// this type serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

impl DateTime {
    pub fn from_secs(seconds: i64) -> Self {
        DateTime {
            seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        debug_assert!(subsecond_nanos < 1_000_000_000);
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Construct from fractional epoch seconds, eg. `1515531081.1234`
    pub fn from_fractional_secs(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        let nanos = ((epoch_seconds - seconds) * NANOS_PER_SECOND).round();
        // rounding can carry into the next whole second
        if nanos >= NANOS_PER_SECOND {
            Self::from_secs(seconds as i64 + 1)
        } else {
            Self::from_secs_and_nanos(seconds as i64, nanos as u32)
        }
    }

    pub fn secs(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND
    }

    /// Convert to a `SystemTime`. Returns `None` for times before the Unix epoch.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        if self.seconds < 0 {
            return None;
        }
        Some(
            UNIX_EPOCH
                + Duration::from_secs(self.seconds as u64)
                + Duration::from_nanos(self.subsecond_nanos as u64),
        )
    }
}

impl From<SystemTime> for DateTime {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) => Self::from_secs_and_nanos(since.as_secs() as i64, since.subsec_nanos()),
            Err(before) => {
                let before = before.duration();
                Self::from_fractional_secs(-before.as_secs_f64())
            }
        }
    }
}

/// Failure to parse an RFC 3339 timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeParseError(chrono::ParseError);

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid timestamp: {}", self.0)
    }
}

impl Error for DateTimeParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

/// Parses RFC 3339 timestamps such as `2017-03-10T01:36:41.958Z`, as used by the XML protocols
impl FromStr for DateTime {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = chrono::DateTime::parse_from_rfc3339(s).map_err(DateTimeParseError)?;
        let (seconds, nanos) = (parsed.timestamp(), parsed.timestamp_subsec_nanos());
        // chrono reports a leap second as nanos past one second
        if nanos >= 1_000_000_000 {
            Ok(DateTime::from_secs_and_nanos(seconds + 1, nanos - 1_000_000_000))
        } else {
            Ok(DateTime::from_secs_and_nanos(seconds, nanos))
        }
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.subsecond_nanos == 0 {
            serializer.serialize_i64(self.seconds)
        } else {
            serializer.serialize_f64(self.as_secs_f64())
        }
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = DateTime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a timestamp in epoch seconds")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DateTime::from_secs(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(DateTime::from_secs(v as i64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.is_finite() {
            Ok(DateTime::from_fractional_secs(v))
        } else {
            Err(E::custom("timestamp must be a finite number"))
        }
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::DateTime;
    use proptest::prelude::*;

    #[test]
    fn fractional_seconds() {
        let time = DateTime::from_fractional_secs(1515531081.25);
        assert_eq!(time.secs(), 1515531081);
        assert_eq!(time.subsec_nanos(), 250_000_000);
    }

    #[test]
    fn negative_fractional_seconds() {
        let time = DateTime::from_fractional_secs(-1.5);
        assert_eq!(time.secs(), -2);
        assert_eq!(time.subsec_nanos(), 500_000_000);
    }

    #[test]
    fn deserialize_from_json_numbers() {
        let whole: DateTime = serde_json::from_str("1600000000").unwrap();
        assert_eq!(whole, DateTime::from_secs(1600000000));
        let fractional: DateTime = serde_json::from_str("1600000000.5").unwrap();
        assert_eq!(fractional, DateTime::from_secs_and_nanos(1600000000, 500_000_000));
        assert!(serde_json::from_str::<DateTime>("\"2020-01-01\"").is_err());
    }

    #[test]
    fn serialize_whole_seconds_as_integers() {
        assert_eq!(
            serde_json::to_string(&DateTime::from_secs(1600000000)).unwrap(),
            "1600000000"
        );
    }

    #[test]
    fn parse_rfc3339() {
        let time: DateTime = "2017-03-10T01:36:41.958Z".parse().unwrap();
        assert_eq!(time, DateTime::from_secs_and_nanos(1489109801, 958_000_000));
        assert_eq!(
            "2000-03-01T00:00:00Z".parse::<DateTime>().unwrap(),
            DateTime::from_secs(951868800)
        );
        assert_eq!(
            "1969-12-31T23:59:59Z".parse::<DateTime>().unwrap(),
            DateTime::from_secs(-1)
        );
        assert!("2017-13-10T01:36:41Z".parse::<DateTime>().is_err());
        assert!("2017-03-10T01:36:41".parse::<DateTime>().is_err());
    }

    #[test]
    fn parse_rfc3339_offsets() {
        assert_eq!(
            "2017-03-10T01:36:41.958+00:00".parse::<DateTime>().unwrap(),
            DateTime::from_secs_and_nanos(1489109801, 958_000_000)
        );
        assert_eq!(
            "2017-03-10T02:36:41+01:00".parse::<DateTime>().unwrap(),
            DateTime::from_secs(1489109801)
        );
        assert_eq!(
            "2017-03-09T20:36:41-05:00".parse::<DateTime>().unwrap(),
            DateTime::from_secs(1489109801)
        );
    }

    proptest! {
        #[test]
        fn nanos_always_in_range(secs in -1_000_000_000.0..4_000_000_000.0f64) {
            let time = DateTime::from_fractional_secs(secs);
            prop_assert!(time.subsec_nanos() < 1_000_000_000);
        }
    }
}
