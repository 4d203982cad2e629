//! Timestamps travel over the wire as (possibly fractional) epoch seconds.

use chrono::{DateTime, Utc};

pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

pub fn to_epoch_seconds(timestamp: &DateTime<Utc>) -> f64 {
    timestamp.timestamp_millis() as f64 / 1000.0
}

/// `#[serde(with = "...")]` adapter for optional timestamp members.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_f64(super::to_epoch_seconds(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds: Option<f64> = Option::deserialize(deserializer)?;
        seconds
            .map(|s| {
                super::from_epoch_seconds(s)
                    .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", s)))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_whole_seconds() {
        let ts = Utc.with_ymd_and_hms(2020, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(to_epoch_seconds(&ts), 1583064000.0);
        assert_eq!(from_epoch_seconds(1583064000.0), Some(ts));
    }

    #[test]
    fn test_fractional_seconds_keep_millis() {
        let ts = from_epoch_seconds(1583064000.25).unwrap();
        assert_eq!(ts.timestamp_millis(), 1583064000250);
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert_eq!(from_epoch_seconds(f64::NAN), None);
        assert_eq!(from_epoch_seconds(f64::INFINITY), None);
    }
}
