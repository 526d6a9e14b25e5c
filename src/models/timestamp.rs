//! Serde helpers for API timestamps
//!
//! The API writes `datetime` values either naive (`2024-05-01T10:00:00.123456`,
//! always UTC on the server) or with an explicit offset. Both decode to
//! `DateTime<Utc>`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

/// Millisecond precision with a `Z` suffix, the shape browsers send.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw))),
            None => Ok(None),
        }
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_naive_as_utc() {
        let dt = parse("2024-05-01T10:30:00.123456").unwrap();
        assert_eq!(dt.timestamp(), Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap().timestamp());
    }

    #[test]
    fn test_parse_with_offset() {
        let dt = parse("2024-05-01T12:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap());
        assert!(parse("yesterday").is_none());
    }

    #[test]
    fn test_serialize_millis() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_value(Wrapper(dt)).unwrap();
        assert_eq!(json, serde_json::json!("2024-05-01T00:00:00.000Z"));
    }

    #[derive(serde::Serialize)]
    struct Wrapper(#[serde(serialize_with = "super::serialize")] DateTime<Utc>);
}
