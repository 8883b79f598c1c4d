//! ISO8601 時間欄位：接受有無小數秒、有無時區 (無時區視為 UTC)

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => parse(&value).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "Expected ISO8601 date (with or without fractional seconds), got: {}",
                value
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 10, 30, 7, 13, 38).unwrap();
        assert_eq!(parse("2024-10-30T07:13:38Z"), Some(expected));
        assert_eq!(parse("2024-10-30T07:13:38.000Z"), Some(expected));
        assert_eq!(parse("2024-10-30T07:13:38"), Some(expected));
        assert_eq!(parse("2024-10-30T09:13:38+02:00"), Some(expected));
        assert_eq!(parse("30/10/2024"), None);
    }
}
