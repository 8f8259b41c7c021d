//! Serde helpers for the loosely typed fields the remote store hands back
//!
//! The store keeps dates and notes as plain strings and happily returns `""`
//! for "not set". These helpers fold blank values into `None`.

/// `Option<NaiveDate>` encoded as `YYYY-MM-DD`, with `""`/`null` meaning absent
///
/// Text that is not a date also reads as absent so one odd record cannot
/// fail a whole list.
pub mod blank_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Ok(parse(value).ok()),
        }
    }

    /// Parse a calendar date, accepting full RFC 3339 timestamps as well
    pub fn parse(value: &str) -> Result<NaiveDate, String> {
        NaiveDate::parse_from_str(value, FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(value).map(|ts| ts.date_naive()))
            .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", value))
    }
}

/// `Option<String>` where `""` and `null` both mean absent
pub mod blank_string {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.filter(|value| !value.is_empty()))
    }
}
