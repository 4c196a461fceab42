/// Date helpers for the API's fixed `yyyy-mm-dd` format
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// Wire format of every date the API exchanges
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an API date as midnight UTC
pub fn parse_api_date(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(s, API_DATE_FORMAT)?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Format a timestamp back into the API date format, in UTC
pub fn format_api_date(dt: &DateTime<Utc>) -> String {
    dt.format(API_DATE_FORMAT).to_string()
}

/// Serde adapter for `DateTime<Utc>` fields carried as API dates
pub mod api_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_api_date(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_api_date(&s)
            .map_err(|e| serde::de::Error::custom(format!("invalid date {s:?}: {e}")))
    }
}

/// Like `api_date`, for fields the API may leave out
pub mod api_date_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => super::api_date::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| {
                super::parse_api_date(&s)
                    .map_err(|e| serde::de::Error::custom(format!("invalid date {s:?}: {e}")))
            })
            .transpose()
    }
}
