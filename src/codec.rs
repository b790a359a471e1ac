//! Scalar codecs for Pewn JSON documents.
//!
//! Pewn encodes timestamps as `yyyy-MM-dd HH:mm:ss` strings and sometimes
//! sends `""` or the literal string `"null"` where a URL is absent.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A point in time as reported by Pewn (server local time, no offset).
///
/// Displays like a JDBC timestamp, e.g. `2014-08-09 14:45:50.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Parse a timestamp in wire format (`2014-08-09 14:45:50`, optionally
    /// with fractional seconds) or RFC 3339 (`2014-08-09T14:45:50Z`).
    ///
    /// RFC 3339 values carrying an offset are converted to UTC.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, WIRE_FORMAT)
            .or_else(|e| {
                DateTime::parse_from_rfc3339(s)
                    .map(|dt| dt.naive_utc())
                    .map_err(|_| e)
            })
            .map(Self)
    }

    /// The underlying naive date and time.
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Interpret the timestamp as UTC.
    pub fn and_utc(&self) -> DateTime<Utc> {
        self.0.and_utc()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))?;
        let nanos = self.0.nanosecond();
        if nanos == 0 {
            f.write_str(".0")
        } else {
            let digits = format!("{nanos:09}");
            write!(f, ".{}", digits.trim_end_matches('0'))
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(WIRE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
    }
}

/// Serde codec for optional URL fields.
///
/// `null`, `""` and `"null"` all decode to `None`.
///
/// ```ignore
/// #[serde(default, with = "crate::codec::optional_url")]
/// pub download_web: Option<Url>,
/// ```
pub mod optional_url {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use url::Url;

    /// Decode a single raw string the way the field codec does.
    pub fn decode(raw: &str) -> Result<Option<Url>, url::ParseError> {
        match raw {
            "" | "null" => Ok(None),
            s => Url::parse(s).map(Some),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => decode(&raw)
                .map_err(|e| de::Error::custom(format!("invalid URL '{raw}': {e}"))),
        }
    }

    pub fn serialize<S>(url: &Option<Url>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match url {
            Some(u) => serializer.serialize_str(u.as_str()),
            None => serializer.serialize_none(),
        }
    }
}

/// Accept either a JSON string or number, keeping it as a string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Decode an explicit `null` the same way as a missing field.
///
/// ```ignore
/// #[serde(default, deserialize_with = "crate::codec::null_as_default")]
/// pub hashtags: Vec<Hashtag>,
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode an optional ID where Pewn uses negative numbers for "none".
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.and_then(|id| u64::try_from(id).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[derive(Debug, Deserialize, Serialize)]
    struct Links {
        #[serde(default, with = "optional_url")]
        web: Option<Url>,
    }

    #[test]
    fn test_timestamp_display_matches_jdbc_format() {
        let ts = Timestamp::parse("2014-08-09 14:45:50").unwrap();
        assert_eq!(ts.to_string(), "2014-08-09 14:45:50.0");

        let ts = Timestamp::parse("2014-08-09 14:45:50.120").unwrap();
        assert_eq!(ts.to_string(), "2014-08-09 14:45:50.12");
    }

    #[test]
    fn test_timestamp_parses_rfc3339() {
        let ts = Timestamp::parse("2014-08-09T16:45:50+02:00").unwrap();
        assert_eq!(ts.to_string(), "2014-08-09 14:45:50.0");
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        assert!(Timestamp::parse("yesterday").is_err());
        assert!(serde_json::from_str::<Timestamp>(r#""09.08.2014""#).is_err());
    }

    #[test]
    fn test_timestamp_serde() {
        let ts: Timestamp = serde_json::from_str(r#""2016-01-02 03:04:05""#).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), r#""2016-01-02 03:04:05""#);

        let missing: Option<Timestamp> = serde_json::from_str("null").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_timestamp_ordering() {
        let older = Timestamp::parse("2014-08-09 14:45:50").unwrap();
        let newer = Timestamp::parse("2015-01-01 00:00:00").unwrap();
        assert!(older < newer);
    }

    #[test]
    fn test_optional_url_absent_markers() {
        for raw in [r#"{"web": ""}"#, r#"{"web": "null"}"#, r#"{"web": null}"#, "{}"] {
            let links: Links = serde_json::from_str(raw).unwrap();
            assert!(links.web.is_none(), "input {raw}");
        }
    }

    #[test]
    fn test_optional_url_present() {
        let links: Links =
            serde_json::from_str(r#"{"web": "http://pewn.de/games/8568/play"}"#).unwrap();
        assert_eq!(
            links.web,
            Some(Url::parse("http://pewn.de/games/8568/play").unwrap())
        );

        let json = serde_json::to_value(&links).unwrap();
        assert_eq!(json["web"], "http://pewn.de/games/8568/play");
    }

    #[test]
    fn test_optional_url_rejects_relative() {
        assert!(serde_json::from_str::<Links>(r#"{"web": "games/8568"}"#).is_err());
        assert!(optional_url::decode("games/8568").is_err());
        assert_eq!(optional_url::decode("null").unwrap(), None);
    }

    #[test]
    fn test_string_or_number() {
        #[derive(Deserialize)]
        struct Expiry {
            #[serde(default, deserialize_with = "string_or_number")]
            expires_in: Option<String>,
        }

        let e: Expiry = serde_json::from_str(r#"{"expires_in": 3600}"#).unwrap();
        assert_eq!(e.expires_in.as_deref(), Some("3600"));
        let e: Expiry = serde_json::from_str(r#"{"expires_in": "3600"}"#).unwrap();
        assert_eq!(e.expires_in.as_deref(), Some("3600"));
        let e: Expiry = serde_json::from_str("{}").unwrap();
        assert!(e.expires_in.is_none());
        assert!(serde_json::from_str::<Expiry>(r#"{"expires_in": [1]}"#).is_err());
    }

    #[test]
    fn test_null_as_default() {
        #[derive(Deserialize)]
        struct Counts {
            #[serde(default, deserialize_with = "null_as_default")]
            ids: Vec<u64>,
            #[serde(default, deserialize_with = "null_as_default")]
            name: String,
        }

        let c: Counts = serde_json::from_str(r#"{"ids": null, "name": null}"#).unwrap();
        assert!(c.ids.is_empty());
        assert_eq!(c.name, "");
        let c: Counts = serde_json::from_str(r#"{"ids": [1, 2], "name": "x"}"#).unwrap();
        assert_eq!(c.ids, vec![1, 2]);
        assert!(serde_json::from_str::<Counts>(r#"{"ids": "1"}"#).is_err());
    }

    #[test]
    fn test_optional_id_sentinel() {
        #[derive(Deserialize)]
        struct Post {
            #[serde(default, deserialize_with = "optional_id")]
            project_id: Option<u64>,
        }

        let p: Post = serde_json::from_str(r#"{"project_id": 8568}"#).unwrap();
        assert_eq!(p.project_id, Some(8568));
        for raw in [r#"{"project_id": -1}"#, r#"{"project_id": null}"#, "{}"] {
            let p: Post = serde_json::from_str(raw).unwrap();
            assert_eq!(p.project_id, None, "input {raw}");
        }
    }
}
