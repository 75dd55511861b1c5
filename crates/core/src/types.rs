use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A timestamp field as it was recorded on a wishlist or product.
///
/// Decoding never fails: a value that is not an RFC 3339 string is kept
/// verbatim as [`RecordedTime::Unparsed`] and echoed back unchanged.
/// Parsed values keep their original text, so fixtures round-trip exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecordedTime {
    /// Field absent or `null`.
    #[default]
    Missing,
    /// A valid instant and the text it was read from.
    At { instant: Timestamp, text: String },
    /// Present but not a usable date. Never compares as before or after
    /// anything.
    Unparsed(serde_json::Value),
}

impl RecordedTime {
    /// Parse an RFC 3339 string, keeping the text either way.
    pub fn parse(s: &str) -> Self {
        match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Self::At {
                instant: dt.with_timezone(&Utc),
                text: s.to_string(),
            },
            Err(_) => Self::Unparsed(serde_json::Value::String(s.to_string())),
        }
    }

    /// Record an instant rendered with exactly three fractional digits.
    pub fn from_instant(instant: Timestamp) -> Self {
        Self::At {
            instant,
            text: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn instant(&self) -> Option<Timestamp> {
        match self {
            Self::At { instant, .. } => Some(*instant),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl std::fmt::Display for RecordedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => f.write_str("missing"),
            Self::At { text, .. } => f.write_str(text),
            Self::Unparsed(raw) => write!(f, "{raw}"),
        }
    }
}

impl Serialize for RecordedTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Missing => serializer.serialize_none(),
            Self::At { text, .. } => serializer.serialize_str(text),
            Self::Unparsed(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RecordedTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            None | Some(serde_json::Value::Null) => Self::Missing,
            Some(serde_json::Value::String(s)) => Self::parse(&s),
            Some(other) => Self::Unparsed(other),
        })
    }
}
