//! Check-in processing error records as delivered by the ingestion backend
//!
//! Only the fields the grouping needs are typed. Everything else is kept in
//! opaque JSON maps so that records can be re-serialized unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of the project a check-in belongs to
pub type ProjectId = i64;

/// Raw numeric error type code
pub type ErrorTypeCode = i64;

/// A project id or error type code exactly as the record carried it.
///
/// Integers are the expected shape. Anything else is kept rather than
/// rejected so it can still be grouped. Ordering is integers first, then
/// strings, then other JSON values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Code(i64),
    Text(String),
    /// Any other JSON value, stored as its JSON text
    Raw(String),
}

impl GroupKey {
    pub fn as_code(&self) -> Option<i64> {
        match self {
            Self::Code(code) => Some(*code),
            _ => None,
        }
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::Number(number) => match number.as_i64() {
                Some(code) => Self::Code(code),
                None => Self::Raw(number.to_string()),
            },
            Value::String(text) => Self::Text(text),
            other => Self::Raw(other.to_string()),
        }
    }
}

impl From<i64> for GroupKey {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Text(text) | Self::Raw(text) => f.write_str(text),
        }
    }
}

impl Serialize for GroupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Code(code) => serializer.serialize_i64(*code),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Raw(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(value) => value.serialize(serializer),
                Err(_) => serializer.serialize_str(raw),
            },
        }
    }
}

impl<'de> Deserialize<'de> for GroupKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// A check-in that failed ingestion together with the errors it produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinProcessingError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub checkin: Checkin,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

/// The check-in envelope as it was received
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Checkin {
    #[serde(default)]
    pub message: CheckinMessage,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The decoded check-in message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckinMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<GroupKey>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single ingestion failure reported for a check-in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<GroupKey>,
    /// Type specific context (e.g. `reason`, `existing_monitor_count`)
    #[serde(flatten)]
    pub context: Map<String, Value>,
}

impl CheckinProcessingError {
    pub fn new(project_id: Option<ProjectId>, errors: Vec<ErrorDetail>) -> Self {
        Self {
            id: None,
            checkin: Checkin {
                message: CheckinMessage {
                    project_id: project_id.map(GroupKey::Code),
                    extra: Map::new(),
                },
                extra: Map::new(),
            },
            errors,
        }
    }

    /// Project the check-in was sent to, if the message carried one
    pub fn project_id(&self) -> Option<&GroupKey> {
        self.checkin.message.project_id.as_ref()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl ErrorDetail {
    pub fn new(error_type: ErrorTypeCode) -> Self {
        Self {
            error_type: Some(GroupKey::Code(error_type)),
            context: Map::new(),
        }
    }

    #[must_use]
    pub fn with_context<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}
