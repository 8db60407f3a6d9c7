//! The `{status, message, data}` result every action produces

use crate::model::User;
use serde::Serialize;
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload carried by a successful envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    User(User),
    Users(Vec<User>),
    /// Whatever the service answered, passed through unparsed
    Raw(JsonValue),
}

impl Payload {
    /// Mirrors the truthiness check the human output uses: empty lists,
    /// nulls, empty objects and zero have nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::User(_) => false,
            Self::Users(users) => users.is_empty(),
            Self::Raw(JsonValue::Null) => true,
            Self::Raw(JsonValue::Array(items)) => items.is_empty(),
            Self::Raw(JsonValue::Object(map)) => map.is_empty(),
            Self::Raw(JsonValue::String(s)) => s.is_empty(),
            Self::Raw(JsonValue::Bool(b)) => !b,
            Self::Raw(JsonValue::Number(n)) => n.as_f64() == Some(0.0),
        }
    }
}

/// Normalized action result.
///
/// Fields are private so the only ways to build one are [`Envelope::success`]
/// and [`Envelope::error`]; an error envelope can never carry data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    status: Status,
    message: String,
    data: Option<Payload>,
}

impl Envelope {
    pub fn success(message: impl Into<String>, data: Payload) -> Self {
        let data = match data {
            Payload::Raw(JsonValue::Null) => None,
            other => Some(other),
        };
        Self {
            status: Status::Success,
            message: message.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            data: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Payload> {
        self.data.as_ref()
    }

    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}
