//! User records and the identifiers callers use to address them

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;

/// A user record as returned by the directory service.
///
/// The service owns these records; a `User` never outlives one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Fields the service sends that we do not model
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }
}

// The service is free to hand out numeric ids.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => Ok(s),
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for user id, got {}",
            other
        ))),
    }
}

/// Body of `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial update for `PUT /users/{id}`.
///
/// A field left as `None` is not sent at all, so the service keeps its
/// current value. Empty strings are treated as not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    name: Option<String>,
    email: Option<String>,
}

impl UserUpdate {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self {
            name: name.filter(|s| !s.is_empty()),
            email: email.filter(|s| !s.is_empty()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Query parameters for the PUT request, supplied fields only
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(name) = &self.name {
            pairs.push(("name", name.as_str()));
        }
        if let Some(email) = &self.email {
            pairs.push(("email", email.as_str()));
        }
        pairs
    }

    pub fn updated_fields(&self) -> Vec<&'static str> {
        self.query_pairs().into_iter().map(|(key, _)| key).collect()
    }
}

/// How a caller names a user: by service id, or by email address.
///
/// Built once from the raw argument; anything containing `@` is an email.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Id(String),
    Email(String),
}

impl Identifier {
    pub fn parse(raw: &str) -> Self {
        if raw.contains('@') {
            Self::Email(raw.to_string())
        } else {
            Self::Id(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Id(s) | Self::Email(s) => s,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
