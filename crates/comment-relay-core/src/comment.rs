//! Comment payloads.
//!
//! Inbound bodies are accepted loosely and checked with JSON truthiness rules;
//! accepted values are forwarded to the upstream untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::ids::PostId;

/// Body of an inbound "add comment" request.
///
/// Every field is optional so that a missing field surfaces as a validation
/// error rather than a deserialization failure. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommentInput {
    /// Caller-supplied comment identifier.
    #[serde(default)]
    pub id: Option<Value>,
    /// Author name.
    #[serde(default)]
    pub name: Option<Value>,
    /// Author email. Format is not checked.
    #[serde(default)]
    pub email: Option<Value>,
    /// Comment text.
    #[serde(default)]
    pub body: Option<Value>,
}

/// Outbound payload sent to the upstream comments endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    /// Comment identifier, as supplied by the caller.
    pub id: Value,
    /// Post identifier parsed from the path; `null` when it has no leading integer.
    pub post_id: Option<i64>,
    /// Author name.
    pub name: Value,
    /// Author email.
    pub email: Value,
    /// Comment text.
    pub body: Value,
}

impl CommentInput {
    /// Check that all four fields are present and truthy, and build the
    /// outbound payload for `post_id`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingFields` if any of `id`, `name`,
    /// `email` or `body` is absent or falsy (see [`is_truthy`]). A zero `id`
    /// is rejected.
    pub fn validate(self, post_id: &PostId) -> Result<NewComment> {
        match (
            truthy(self.id),
            truthy(self.name),
            truthy(self.email),
            truthy(self.body),
        ) {
            (Some(id), Some(name), Some(email), Some(body)) => Ok(NewComment {
                id,
                post_id: post_id.numeric(),
                name,
                email,
                body,
            }),
            _ => Err(ValidationError::MissingFields),
        }
    }
}

fn truthy(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}

/// JSON truthiness: `null`, `false`, zero and `""` are falsy, everything else
/// (including empty arrays and objects) is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
