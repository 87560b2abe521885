//! Shared response envelope for mutating endpoints.
//!
//! Create, update, and attach endpoints always answer 200 with an
//! `{ "errors": ... }` envelope: `null` on success, a list of messages
//! otherwise. Use [`ErrorsResponse`] instead of ad-hoc
//! `serde_json::json!({ "errors": ... })` to keep the shape consistent.

use serde::Serialize;

/// Standard `{ "errors": null | [..] }` response envelope.
#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    pub errors: Option<Vec<String>>,
}

impl ErrorsResponse {
    /// Success: `{"errors": null}`.
    pub fn ok() -> Self {
        Self { errors: None }
    }

    /// Failure carrying every collected message.
    pub fn failed(messages: Vec<String>) -> Self {
        Self {
            errors: Some(messages),
        }
    }

    /// Failure carrying a single message.
    pub fn single(message: String) -> Self {
        Self {
            errors: Some(vec![message]),
        }
    }
}
