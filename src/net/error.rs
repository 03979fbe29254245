//! Typed API failure surface.
//!
//! ERROR HANDLING
//! ==============
//! Callers branch on two shapes: the request never produced a response, or
//! the server rejected it with a status and (maybe) a structured body. Field
//! lookups go through `field_message`, which tolerates an absent or malformed
//! body instead of panicking partway down a property chain.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::ValidationErrorBody;

/// Error produced by the REST helpers in `net::api`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure: network unreachable, request serialization.
    Transport(String),
    /// The server answered with a non-success status.
    Rejected {
        status: u16,
        body: Option<ValidationErrorBody>,
    },
}

impl ApiError {
    /// Text for the generic failure toast. Prefers the server's own message.
    pub fn message(&self) -> String {
        match self {
            Self::Transport(message) => message.clone(),
            Self::Rejected { status, body } => body
                .as_ref()
                .and_then(|b| b.message.clone())
                .unwrap_or_else(|| format!("request failed: {status}")),
        }
    }

    /// The server's message list for `field`, comma-joined.
    ///
    /// Returns `None` for transport errors, bodyless rejections, and bodies
    /// without an entry for `field`.
    pub fn field_message(&self, field: &str) -> Option<String> {
        match self {
            Self::Rejected {
                body: Some(body), ..
            } => field_message_from(body, field),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Join the body's message list for `field`, if present and non-empty.
pub(crate) fn field_message_from(body: &ValidationErrorBody, field: &str) -> Option<String> {
    let messages = body.errors.get(field)?;
    if messages.is_empty() {
        None
    } else {
        Some(messages.join(","))
    }
}
