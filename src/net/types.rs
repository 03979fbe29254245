//! Request and response DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON contract so serde handles the wire
//! format end to end. The error body is permissive: every field defaults so a
//! partial or unrelated body still deserializes instead of failing the whole
//! error path.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Login request body. Transient; owned by the login form for one submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body for the account-creation dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Structured validation-error body:
/// `{ "message": "...", "errors": { "field": ["msg", ...] } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}
