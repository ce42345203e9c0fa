//! Data models for the login request and its outcome

use serde::{Deserialize, Serialize};
use std::fmt;

/// Email/password pair typed into the login form
///
/// Held in memory only while the login screen is alive; never persisted.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs and panic messages
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body returned by the backend on a successful login
///
/// Only `name` is read; any other field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub name: Option<String>,
}

/// Outcome of a single submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Success { user_name: String },
    /// `reason` is diagnostic text for the log, never shown to the user
    Failure { reason: String },
}

impl AuthResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthResult::Success { .. })
    }
}
