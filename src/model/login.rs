//! Login flow state machine
//!
//! Owns the credentials being typed and tracks the state of submit attempts.
//! Network I/O happens elsewhere (see `services::auth`); this type only
//! decides what a result means for the UI.
//!
//! ```text
//!   Idle ──submit──▶ Submitting ──Success──▶ Succeeded ──▶ Navigate(Home)
//!    ▲                  │   ▲
//!    │               Failure │ resubmit
//!    │                  ▼   │
//!    └───edit/reset─── Failed ──▶ NotifyFailure
//! ```
//!
//! Every submit gets a fresh attempt id. A result is only honored if it
//! belongs to the latest attempt, so when submits overlap the last one
//! issued decides the outcome instead of whichever response lands last.

use super::auth::{AuthResult, Credentials};
use super::route::{Effect, Route};
use tracing::debug;

/// Identifier of a single submit attempt, increasing per flow
pub type AttemptId = u64;

/// Where the flow currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting {
        attempt: AttemptId,
    },
    Succeeded {
        user_name: String,
    },
    Failed,
}

/// Input field of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Email,
    Password,
}

impl Field {
    pub fn next(&self) -> Field {
        match self {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        }
    }

    // Two fields, so previous and next coincide
    pub fn prev(&self) -> Field {
        self.next()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }
}

/// A single mutation of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Clear,
}

/// The login controller
#[derive(Debug, Default)]
pub struct LoginFlow {
    credentials: Credentials,
    state: LoginState,
    latest_attempt: AttemptId,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn latest_attempt(&self) -> AttemptId {
        self.latest_attempt
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, LoginState::Submitting { .. })
    }

    /// Apply an edit to one of the fields
    ///
    /// Editing after a failure puts the flow back to `Idle`. Edits while a
    /// request is in flight do not change the state.
    pub fn edit(&mut self, field: Field, edit: FieldEdit) {
        let value = match field {
            Field::Email => &mut self.credentials.email,
            Field::Password => &mut self.credentials.password,
        };

        match edit {
            FieldEdit::Insert(c) => value.push(c),
            FieldEdit::Backspace => {
                value.pop();
            }
            FieldEdit::Clear => value.clear(),
        }

        if self.state == LoginState::Failed {
            self.state = LoginState::Idle;
        }
    }

    /// Start a new attempt
    ///
    /// Always allowed, including with empty fields or while an earlier
    /// attempt is still pending. Returns the attempt id and the credentials
    /// to send.
    pub fn begin_submit(&mut self) -> (AttemptId, Credentials) {
        self.latest_attempt += 1;
        let attempt = self.latest_attempt;
        self.state = LoginState::Submitting { attempt };
        (attempt, self.credentials.clone())
    }

    /// Interpret the result of an attempt
    ///
    /// Returns `None` when the result is stale: it belongs to an older
    /// attempt, or the flow was reset while it was in flight.
    pub fn on_result(&mut self, attempt: AttemptId, result: AuthResult) -> Option<Effect> {
        if self.state != (LoginState::Submitting { attempt }) {
            debug!(
                attempt,
                latest = self.latest_attempt,
                "Ignoring stale login result"
            );
            return None;
        }

        match result {
            AuthResult::Success { user_name } => {
                self.state = LoginState::Succeeded {
                    user_name: user_name.clone(),
                };
                Some(Effect::Navigate(Route::Home { user_name }))
            }
            AuthResult::Failure { .. } => {
                // Credentials stay populated so the user can correct them
                self.state = LoginState::Failed;
                Some(Effect::NotifyFailure)
            }
        }
    }

    /// Return to `Idle` without touching the credentials
    pub fn reset(&mut self) {
        self.state = LoginState::Idle;
    }
}
