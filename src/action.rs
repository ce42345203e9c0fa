//! Action enum - All possible application actions
//!
//! Components emit Actions in response to key events, and the App
//! processes them to update state.

use crate::model::route::{Effect, Route};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations and polling
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Close the current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Login Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next field
    FocusNextField,
    /// Move focus to the previous field
    FocusPrevField,
    /// Type a character into the focused field
    LoginInput(char),
    /// Delete the last character of the focused field
    LoginBackspace,
    /// Empty the focused field
    LoginClearField,
    /// Send the credentials to the backend
    SubmitLogin,

    // ─────────────────────────────────────────────────────────────────────────
    // Login Effects
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch screen
    Navigate(Route),
    /// Go back to the previous screen
    NavigateBack,
    /// Show the failure alert and shake the form
    NotifyFailure,
}

impl From<Effect> for Action {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::Navigate(route) => Action::Navigate(route),
            Effect::NotifyFailure => Action::NotifyFailure,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::FocusNextField => write!(f, "FocusNextField"),
            Action::FocusPrevField => write!(f, "FocusPrevField"),
            // Typed characters may be part of a password
            Action::LoginInput(_) => write!(f, "LoginInput"),
            Action::LoginBackspace => write!(f, "LoginBackspace"),
            Action::LoginClearField => write!(f, "LoginClearField"),
            Action::SubmitLogin => write!(f, "SubmitLogin"),
            Action::Navigate(route) => write!(f, "Navigate({})", route),
            Action::NavigateBack => write!(f, "NavigateBack"),
            Action::NotifyFailure => write!(f, "NotifyFailure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_conversion() {
        assert_eq!(Action::from(Effect::NotifyFailure), Action::NotifyFailure);
        assert_eq!(
            Action::from(Effect::Navigate(Route::Login)),
            Action::Navigate(Route::Login)
        );
    }

    #[test]
    fn test_display_hides_typed_characters() {
        assert_eq!(Action::LoginInput('s').to_string(), "LoginInput");
    }
}
