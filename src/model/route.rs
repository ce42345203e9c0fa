//! Screens and the effects the login flow asks the UI to perform

use std::fmt;

/// A screen the application can show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    /// Only produced by a successful login
    Home { user_name: String },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home { .. } => "Home",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => write!(f, "Login"),
            Route::Home { user_name } => write!(f, "Home({})", user_name),
        }
    }
}

/// Declarative instruction emitted by the login flow for the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Switch to the given screen
    Navigate(Route),
    /// Tell the user the login failed (alert + shake)
    NotifyFailure,
}
