//! External service interactions
//!
//! - `auth` - HTTP client for the backend login endpoint
//! - `auth_runner` - runs login attempts in the background for the UI loop

pub mod auth;
pub mod auth_runner;

pub use auth::AuthClient;
pub use auth_runner::AuthRunner;
