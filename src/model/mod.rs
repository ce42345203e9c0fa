//! Model layer - state and data types
//!
//! - `auth` - credentials and the outcome of a login attempt
//! - `login` - the login flow state machine
//! - `route` - screens and the effects that move between them
//! - `modal` - overlay management

pub mod auth;
pub mod login;
pub mod modal;
pub mod route;
