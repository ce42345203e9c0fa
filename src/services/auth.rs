//! Authentication service
//!
//! Sends the login request to the backend and folds every kind of failure
//! into a single `AuthResult::Failure`.

use crate::config::Config;
use crate::model::auth::{AuthResult, Credentials, LoginResponse};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Path of the login endpoint, appended to the configured base URL
pub const LOGIN_PATH: &str = "/api/users/login";

/// Why a login attempt failed
///
/// The distinction only reaches the log. Callers of `submit` see one
/// generic failure.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Login request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server rejected login with HTTP {0}")]
    Status(StatusCode),
    #[error("Login response is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("Login response has no `name` field")]
    MissingName,
}

/// Build the full login URL from a base URL
pub fn login_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), LOGIN_PATH)
}

/// HTTP client for the login endpoint
#[derive(Debug, Clone)]
pub struct AuthClient {
    http_client: reqwest::Client,
    login_url: String,
}

impl AuthClient {
    /// Create a client for `base_url`, with an optional request timeout
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, LoginError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(LoginError::ClientBuild)?;

        Ok(Self {
            http_client,
            login_url: login_url(base_url),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LoginError> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// POST the credentials and return the user's name
    ///
    /// Exactly one request per call; no retries.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, LoginError> {
        let response = self
            .http_client
            .post(&self.login_url)
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoginError::Status(status));
        }

        let body = response.bytes().await?;
        let parsed: LoginResponse = serde_json::from_slice(&body)?;
        debug!(?parsed, "Login response");

        parsed.name.ok_or(LoginError::MissingName)
    }

    /// Run one login attempt and fold the outcome into an `AuthResult`
    pub async fn submit(&self, credentials: &Credentials) -> AuthResult {
        info!(email = %credentials.email, url = %self.login_url, "Attempting login");

        match self.login(credentials).await {
            Ok(user_name) => {
                info!(%user_name, "Login succeeded");
                AuthResult::Success { user_name }
            }
            Err(e) => {
                warn!(error = %e, "Login failed");
                AuthResult::Failure {
                    reason: e.to_string(),
                }
            }
        }
    }
}
