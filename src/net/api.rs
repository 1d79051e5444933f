//! Remote authentication endpoint client.
//!
//! Thin HTTP wrapper for `POST {base_url}/api/login`. Pure parsing in
//! `parse_login_response` for testability; the [`AuthApi`] trait is the seam
//! that lets the session store be driven by a mock in tests.
//!
//! ERROR HANDLING
//! ==============
//! Callers of `login` see a single [`AuthError`] kind covering transport
//! failures and non-success responses alike; the variants exist for display,
//! not for branching.

use async_trait::async_trait;

use crate::config::Config;

/// Path of the login endpoint relative to the configured base URL.
pub const LOGIN_ENDPOINT: &str = "/api/login";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the authentication endpoint.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The HTTP request did not complete (DNS, connect, transport).
    #[error("login request failed: {0}")]
    Request(String),

    /// The service returned a non-success HTTP status.
    #[error("login rejected: status {status}")]
    Response { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("login response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
}

/// Successful login payload from the remote service.
///
/// `user_id` is assigned by the service and treated as an unstructured value
/// throughout the client core.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginResponse {
    pub user_id: serde_json::Value,
}

// =============================================================================
// CLIENT
// =============================================================================

/// The one remote call that establishes identity.
#[async_trait]
pub trait AuthApi {
    /// Authenticate `username` against the remote service.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] on transport failure, non-success status, or an
    /// undecodable response body.
    async fn login(&self, username: &str) -> Result<LoginResponse, AuthError>;
}

/// [`AuthApi`] over a real HTTP connection.
///
/// Exactly one outbound request per `login` call; no retry, no timeout
/// policy, no request deduplication.
pub struct HttpAuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { http: reqwest::Client::new(), base_url: config.base_url.clone() }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, username: &str) -> Result<LoginResponse, AuthError> {
        let url = format!("{}{LOGIN_ENDPOINT}", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { username })
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        parse_login_response(status, &text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_login_response(status: u16, body: &str) -> Result<LoginResponse, AuthError> {
    if !(200..300).contains(&status) {
        return Err(AuthError::Response { status, body: body.to_owned() });
    }

    serde_json::from_str(body).map_err(|e| AuthError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
