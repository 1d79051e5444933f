//! Client configuration loaded from environment variables.

/// Environment variable naming the authentication service base URL.
pub const BASE_URL_VAR: &str = "SITECHAT_BASE_URL";

/// Errors produced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL environment variable is not set.
    #[error("missing base URL: env var {var} not set")]
    MissingBaseUrl { var: String },
}

/// Startup configuration for the client core.
///
/// Loaded once when the client starts; not reloadable at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the remote authentication service, without trailing slash.
    pub base_url: String,
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// Honors a `.env` file if present. A trailing `/` on the base URL is
    /// trimmed so endpoint paths can be joined uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] if `SITECHAT_BASE_URL` is not
    /// set.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var(BASE_URL_VAR)
            .map_err(|_| ConfigError::MissingBaseUrl { var: BASE_URL_VAR.into() })?
            .trim_end_matches('/')
            .to_string();

        Ok(Self { base_url })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
