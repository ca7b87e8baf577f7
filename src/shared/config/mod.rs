//! Application configuration module
//!
//! Configuration values shared by the desktop client, built through a
//! validating builder.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the credential service, without a trailing slash
    pub server_url: String,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let url = self.server_url.ok_or(ConfigError::MissingValue("server_url"))?;
        let url = url.trim().trim_end_matches('/').to_string();

        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        if !has_scheme || url.ends_with("//") {
            return Err(ConfigError::InvalidUrl(url));
        }

        Ok(AppConfig { server_url: url })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
