use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                server_url: DEFAULT_SERVER_URL.to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `CLIENT_API_URL`, falling back to the default when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("CLIENT_API_URL") {
            Ok(url) => Self::with_builder(AppConfig::builder().server_url(url)),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self { app: builder.build()? })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.server_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_api_url() {
        let config = Config::new();
        let url = config.api_url("/api/auth/login");
        assert_eq!(url, "http://127.0.0.1:3000/api/auth/login");
    }

    #[test]
    fn test_with_builder_normalizes_url() {
        let config =
            Config::with_builder(AppConfig::builder().server_url("https://edu.example.com/")).unwrap();
        assert_eq!(config.api_url("/api/auth/me"), "https://edu.example.com/api/auth/me");
    }

    #[test]
    fn test_with_builder_rejects_bad_url() {
        let result = Config::with_builder(AppConfig::builder().server_url("edu.example.com"));
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }
}
