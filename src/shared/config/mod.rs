//! Application configuration module
//!
//! Provides configuration types for the application. Every endpoint has a
//! production default; a TOML file or the builder can override any of them.

use serde::Deserialize;
use thiserror::Error;

/// Production identity-provider host
pub const DEFAULT_AUTH_URL: &str = "https://identitytoolkit.googleapis.com";

/// Google OAuth consent page for the installed-app flow
pub const DEFAULT_OAUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Google OAuth token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// ChemCycle web application base URL (terms, privacy and login routes)
pub const DEFAULT_WEB_URL: &str = "https://chemcycle.example.com";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Identity-provider base URL
    pub auth_url: Option<String>,
    /// OAuth consent-page URL
    pub oauth_url: Option<String>,
    /// OAuth token-exchange URL
    pub token_url: Option<String>,
    /// Web application base URL
    pub web_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML configuration file body
    pub fn from_toml(body: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            toml::from_str(body).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for url in [&self.auth_url, &self.oauth_url, &self.token_url, &self.web_url]
            .into_iter()
            .flatten()
        {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    auth_url: Option<String>,
    oauth_url: Option<String>,
    token_url: Option<String>,
    web_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the identity-provider base URL
    pub fn auth_url(mut self, url: String) -> Self {
        self.auth_url = Some(url);
        self
    }

    /// Set the OAuth consent-page URL
    pub fn oauth_url(mut self, url: String) -> Self {
        self.oauth_url = Some(url);
        self
    }

    /// Set the OAuth token-exchange URL
    pub fn token_url(mut self, url: String) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Set the web application base URL
    pub fn web_url(mut self, url: String) -> Self {
        self.web_url = Some(url);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            auth_url: self.auth_url,
            oauth_url: self.oauth_url,
            token_url: self.token_url,
            web_url: self.web_url,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("config file parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_urls() {
        let config = AppConfig::builder()
            .auth_url("http://127.0.0.1:9099".to_string())
            .web_url("http://127.0.0.1:3000".to_string())
            .build()
            .unwrap();
        assert_eq!(config.auth_url.as_deref(), Some("http://127.0.0.1:9099"));
        assert_eq!(config.web_url.as_deref(), Some("http://127.0.0.1:3000"));
        assert!(config.oauth_url.is_none());
    }

    #[test]
    fn test_builder_rejects_bad_scheme() {
        let result = AppConfig::builder()
            .auth_url("ftp://example.com".to_string())
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_from_toml() {
        let config = AppConfig::from_toml(
            r#"
            auth_url = "https://identitytoolkit.googleapis.com"
            web_url = "https://chemcycle.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.auth_url.as_deref(),
            Some("https://identitytoolkit.googleapis.com")
        );
        assert!(config.token_url.is_none());
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(matches!(
            AppConfig::from_toml("auth_url = ["),
            Err(ConfigError::Parse(_))
        ));
    }
}
