use std::path::PathBuf;

use crate::shared::config::{
    AppConfig, AppConfigBuilder, ConfigError, DEFAULT_AUTH_URL, DEFAULT_OAUTH_URL,
    DEFAULT_TOKEN_URL, DEFAULT_WEB_URL,
};

/// API key used when none is configured; only valid against an emulator
const DEV_API_KEY: &str = "chemcycle-dev-key";

/// Application configuration wrapper.
///
/// Wraps the shared [`AppConfig`] endpoints and adds the provider API key
/// and the Google OAuth client settings, all overridable via environment
/// variables (`CHEMCYCLE_AUTH_URL`, `CHEMCYCLE_API_KEY`,
/// `CHEMCYCLE_WEB_URL`, `CHEMCYCLE_GOOGLE_CLIENT_ID`,
/// `CHEMCYCLE_GOOGLE_CLIENT_SECRET`).
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    api_key: String,
    google_client_id: String,
    google_client_secret: String,
}

impl Default for Config {
    fn default() -> Self {
        let mut builder = AppConfig::builder();
        if let Ok(url) = std::env::var("CHEMCYCLE_AUTH_URL") {
            builder = builder.auth_url(url);
        }
        if let Ok(url) = std::env::var("CHEMCYCLE_WEB_URL") {
            builder = builder.web_url(url);
        }
        let app = match builder.build() {
            Ok(app) => app,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring invalid URL in environment override");
                AppConfig::default()
            }
        };
        Self::from_app(app)
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self::from_app(builder.build()?))
    }

    /// Load configuration, preferring the platform config file.
    ///
    /// Reads `config.toml` from the platform config directory when present;
    /// an unreadable or invalid file is logged and ignored.
    pub fn load() -> Self {
        let Some(path) = Self::config_file_path() else {
            return Self::default();
        };
        let Ok(body) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match AppConfig::from_toml(&body) {
            Ok(app) => {
                tracing::debug!(path = %path.display(), "loaded config file");
                Self::from_app(app)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config file");
                Self::default()
            }
        }
    }

    fn from_app(app: AppConfig) -> Self {
        let api_key =
            std::env::var("CHEMCYCLE_API_KEY").unwrap_or_else(|_| DEV_API_KEY.to_string());
        let google_client_id =
            std::env::var("CHEMCYCLE_GOOGLE_CLIENT_ID").unwrap_or_default();
        let google_client_secret =
            std::env::var("CHEMCYCLE_GOOGLE_CLIENT_SECRET").unwrap_or_default();
        Self {
            app,
            api_key,
            google_client_id,
            google_client_secret,
        }
    }

    fn config_file_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("chemcycle").join("config.toml"))
    }

    /// Set the provider API key
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = api_key;
    }

    /// Set the Google OAuth client credentials
    pub fn set_google_client(&mut self, client_id: String, client_secret: String) {
        self.google_client_id = client_id;
        self.google_client_secret = client_secret;
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn google_client_id(&self) -> &str {
        &self.google_client_id
    }

    pub fn google_client_secret(&self) -> &str {
        &self.google_client_secret
    }

    pub fn auth_url(&self) -> &str {
        self.app.auth_url.as_deref().unwrap_or(DEFAULT_AUTH_URL)
    }

    pub fn oauth_url(&self) -> &str {
        self.app.oauth_url.as_deref().unwrap_or(DEFAULT_OAUTH_URL)
    }

    pub fn token_url(&self) -> &str {
        self.app.token_url.as_deref().unwrap_or(DEFAULT_TOKEN_URL)
    }

    pub fn web_url(&self) -> &str {
        self.app.web_url.as_deref().unwrap_or(DEFAULT_WEB_URL)
    }

    /// Full URL for the email/password signup endpoint
    pub fn signup_url(&self) -> String {
        format!("{}/v1/accounts:signUp?key={}", self.auth_url(), self.api_key)
    }

    /// Full URL for the federated credential exchange endpoint
    pub fn sign_in_with_idp_url(&self) -> String {
        format!(
            "{}/v1/accounts:signInWithIdp?key={}",
            self.auth_url(),
            self.api_key
        )
    }

    /// Full URL for a route of the ChemCycle web application
    pub fn web_route(&self, path: &str) -> String {
        format!("{}{}", self.web_url(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::with_builder(AppConfig::builder()).unwrap();
        assert_eq!(config.auth_url(), DEFAULT_AUTH_URL);
        assert_eq!(config.oauth_url(), DEFAULT_OAUTH_URL);
        assert_eq!(config.token_url(), DEFAULT_TOKEN_URL);
    }

    #[test]
    fn test_malformed_env_override_falls_back_to_defaults() {
        std::env::set_var("CHEMCYCLE_AUTH_URL", "not-a-url");
        let config = Config::new();
        std::env::remove_var("CHEMCYCLE_AUTH_URL");
        assert_eq!(config.auth_url(), DEFAULT_AUTH_URL);
    }

    #[test]
    fn test_signup_url() {
        let mut config = Config::with_builder(
            AppConfig::builder().auth_url("http://127.0.0.1:9099".to_string()),
        )
        .unwrap();
        config.set_api_key("key123".to_string());
        assert_eq!(
            config.signup_url(),
            "http://127.0.0.1:9099/v1/accounts:signUp?key=key123"
        );
    }

    #[test]
    fn test_sign_in_with_idp_url() {
        let mut config = Config::with_builder(
            AppConfig::builder().auth_url("http://127.0.0.1:9099".to_string()),
        )
        .unwrap();
        config.set_api_key("key123".to_string());
        assert_eq!(
            config.sign_in_with_idp_url(),
            "http://127.0.0.1:9099/v1/accounts:signInWithIdp?key=key123"
        );
    }

    #[test]
    fn test_web_route() {
        let config = Config::with_builder(
            AppConfig::builder().web_url("http://127.0.0.1:3000".to_string()),
        )
        .unwrap();
        assert_eq!(config.web_route("/terms"), "http://127.0.0.1:3000/terms");
        assert_eq!(config.web_route("/login"), "http://127.0.0.1:3000/login");
    }

    #[test]
    fn test_set_google_client() {
        let mut config = Config::with_builder(AppConfig::builder()).unwrap();
        config.set_google_client("id".to_string(), "secret".to_string());
        assert_eq!(config.google_client_id(), "id");
        assert_eq!(config.google_client_secret(), "secret");
    }
}
