/**
 * Authentication Module
 *
 * Authentication state and the HTTP client functions for account creation
 * against the external identity provider (email/password signup and the
 * federated Google credential exchange).
 */

use crate::egui_app::config::Config;
use crate::egui_app::types::{
    AccountInfo, GoogleTokenResponse, ProviderError, SignInWithIdpRequest, SignInWithIdpResponse,
    SignUpRequest, SignUpResponse,
};
use reqwest::Client;
use tokio::runtime::Runtime;

/// "Registration failed"
pub const MSG_SIGNUP_FAILED: &str = "Неуспешна регистрация";

/// "Registration with Google failed"
pub const MSG_GOOGLE_SIGNUP_FAILED: &str = "Неуспешна регистрация с Google";

/// Authentication state
#[derive(Debug, Clone)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<AccountInfo>,
    pub error: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            authenticated: false,
            user: None,
            error: None,
            loading: false,
        }
    }
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}

/// Pull the provider's message out of an error response.
///
/// The provider wraps failures as `{"error":{"message":"..."}}`; that
/// message is surfaced verbatim. Anything unparsable gets the localized
/// fallback.
async fn provider_error_message(response: reqwest::Response, fallback: &str) -> String {
    match response.json::<ProviderError>().await {
        Ok(err) => err.error.message,
        Err(_) => fallback.to_string(),
    }
}

/// Create a new account with email and password
pub fn create_account(
    config: &Config,
    email: String,
    password: String,
) -> Result<AccountInfo, String> {
    let client = Client::new();
    let url = config.signup_url();

    let request = SignUpRequest {
        email,
        password,
        return_secure_token: true,
    };

    // Create a runtime for async execution
    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        tracing::debug!(host = config.auth_url(), "sending signup request");
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = provider_error_message(response, MSG_SIGNUP_FAILED).await;
            tracing::warn!(%status, "signup rejected by provider");
            return Err(message);
        }

        let signup: SignUpResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(AccountInfo::from(signup))
    })
}

/// Complete a federated Google signup.
///
/// Exchanges the OAuth authorization code for an ID token at the token
/// endpoint, then trades that token for a provider account at the
/// federated credential endpoint.
pub fn sign_in_with_google(
    config: &Config,
    redirect_uri: String,
    code: String,
) -> Result<AccountInfo, String> {
    let client = Client::new();

    // Create a runtime for async execution
    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let params = [
            ("code", code.as_str()),
            ("client_id", config.google_client_id()),
            ("client_secret", config.google_client_secret()),
            ("redirect_uri", redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        tracing::debug!("exchanging authorization code");
        let response = client
            .post(config.token_url())
            .form(&params)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "token exchange rejected");
            return Err(MSG_GOOGLE_SIGNUP_FAILED.to_string());
        }

        let token: GoogleTokenResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        let request = SignInWithIdpRequest {
            post_body: format!("id_token={}&providerId=google.com", token.id_token),
            request_uri: redirect_uri.clone(),
            return_secure_token: true,
            return_idp_credential: true,
        };

        let response = client
            .post(config.sign_in_with_idp_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = provider_error_message(response, MSG_GOOGLE_SIGNUP_FAILED).await;
            tracing::warn!(%status, "federated signup rejected by provider");
            return Err(message);
        }

        let idp: SignInWithIdpResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(AccountInfo::from(idp))
    })
}
