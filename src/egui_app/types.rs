/**
 * Shared Types Module
 *
 * Defines shared types for the egui app: app views, the signup form state,
 * the provider account record, and the identity-provider wire types.
 */

use serde::{Deserialize, Serialize};

/// Current app view/mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppView {
    /// Registration form
    Signup,
    /// Home screen shown after a successful signup
    Home,
}

/// Provider-issued account record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Provider-unique identifier
    pub uid: String,
    pub email: String,
}

/// Which flow produced an in-flight signup attempt.
///
/// The email/password variant carries the name fields as typed at submit
/// time, so edits made while the request is in flight cannot change what
/// gets persisted when the response lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupFlow {
    EmailPassword {
        first_name: String,
        last_name: String,
    },
    Google,
}

/// User-entered registration form state.
///
/// Mutated directly by the text widgets; the error banner is cleared by
/// the view whenever any field reports a change.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub agreed_to_terms: bool,
}

/// Email/password signup request body (Identity Toolkit `accounts:signUp`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

/// Email/password signup response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Federated credential exchange request body (`accounts:signInWithIdp`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInWithIdpRequest {
    /// URL-encoded `id_token=...&providerId=google.com` pair
    pub post_body: String,
    /// The loopback redirect URI the OAuth code was delivered to
    pub request_uri: String,
    pub return_secure_token: bool,
    pub return_idp_credential: bool,
}

/// Federated credential exchange response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInWithIdpResponse {
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub id_token: Option<String>,
}

/// OAuth token endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTokenResponse {
    pub id_token: String,
}

/// Error envelope returned by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderError {
    pub error: ProviderErrorBody,
}

/// Inner provider error carrying the human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderErrorBody {
    pub message: String,
}

impl From<SignUpResponse> for AccountInfo {
    fn from(value: SignUpResponse) -> Self {
        Self {
            uid: value.local_id,
            email: value.email,
        }
    }
}

impl From<SignInWithIdpResponse> for AccountInfo {
    fn from(value: SignInWithIdpResponse) -> Self {
        Self {
            uid: value.local_id,
            email: value.email,
        }
    }
}
