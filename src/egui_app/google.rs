//! Federated Google sign-in plumbing
//!
//! Desktop counterpart of the provider-hosted popup: bind a loopback
//! listener on an ephemeral port, send the user's browser to the consent
//! page, and block until the single redirect carrying the authorization
//! code (or an error) comes back. The code is then exchanged by
//! [`crate::egui_app::auth::sign_in_with_google`].
//!
//! There is no timeout and no cancellation: an abandoned consent page
//! leaves the worker thread parked on `accept`, same as an unanswered
//! network call elsewhere in the app.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};

use crate::egui_app::auth::MSG_GOOGLE_SIGNUP_FAILED;
use crate::egui_app::config::Config;

/// Page shown in the browser tab once the redirect lands
const CALLBACK_PAGE: &str = "<html><body><h3>Регистрацията продължава в приложението ChemCycle.</h3><p>Можете да затворите този прозорец.</p></body></html>";

/// One pending federated sign-in attempt
pub struct GoogleSignIn {
    listener: TcpListener,
    redirect_uri: String,
    auth_url: String,
}

impl GoogleSignIn {
    /// Bind the loopback callback listener and build the consent URL
    pub fn start(config: &Config) -> Result<Self, String> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .map_err(|e| format!("Failed to bind loopback listener: {}", e))?;
        let port = listener
            .local_addr()
            .map_err(|e| format!("Failed to read listener address: {}", e))?
            .port();
        let redirect_uri = format!("http://127.0.0.1:{}", port);

        let mut url = reqwest::Url::parse(config.oauth_url())
            .map_err(|e| format!("Invalid OAuth URL: {}", e))?;
        url.query_pairs_mut()
            .append_pair("client_id", config.google_client_id())
            .append_pair("redirect_uri", &redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", "openid email")
            .append_pair("prompt", "select_account");

        Ok(Self {
            listener,
            redirect_uri,
            auth_url: url.into(),
        })
    }

    /// The loopback URI the provider will redirect to
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// The provider-hosted consent URL to open in the browser
    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    /// Block until the provider redirects back, returning the code
    pub fn wait_for_callback(self) -> Result<String, String> {
        let (stream, _) = self
            .listener
            .accept()
            .map_err(|e| format!("Callback listener failed: {}", e))?;
        handle_callback(stream)
    }
}

fn handle_callback(stream: TcpStream) -> Result<String, String> {
    let mut request_line = String::new();
    BufReader::new(&stream)
        .read_line(&mut request_line)
        .map_err(|e| format!("Failed to read callback request: {}", e))?;

    let result = parse_request_line(&request_line);

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        CALLBACK_PAGE.len(),
        CALLBACK_PAGE
    );
    // The browser-side page is cosmetic; the code matters more than the write.
    let _ = (&stream).write_all(response.as_bytes());

    result
}

/// Extract the authorization code from the callback request line.
///
/// The line looks like `GET /?code=... HTTP/1.1`; a declined consent
/// arrives as `?error=access_denied` instead.
fn parse_request_line(line: &str) -> Result<String, String> {
    let path = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| MSG_GOOGLE_SIGNUP_FAILED.to_string())?;
    let url = reqwest::Url::parse(&format!("http://127.0.0.1{}", path))
        .map_err(|_| MSG_GOOGLE_SIGNUP_FAILED.to_string())?;

    let mut code = None;
    let mut error = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Err(format!("{}: {}", MSG_GOOGLE_SIGNUP_FAILED, error));
    }
    code.ok_or_else(|| MSG_GOOGLE_SIGNUP_FAILED.to_string())
}
