use std::sync::mpsc::{channel, Receiver};

use crate::egui_app::validation::{self, PasswordRequirements};
use crate::egui_app::{
    auth, session_cache, AccountInfo, AppView, AuthState, Config, DebugCategory, DebugLevel,
    DebugLogger, GoogleSignIn, SignupFlow, SignupForm, StoredUser,
};

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub auth_state: AuthState,
    pub current_view: AppView,
    pub form: SignupForm,
    /// In-flight signup attempt, if any, with the flow that started it
    pub auth_result: Option<(SignupFlow, Receiver<Result<AccountInfo, String>>)>,
    pub debug_logger: DebugLogger,
    pub debug_view_open: bool,
    pub debug_view_expanded: bool,
    pub debug_filter_category: Option<DebugCategory>,
    pub debug_filter_level: Option<DebugLevel>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> Self {
        let debug_logger = DebugLogger::new(1000);
        debug_logger.info(DebugCategory::Other, "AppState initialized");

        Self {
            config,
            auth_state: AuthState::new(),
            current_view: AppView::Signup,
            form: SignupForm::default(),
            auth_result: None,
            debug_logger,
            debug_view_open: false,
            debug_view_expanded: false,
            debug_filter_category: None,
            debug_filter_level: None,
        }
    }

    /// Any field edit dismisses the current error banner
    pub fn note_field_edited(&mut self) {
        self.auth_state.clear_error();
    }

    /// Requirement snapshot for the password currently in the form
    pub fn password_requirements(&self) -> PasswordRequirements {
        PasswordRequirements::check(&self.form.password)
    }

    pub fn is_password_valid(&self) -> bool {
        self.password_requirements().all_met()
    }

    /// Whether the submit button is enabled.
    ///
    /// Advisory only: it keeps the button from being clicked during an
    /// in-flight attempt, it is not a mutual-exclusion lock.
    pub fn can_submit(&self) -> bool {
        !self.auth_state.loading && self.is_password_valid() && self.form.agreed_to_terms
    }

    /// Poll the in-flight signup attempt; called once per frame.
    pub fn check_auth_result(&mut self) {
        let Some((flow, rx)) = &self.auth_result else {
            return;
        };
        let flow = flow.clone();
        let Ok(result) = rx.try_recv() else {
            return;
        };
        self.auth_result = None;
        self.auth_state.loading = false;

        match result {
            Ok(account) => {
                self.debug_logger.info(
                    DebugCategory::Auth,
                    format!("Registration successful: {}", account.email),
                );

                let record = match flow {
                    SignupFlow::EmailPassword {
                        first_name,
                        last_name,
                    } => StoredUser::from_signup(&account, &first_name, &last_name),
                    SignupFlow::Google => StoredUser::from_federated(&account),
                };
                match session_cache::store(&record) {
                    Ok(path) => self.debug_logger.info(
                        DebugCategory::Storage,
                        format!("session record cached at {}", path.display()),
                    ),
                    Err(e) => self.debug_logger.warn(
                        DebugCategory::Storage,
                        format!("session cache write failed: {}", e),
                    ),
                }

                self.auth_state.authenticated = true;
                self.auth_state.user = Some(account);
                self.auth_state.error = None;
                // Field values stay as typed; the form is never cleared.
                self.current_view = AppView::Home;
            }
            Err(e) => {
                self.debug_logger
                    .error(DebugCategory::Auth, format!("Registration failed: {}", e));
                self.auth_state.set_error(e);
            }
        }
    }

    /// Validate the form and, if it passes, start the account-creation
    /// request on a worker thread.
    pub fn handle_submit(&mut self) {
        if let Err(message) = validation::validate_signup(&self.form) {
            self.debug_logger.warn(DebugCategory::Validation, message);
            self.auth_state.set_error(message.to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let email = self.form.email.clone();
        let password = self.form.password.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = auth::create_account(&config, email, password);
            let _ = tx.send(result);
        });

        self.auth_result = Some((
            SignupFlow::EmailPassword {
                first_name: self.form.first_name.clone(),
                last_name: self.form.last_name.clone(),
            },
            rx,
        ));
    }

    /// Start the federated Google signup.
    ///
    /// Bypasses field validation entirely. Returns the consent URL the
    /// view should open in the system browser; `None` means the loopback
    /// listener could not be set up and the error banner is already set.
    pub fn handle_google_signup(&mut self) -> Option<String> {
        let signin = match GoogleSignIn::start(&self.config) {
            Ok(signin) => signin,
            Err(e) => {
                self.debug_logger
                    .error_ctx(DebugCategory::Network, "Google sign-in setup failed", e);
                self.auth_state
                    .set_error(auth::MSG_GOOGLE_SIGNUP_FAILED.to_string());
                return None;
            }
        };

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let auth_url = signin.auth_url().to_string();
        let redirect_uri = signin.redirect_uri().to_string();
        self.debug_logger.debug(
            DebugCategory::Network,
            format!("consent page: {}", auth_url),
        );
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = signin
                .wait_for_callback()
                .and_then(|code| auth::sign_in_with_google(&config, redirect_uri, code));
            let _ = tx.send(result);
        });

        self.auth_result = Some((SignupFlow::Google, rx));
        Some(auth_url)
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::new();
        self.form = SignupForm::default();
        self.current_view = AppView::Signup;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::validation::{
        MSG_ACCEPT_TERMS, MSG_FILL_ALL_FIELDS, MSG_INVALID_EMAIL, MSG_PASSWORDS_MISMATCH,
        MSG_WEAK_PASSWORD,
    };
    use crate::shared::config::AppConfig;
    use std::sync::Mutex;
    use std::time::Duration;

    // Serializes the tests that point CHEMCYCLE_DATA_DIR at a tempdir.
    static DATA_DIR_ENV: Mutex<()> = Mutex::new(());
    use tokio::runtime::Runtime;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_state(server_uri: &str) -> AppState {
        let config =
            Config::with_builder(AppConfig::builder().auth_url(server_uri.to_string())).unwrap();
        AppState::with_config(config)
    }

    fn fill_valid_form(state: &mut AppState) {
        state.form.first_name = "Иван".to_string();
        state.form.last_name = "Димитров".to_string();
        state.form.email = "ivan@example.com".to_string();
        state.form.password = "Abcdef12".to_string();
        state.form.confirm_password = "Abcdef12".to_string();
        state.form.agreed_to_terms = true;
    }

    fn wait_for_result(state: &mut AppState) {
        for _ in 0..400 {
            state.check_auth_result();
            if state.auth_result.is_none() {
                return;
            }
            std::thread::sleep(Duration::from_millis(25));
        }
        panic!("auth result did not arrive");
    }

    #[test]
    fn test_submit_blocked_on_empty_fields() {
        let mut state = test_state("http://127.0.0.1:1");
        state.handle_submit();

        assert_eq!(state.auth_state.error.as_deref(), Some(MSG_FILL_ALL_FIELDS));
        assert!(state.auth_result.is_none());
        assert!(!state.auth_state.loading);
    }

    #[test]
    fn test_submit_blocked_per_rule() {
        let cases: [(fn(&mut AppState), &str); 4] = [
            (
                |s| s.form.email = "ivan.example.com".to_string(),
                MSG_INVALID_EMAIL,
            ),
            (
                |s| {
                    s.form.password = "abcdefgh".to_string();
                    s.form.confirm_password = "abcdefgh".to_string();
                },
                MSG_WEAK_PASSWORD,
            ),
            (
                |s| s.form.confirm_password = "Abcdef13".to_string(),
                MSG_PASSWORDS_MISMATCH,
            ),
            (|s| s.form.agreed_to_terms = false, MSG_ACCEPT_TERMS),
        ];

        for (break_form, expected) in cases {
            let mut state = test_state("http://127.0.0.1:1");
            fill_valid_form(&mut state);
            break_form(&mut state);
            state.handle_submit();

            assert_eq!(state.auth_state.error.as_deref(), Some(expected));
            assert!(state.auth_result.is_none(), "no request may be sent");
        }
    }

    #[test]
    fn test_field_edit_clears_error() {
        let mut state = test_state("http://127.0.0.1:1");
        state.handle_submit();
        assert!(state.auth_state.error.is_some());

        state.note_field_edited();
        assert!(state.auth_state.error.is_none());
    }

    #[test]
    fn test_can_submit_gating() {
        let mut state = test_state("http://127.0.0.1:1");
        fill_valid_form(&mut state);
        assert!(state.can_submit());

        state.form.password = "abcdefgh".to_string();
        assert!(!state.can_submit(), "weak password disables the button");

        fill_valid_form(&mut state);
        state.form.agreed_to_terms = false;
        assert!(!state.can_submit());

        fill_valid_form(&mut state);
        state.auth_state.loading = true;
        assert!(!state.can_submit());
    }

    #[test]
    fn test_successful_signup_navigates_home() {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/v1/accounts:signUp"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "localId": "uid1",
                    "email": "ivan@example.com",
                    "idToken": "tok",
                })))
                .mount(&server)
                .await;
            server
        });

        let _env = DATA_DIR_ENV.lock().unwrap_or_else(|e| e.into_inner());
        let data_dir = tempfile::tempdir().unwrap();
        std::env::set_var("CHEMCYCLE_DATA_DIR", data_dir.path());

        let mut state = test_state(&server.uri());
        fill_valid_form(&mut state);
        state.handle_submit();
        assert!(state.auth_state.loading);
        assert!(state.auth_result.is_some());

        wait_for_result(&mut state);

        assert!(!state.auth_state.loading);
        assert!(state.auth_state.authenticated);
        assert_eq!(state.current_view, AppView::Home);
        assert_eq!(
            state.auth_state.user.as_ref().map(|u| u.uid.as_str()),
            Some("uid1")
        );
        // The form keeps its values after success.
        assert_eq!(state.form.email, "ivan@example.com");
        assert_eq!(state.form.first_name, "Иван");

        let record: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(data_dir.path().join("chemcycle_user.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(record["email"], "ivan@example.com");
        assert_eq!(record["firstName"], "Иван");
    }

    #[test]
    fn test_cached_names_snapshot_at_submit_time() {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/v1/accounts:signUp"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "localId": "uid2",
                    "email": "ivan@example.com",
                    "idToken": "tok",
                })))
                .mount(&server)
                .await;
            server
        });

        let _env = DATA_DIR_ENV.lock().unwrap_or_else(|e| e.into_inner());
        let data_dir = tempfile::tempdir().unwrap();
        std::env::set_var("CHEMCYCLE_DATA_DIR", data_dir.path());

        let mut state = test_state(&server.uri());
        fill_valid_form(&mut state);
        state.handle_submit();

        // Editing the name fields while the request is in flight must not
        // change what gets persisted.
        state.form.first_name = "Георги".to_string();
        state.form.last_name = "Петров".to_string();

        wait_for_result(&mut state);
        assert!(state.auth_state.authenticated);

        let record: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(data_dir.path().join("chemcycle_user.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(record["firstName"], "Иван");
        assert_eq!(record["lastName"], "Димитров");
    }

    #[test]
    fn test_rejected_signup_keeps_form_and_shows_message() {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/v1/accounts:signUp"))
                .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                    "error": { "code": 400, "message": "EMAIL_EXISTS" },
                })))
                .mount(&server)
                .await;
            server
        });

        let mut state = test_state(&server.uri());
        fill_valid_form(&mut state);
        state.handle_submit();
        wait_for_result(&mut state);

        assert!(!state.auth_state.loading);
        assert!(!state.auth_state.authenticated);
        assert_eq!(state.current_view, AppView::Signup);
        assert_eq!(state.auth_state.error.as_deref(), Some("EMAIL_EXISTS"));
        assert_eq!(state.form.password, "Abcdef12", "fields are not cleared");
    }

    #[test]
    fn test_google_signup_sets_loading_and_returns_url() {
        let mut state = test_state("http://127.0.0.1:1");
        state.config.set_google_client("cid".to_string(), "cs".to_string());

        let url = state.handle_google_signup().expect("consent url");
        assert!(url.contains("client_id"));
        assert!(state.auth_state.loading);
        assert!(matches!(
            state.auth_result,
            Some((SignupFlow::Google, _))
        ));
    }

    #[test]
    fn test_logout_resets_to_signup() {
        let mut state = test_state("http://127.0.0.1:1");
        fill_valid_form(&mut state);
        state.auth_state.authenticated = true;
        state.current_view = AppView::Home;

        state.logout();

        assert_eq!(state.current_view, AppView::Signup);
        assert!(!state.auth_state.authenticated);
        assert!(state.form.email.is_empty());
    }
}
