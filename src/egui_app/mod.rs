//! egui Native Desktop App Module
//!
//! Native desktop registration client built with egui/eframe. It talks to
//! the external identity provider over HTTPS and never runs a server of
//! its own.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (endpoints, API key)
//! - **`auth`** - Authentication state and provider HTTP client
//! - **`google`** - Loopback-redirect federated sign-in flow
//! - **`validation`** - Password requirements and the pre-submit chain
//! - **`session_cache`** - Best-effort local session record
//! - **`types`** - Shared types, form state, and wire DTOs
//! - **`state`** - Central application state and the signup controller
//! - **`views`** - Signup form, home screen, debug console
//! - **`theme`** - ChemCycle colors and frame styles
//! - **`main`** - Main application entry point (binary)

pub mod auth;
pub mod config;
pub mod debug;
pub mod google;
pub mod session_cache;
pub mod state;
pub mod theme;
pub mod types;
pub mod validation;
pub mod views;

// Re-export commonly used types
pub use auth::{create_account, sign_in_with_google, AuthState};
pub use config::Config;
pub use debug::{DebugCategory, DebugLevel, DebugLogger};
pub use google::GoogleSignIn;
pub use session_cache::StoredUser;
pub use state::AppState;
pub use types::{AccountInfo, AppView, SignupFlow, SignupForm};
