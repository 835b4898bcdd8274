//! ChemCycle Registration Client - Main Library
//!
//! Native desktop client for the ChemCycle platform. It implements the
//! account-registration flow: collecting and validating user input,
//! creating accounts against the external identity provider (email and
//! password, or federated Google sign-in), caching a small session record
//! locally, and moving the user to the home view on success.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types independent of the UI layer
//!   - Application configuration (builder, TOML file, env overrides)
//!   - Session-cache error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Application state and the signup controller
//!   - Identity-provider HTTP client
//!   - Signup, home, and debug console views
//!
//! # Architecture
//!
//! The app is a single-threaded immediate-mode GUI. Network calls to the
//! identity provider run on short-lived worker threads; results come back
//! to the UI thread over `std::sync::mpsc` channels polled once per frame.
//! There is no server component in this crate: account storage, credential
//! hashing, and session issuance are all owned by the external provider.
//!
//! # Error Handling
//!
//! - `Result<T, E>` with `thiserror` enums for configuration and storage
//! - Provider failures are plain strings, surfaced verbatim in the UI
//!   with localized fallbacks

/// Shared configuration and error types
pub mod shared;

/// egui native desktop app
pub mod egui_app;
