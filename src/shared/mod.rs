//! Shared Module
//!
//! Types that are independent of the egui layer: application configuration
//! and the storage error types. Everything here is plain data, designed so
//! the auth client and the session cache can be tested without a UI.

/// Application configuration
pub mod config;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::CacheError;
