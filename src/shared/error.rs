//! Shared Error Types
//!
//! Error types for the session cache. The cache is a best-effort write of
//! a small JSON record; callers log these errors and move on, they never
//! block the signup flow.
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across
//! thread boundaries.
use thiserror::Error;

/// Errors from the local session cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// No platform data directory is available
    #[error("no data directory available on this platform")]
    NoDataDir,

    /// Filesystem error while writing the record
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("serialization error: {message}")]
    Serialization {
        /// Human-readable error message
        message: String,
    },
}

impl CacheError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error() {
        let error = CacheError::serialization("bad record");
        match error {
            CacheError::Serialization { message } => assert_eq!(message, "bad record"),
            _ => panic!("Expected Serialization"),
        }
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let cache_error: CacheError = result.unwrap_err().into();
        match cache_error {
            CacheError::Serialization { .. } => {}
            _ => panic!("Expected Serialization from serde error"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = CacheError::NoDataDir;
        assert!(format!("{}", error).contains("data directory"));
    }
}
