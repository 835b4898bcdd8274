//! Local session cache
//!
//! Best-effort, write-only copy of the record the ChemCycle web client
//! keeps under its `chemcycle_user` localStorage key. The desktop app
//! writes the same JSON shape to the platform data directory so the two
//! clients stay format-compatible. Nothing in this crate reads it back;
//! it is a convenience cache, not a source of truth, and a failed write
//! never fails the signup.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::egui_app::types::AccountInfo;
use crate::shared::error::CacheError;

/// Storage key; the file name matches the web client's localStorage key
pub const STORAGE_KEY: &str = "chemcycle_user";

/// The persisted session record.
///
/// Field names serialize in camelCase to match the web client exactly;
/// the name fields are omitted entirely (not null) when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub email: String,
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// ISO-8601 signup timestamp
    pub signup_time: String,
}

impl StoredUser {
    /// Record for an email/password signup; names come from the form
    pub fn from_signup(account: &AccountInfo, first_name: &str, last_name: &str) -> Self {
        Self {
            email: account.email.clone(),
            uid: account.uid.clone(),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            signup_time: Utc::now().to_rfc3339(),
        }
    }

    /// Record for a federated signup; the provider supplies no names
    pub fn from_federated(account: &AccountInfo) -> Self {
        Self {
            email: account.email.clone(),
            uid: account.uid.clone(),
            first_name: None,
            last_name: None,
            signup_time: Utc::now().to_rfc3339(),
        }
    }
}

/// Write the record to the platform data directory.
///
/// `CHEMCYCLE_DATA_DIR` overrides the destination directory.
pub fn store(user: &StoredUser) -> Result<PathBuf, CacheError> {
    let dir = match std::env::var_os("CHEMCYCLE_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_dir()
            .ok_or(CacheError::NoDataDir)?
            .join("chemcycle"),
    };
    store_in(&dir, user)
}

fn store_in(dir: &Path, user: &StoredUser) -> Result<PathBuf, CacheError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", STORAGE_KEY));
    let body = serde_json::to_string_pretty(user)?;
    fs::write(&path, body)?;
    tracing::debug!(path = %path.display(), "session record written");
    Ok(path)
}
