use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugLevel::Debug => write!(f, "DEBUG"),
            DebugLevel::Info => write!(f, "INFO"),
            DebugLevel::Warn => write!(f, "WARN"),
            DebugLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugCategory {
    Network,
    Auth,
    Storage,
    Validation,
    UI,
    Other,
}

impl fmt::Display for DebugCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugCategory::Network => write!(f, "NET"),
            DebugCategory::Auth => write!(f, "AUTH"),
            DebugCategory::Storage => write!(f, "STORE"),
            DebugCategory::Validation => write!(f, "VALID"),
            DebugCategory::UI => write!(f, "UI"),
            DebugCategory::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Clone)]
pub struct DebugEntry {
    pub timestamp: String,
    pub level: DebugLevel,
    pub category: DebugCategory,
    pub message: String,
    pub context: Option<String>,
}

impl fmt::Display for DebugEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let context_str = self
            .context
            .as_ref()
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();
        write!(
            f,
            "{} [{}] {} {}{}",
            self.timestamp, self.level, self.category, self.message, context_str
        )
    }
}

/// In-app diagnostic log shown by the debug console view.
///
/// A bounded ring buffer behind a mutex; worker threads hold clones and
/// log from wherever the auth flow happens to run.
pub struct DebugLogger {
    entries: Arc<Mutex<Vec<DebugEntry>>>,
    max_entries: usize,
}

impl DebugLogger {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            max_entries,
        }
    }

    fn get_timestamp() -> String {
        use std::time::UNIX_EPOCH;
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let secs = duration.as_secs();
        let millis = duration.subsec_millis();
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            (secs / 3600) % 24,
            (secs / 60) % 60,
            secs % 60,
            millis
        )
    }

    pub fn log(
        &self,
        level: DebugLevel,
        category: DebugCategory,
        message: impl Into<String>,
        context: Option<String>,
    ) {
        let entry = DebugEntry {
            timestamp: Self::get_timestamp(),
            level,
            category,
            message: message.into(),
            context,
        };

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
            if entries.len() > self.max_entries {
                entries.remove(0);
            }
        }
    }

    pub fn debug(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Debug, category, msg, None);
    }

    pub fn info(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Info, category, msg, None);
    }

    pub fn warn(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Warn, category, msg, None);
    }

    pub fn error(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Error, category, msg, None);
    }

    pub fn error_ctx(
        &self,
        category: DebugCategory,
        msg: impl Into<String>,
        ctx: impl Into<String>,
    ) {
        self.log(DebugLevel::Error, category, msg, Some(ctx.into()));
    }

    pub fn get_entries(&self) -> Vec<DebugEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn get_entries_by_category(&self, category: DebugCategory) -> Vec<DebugEntry> {
        self.entries
            .lock()
            .map(|e| {
                e.iter()
                    .filter(|entry| entry.category == category)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get_entries_by_level(&self, level: DebugLevel) -> Vec<DebugEntry> {
        self.entries
            .lock()
            .map(|e| {
                e.iter()
                    .filter(|entry| entry.level == level)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }
}

impl Clone for DebugLogger {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            max_entries: self.max_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_caps_entries() {
        let logger = DebugLogger::new(3);
        for i in 0..5 {
            logger.info(DebugCategory::Other, format!("entry {}", i));
        }
        let entries = logger.get_entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "entry 2");
    }

    #[test]
    fn test_filter_by_category() {
        let logger = DebugLogger::new(10);
        logger.info(DebugCategory::Auth, "signup ok");
        logger.warn(DebugCategory::Storage, "cache write failed");
        let auth = logger.get_entries_by_category(DebugCategory::Auth);
        assert_eq!(auth.len(), 1);
        assert_eq!(auth[0].message, "signup ok");
    }

    #[test]
    fn test_filter_by_level() {
        let logger = DebugLogger::new(10);
        logger.debug(DebugCategory::Network, "consent page: http://localhost");
        logger.info(DebugCategory::Auth, "signup ok");
        logger.error(DebugCategory::Network, "timeout");
        let errors = logger.get_entries_by_level(DebugLevel::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "timeout");
        let debug = logger.get_entries_by_level(DebugLevel::Debug);
        assert_eq!(debug.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let logger = DebugLogger::new(10);
        let clone = logger.clone();
        clone.error(DebugCategory::Network, "timeout");
        assert_eq!(logger.count(), 1);
    }
}
