//! Client configuration

use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Default employee REST API endpoint
pub const DEFAULT_BASE_URL: &str = "https://dummy.restapiexample.com/api/v1";

/// Delay before answering a list request from the local snapshot
pub const DEFAULT_LIST_FALLBACK_DELAY: Duration = Duration::from_millis(1000);

/// Delay before answering any other request from the local snapshot
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(500);

/// Client configuration
///
/// # Environment variables
///
/// | Variable                  | Default                                   | Meaning |
/// |---------------------------|-------------------------------------------|---------|
/// | `STAFF_API_BASE_URL`      | `https://dummy.restapiexample.com/api/v1` | REST API base |
/// | `STAFF_API_TIMEOUT_SECS`  | unset (no timeout)                        | request timeout |
/// | `STAFF_LIST_DELAY_MS`     | 1000                                      | list fallback delay |
/// | `STAFF_FALLBACK_DELAY_MS` | 500                                       | other fallback delays |
/// | `STAFF_DATA_DIR`          | unset (in-memory snapshot)                | snapshot directory |
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// REST API base URL
    pub base_url: String,
    /// Request timeout; `None` disables it
    pub timeout: Option<Duration>,
    /// Artificial delay before a list fallback
    pub list_fallback_delay: Duration,
    /// Artificial delay before get/create/update/delete fallbacks
    pub fallback_delay: Duration,
    /// Directory for the persisted snapshot; `None` keeps it in memory
    pub data_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            list_fallback_delay: DEFAULT_LIST_FALLBACK_DELAY,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
            data_dir: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let millis = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
        };

        let mut config = Self::new(
            lookup("STAFF_API_BASE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );
        config.timeout = lookup("STAFF_API_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        if let Some(delay) = millis("STAFF_LIST_DELAY_MS") {
            config.list_fallback_delay = delay;
        }
        if let Some(delay) = millis("STAFF_FALLBACK_DELAY_MS") {
            config.fallback_delay = delay;
        }
        config.data_dir = lookup("STAFF_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set both fallback delays
    pub fn with_fallback_delays(mut self, list: Duration, other: Duration) -> Self {
        self.list_fallback_delay = list;
        self.fallback_delay = other;
        self
    }

    /// Persist the snapshot under `dir`
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Build the key-value store this configuration asks for
    pub fn build_store(&self) -> Arc<dyn KeyValueStore> {
        match &self.data_dir {
            Some(dir) => Arc::new(FileStore::new(dir)),
            None => Arc::new(MemoryStore::new()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
