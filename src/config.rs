//! Configuration Module
//!
//! Handles loading and managing client-core configuration from environment
//! variables.

use std::env;
use std::path::PathBuf;

use crate::cache::{DEFAULT_CLEANUP_INTERVAL_SECS, DEFAULT_TTL_SECS};

/// Client core configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds for cache entries without explicit TTL
    pub default_ttl: u64,
    /// Background cleanup sweep interval in seconds
    pub cleanup_interval: u64,
    /// Root directory for the file-backed storage backend
    pub storage_dir: PathBuf,
    /// Maximum number of retained search-history entries
    pub search_history_limit: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default cache TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 300)
    /// - `STORAGE_DIR` - File backend root directory (default: shella_data)
    /// - `SEARCH_HISTORY_LIMIT` - Retained search terms (default: 10)
    pub fn from_env() -> Self {
        Self {
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CLEANUP_INTERVAL_SECS),
            storage_dir: env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("shella_data")),
            search_history_limit: env::var("SEARCH_HISTORY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL_SECS,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL_SECS,
            storage_dir: PathBuf::from("shella_data"),
            search_history_limit: 10,
        }
    }
}
