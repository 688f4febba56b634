//! Logger configuration
//!
//! A [`LoggerConfiguration`] is replaced as a whole; there are no per-field
//! setters on a live logger. Two default states exist:
//!
//! - [`LoggerConfiguration::default`] is what a logger starts with
//!   (1000 KB size limit).
//! - [`LoggerConfiguration::configure_defaults`] is what a configure call
//!   without overrides applies (100 KB size limit).
//!
//! `max_log_files_count` and `max_log_file_size_kb` are stored for backends;
//! the core never acts on them.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::LogTimeOption;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LOG_FILE_NAME: &str = "app.log";
pub const DEFAULT_MAX_LOG_FILES_COUNT: u32 = 3;
/// Size limit a freshly created logger starts with
pub const INITIAL_MAX_LOG_FILE_SIZE_KB: u64 = 1000;
/// Size limit applied by a configure call that does not override it
pub const CONFIGURE_MAX_LOG_FILE_SIZE_KB: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "LoggerConfiguration::configure_defaults", deny_unknown_fields)]
pub struct LoggerConfiguration {
    pub time_option: LogTimeOption,
    pub log_file_name: String,
    pub max_log_files_count: u32,
    pub max_log_file_size_kb: u64,
    pub level: LogLevel,
    pub log_to_console: bool,
}

impl Default for LoggerConfiguration {
    fn default() -> Self {
        Self {
            max_log_file_size_kb: INITIAL_MAX_LOG_FILE_SIZE_KB,
            ..Self::configure_defaults()
        }
    }
}

impl LoggerConfiguration {
    /// Configuration applied by a configure call with no overrides
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_base::{LoggerConfiguration, LogLevel};
    ///
    /// let config = LoggerConfiguration::configure_defaults()
    ///     .with_level(LogLevel::Error)
    ///     .with_log_file_name("service.log");
    /// assert_eq!(config.max_log_file_size_kb, 100);
    /// ```
    #[must_use]
    pub fn configure_defaults() -> Self {
        Self {
            time_option: LogTimeOption::LocalTime,
            log_file_name: DEFAULT_LOG_FILE_NAME.to_string(),
            max_log_files_count: DEFAULT_MAX_LOG_FILES_COUNT,
            max_log_file_size_kb: CONFIGURE_MAX_LOG_FILE_SIZE_KB,
            level: LogLevel::Warn,
            log_to_console: false,
        }
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_time_option(mut self, time_option: LogTimeOption) -> Self {
        self.time_option = time_option;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_log_file_name(mut self, name: impl Into<String>) -> Self {
        self.log_file_name = name.into();
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_log_files_count(mut self, count: u32) -> Self {
        self.max_log_files_count = count;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_log_file_size_kb(mut self, size_kb: u64) -> Self {
        self.max_log_file_size_kb = size_kb;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_log_to_console(mut self, enabled: bool) -> Self {
        self.log_to_console = enabled;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Missing fields take the configure defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::JsonError`] for malformed input.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or
    /// [`LoggerError::InvalidConfiguration`] if it does not parse.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("Failed to read '{}'", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&text)
            .map_err(|e| LoggerError::config(path.display().to_string(), e.to_string()))
    }

    /// Whether `level` meets the configured minimum
    #[inline]
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    /// Rotation threshold in bytes
    #[must_use]
    pub fn max_log_file_size_bytes(&self) -> u64 {
        self.max_log_file_size_kb.saturating_mul(1024)
    }
}
