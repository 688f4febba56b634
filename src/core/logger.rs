//! Shared logger core and the capability set every backend provides
//!
//! [`LoggerCore`] owns the configuration, the entry formatter and the
//! serialized write gate. A backend embeds one and implements [`Logger`],
//! which supplies the actual persistence:
//!
//! - [`Logger::write_entry`]: persist or emit one formatted entry
//! - [`Logger::local_storage_path`]: where persisted entries live
//! - [`Logger::get_all`]: enumerate persisted entries (empty by default)
//! - [`Logger::purge`]: delete persisted entries
//!
//! Everything else (configuration, level filtering, formatting and the
//! per-severity helpers) is provided on top of those.

use super::{
    config::LoggerConfiguration,
    error::Result,
    error_detail::ErrorDetail,
    invoker::SerializedInvoker,
    log_entry::LogEntry,
    log_level::LogLevel,
    timestamp::LogTimeOption,
};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration, formatting and write serialization shared by all backends.
#[derive(Debug, Default)]
pub struct LoggerCore {
    config: RwLock<LoggerConfiguration>,
    invoker: SerializedInvoker,
}

impl LoggerCore {
    /// Create a core with the initial configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_configuration(config: LoggerConfiguration) -> Self {
        Self {
            config: RwLock::new(config),
            invoker: SerializedInvoker::new(),
        }
    }

    /// Replace the whole configuration.
    ///
    /// The swap happens under a write lock, so concurrent readers observe
    /// either the old or the new configuration, never a mix.
    pub fn configure(&self, config: LoggerConfiguration) {
        *self.config.write() = config;
    }

    /// Snapshot of the current configuration
    #[must_use]
    pub fn configuration(&self) -> LoggerConfiguration {
        self.config.read().clone()
    }

    #[must_use]
    pub fn log_file_name(&self) -> String {
        self.config.read().log_file_name.clone()
    }

    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.config.read().level
    }

    #[must_use]
    pub fn log_to_console(&self) -> bool {
        self.config.read().log_to_console
    }

    #[must_use]
    pub fn time_option(&self) -> LogTimeOption {
        self.config.read().time_option
    }

    #[must_use]
    pub fn max_log_files_count(&self) -> u32 {
        self.config.read().max_log_files_count
    }

    #[must_use]
    pub fn max_log_file_size_kb(&self) -> u64 {
        self.config.read().max_log_file_size_kb
    }

    /// Whether `level` meets the configured minimum
    #[inline]
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.config.read().is_enabled(level)
    }

    /// Build an entry stamped from the configured clock
    #[must_use]
    pub fn create_entry(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        error: Option<&ErrorDetail>,
    ) -> LogEntry {
        let timestamp = self.time_option().now();
        LogEntry::new(level, timestamp, tag, message).with_error(error)
    }

    /// Build an entry if `level` passes the filter.
    ///
    /// Level and clock are read under one lock, so a concurrent
    /// [`configure`](Self::configure) applies to the entry as a whole.
    #[must_use]
    pub fn entry_if_enabled(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        error: Option<&ErrorDetail>,
    ) -> Option<LogEntry> {
        let time_option = {
            let config = self.config.read();
            if !config.is_enabled(level) {
                return None;
            }
            config.time_option
        };

        Some(LogEntry::new(level, time_option.now(), tag, message).with_error(error))
    }

    /// Format one entry as a single line plus line terminator.
    ///
    /// Depends only on the arguments and the configured time option; it does
    /// no I/O and does not take the write gate.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_base::{ErrorDetail, LogLevel, LoggerCore};
    ///
    /// let core = LoggerCore::new();
    /// let line = core.format_message(LogLevel::Warn, "net", "retrying", None);
    /// assert!(line.starts_with("Warn "));
    /// assert!(line.trim_end().ends_with(" net retrying"));
    ///
    /// let detail = ErrorDetail::new("boom").with_stack_trace("at X");
    /// let line = core.format_message(LogLevel::Error, "t", "m", Some(&detail));
    /// assert!(line.contains("EXCEPTION: boom STACK TRACE: at X"));
    /// ```
    #[must_use]
    pub fn format_message(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        error: Option<&ErrorDetail>,
    ) -> String {
        self.create_entry(level, tag, message, error).format()
    }

    /// Run a backend write under this logger's gate.
    ///
    /// Not reentrant: calling back into `locked_invoke` from `action`
    /// deadlocks.
    ///
    /// # Errors
    ///
    /// Whatever `action` returns, after the gate has been released.
    pub fn locked_invoke<T, F>(&self, action: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        self.invoker.locked_invoke(action)
    }

    /// The write gate, for diagnostics
    #[must_use]
    pub fn invoker(&self) -> &SerializedInvoker {
        &self.invoker
    }
}

/// Capability set of a concrete logger backend.
///
/// Implementors supply [`core`](Logger::core), [`write_entry`](Logger::write_entry),
/// [`local_storage_path`](Logger::local_storage_path) and [`purge`](Logger::purge).
/// A backend without persisted storage returns
/// [`LoggerError::NotImplemented`](super::LoggerError::NotImplemented) from the
/// storage operations.
///
/// The provided [`log`](Logger::log) drops entries below the configured level
/// before formatting. Backends overriding `log` take over that filtering.
pub trait Logger: Send + Sync {
    /// Shared configuration and write gate
    fn core(&self) -> &LoggerCore;

    /// Persist or emit one entry that passed the level filter.
    ///
    /// `formatted` is `entry` rendered by the core, terminator included.
    fn write_entry(&self, entry: &LogEntry, formatted: &str) -> Result<()>;

    /// Directory where this backend keeps persisted entries
    fn local_storage_path(&self) -> Result<PathBuf>;

    /// All persisted entries, newest first when `in_descending_order` is set
    fn get_all(&self, in_descending_order: bool) -> Result<Vec<String>> {
        let _ = in_descending_order;
        Ok(Vec::new())
    }

    /// Delete all persisted entries
    fn purge(&self) -> Result<()>;

    /// Replace the whole configuration
    fn configure(&self, config: LoggerConfiguration) {
        self.core().configure(config);
    }

    fn log(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        error: Option<&ErrorDetail>,
    ) -> Result<()> {
        match self.core().entry_if_enabled(level, tag, message, error) {
            Some(entry) => {
                let formatted = entry.format();
                self.write_entry(&entry, &formatted)
            }
            None => Ok(()),
        }
    }

    #[inline]
    fn debug(&self, tag: &str, message: &str) -> Result<()> {
        self.log(LogLevel::Debug, tag, message, None)
    }

    #[inline]
    fn info(&self, tag: &str, message: &str) -> Result<()> {
        self.log(LogLevel::Info, tag, message, None)
    }

    #[inline]
    fn warn(&self, tag: &str, message: &str) -> Result<()> {
        self.log(LogLevel::Warn, tag, message, None)
    }

    #[inline]
    fn error(&self, tag: &str, message: &str) -> Result<()> {
        self.log(LogLevel::Error, tag, message, None)
    }

    #[inline]
    fn fatal(&self, tag: &str, message: &str) -> Result<()> {
        self.log(LogLevel::Fatal, tag, message, None)
    }

    fn debug_with_error(&self, tag: &str, message: &str, error: &ErrorDetail) -> Result<()> {
        self.log(LogLevel::Debug, tag, message, Some(error))
    }

    fn info_with_error(&self, tag: &str, message: &str, error: &ErrorDetail) -> Result<()> {
        self.log(LogLevel::Info, tag, message, Some(error))
    }

    fn warn_with_error(&self, tag: &str, message: &str, error: &ErrorDetail) -> Result<()> {
        self.log(LogLevel::Warn, tag, message, Some(error))
    }

    fn error_with_error(&self, tag: &str, message: &str, error: &ErrorDetail) -> Result<()> {
        self.log(LogLevel::Error, tag, message, Some(error))
    }

    fn fatal_with_error(&self, tag: &str, message: &str, error: &ErrorDetail) -> Result<()> {
        self.log(LogLevel::Fatal, tag, message, Some(error))
    }

    fn format_message(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        error: Option<&ErrorDetail>,
    ) -> String {
        self.core().format_message(level, tag, message, error)
    }

    fn log_file_name(&self) -> String {
        self.core().log_file_name()
    }

    fn log_level(&self) -> LogLevel {
        self.core().log_level()
    }

    fn log_to_console(&self) -> bool {
        self.core().log_to_console()
    }
}

/// A logger shared between threads
pub type SharedLogger = Arc<dyn Logger>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use parking_lot::Mutex;

    /// Backend recording formatted lines, with storage left unimplemented
    #[derive(Default)]
    struct Recording {
        core: LoggerCore,
        lines: Mutex<Vec<(LogLevel, String)>>,
    }

    impl Logger for Recording {
        fn core(&self) -> &LoggerCore {
            &self.core
        }

        fn write_entry(&self, entry: &LogEntry, formatted: &str) -> Result<()> {
            self.core.locked_invoke(|| {
                self.lines.lock().push((entry.level, formatted.to_string()));
                Ok(())
            })
        }

        fn local_storage_path(&self) -> Result<PathBuf> {
            Err(LoggerError::not_implemented("local_storage_path"))
        }

        fn purge(&self) -> Result<()> {
            Err(LoggerError::not_implemented("purge"))
        }
    }

    #[test]
    fn test_initial_configuration() {
        let logger = Recording::default();
        assert_eq!(logger.log_file_name(), "app.log");
        assert_eq!(logger.log_level(), LogLevel::Warn);
        assert!(!logger.log_to_console());
        assert_eq!(logger.core().max_log_files_count(), 3);
        assert_eq!(logger.core().max_log_file_size_kb(), 1000);
    }

    #[test]
    fn test_configure_replaces_everything() {
        let logger = Recording::default();
        logger.configure(
            LoggerConfiguration::configure_defaults().with_level(LogLevel::Error),
        );

        assert_eq!(logger.log_level(), LogLevel::Error);
        assert_eq!(logger.log_file_name(), "app.log");
        assert!(!logger.log_to_console());
        assert_eq!(logger.core().max_log_file_size_kb(), 100);
    }

    #[test]
    fn test_level_filter_is_centralized() {
        let logger = Recording::default();
        logger.debug("t", "dropped").expect("debug");
        logger.info("t", "dropped").expect("info");
        logger.warn("t", "kept").expect("warn");
        logger.error("t", "kept").expect("error");
        logger.fatal("t", "kept").expect("fatal");

        let levels: Vec<LogLevel> = logger.lines.lock().iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, vec![LogLevel::Warn, LogLevel::Error, LogLevel::Fatal]);
    }

    #[test]
    fn test_convenience_methods_use_fixed_severity() {
        let logger = Recording::default();
        logger.configure(
            LoggerConfiguration::configure_defaults().with_level(LogLevel::Debug),
        );
        let detail = ErrorDetail::new("boom");

        logger.debug_with_error("t", "m", &detail).expect("debug");
        logger.info_with_error("t", "m", &detail).expect("info");
        logger.warn_with_error("t", "m", &detail).expect("warn");
        logger.error_with_error("t", "m", &detail).expect("error");
        logger.fatal_with_error("t", "m", &detail).expect("fatal");

        let lines = logger.lines.lock();
        let levels: Vec<LogLevel> = lines.iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
        for (level, line) in lines.iter() {
            assert!(line.starts_with(level.to_str()));
            assert!(line.contains("EXCEPTION: boom STACK TRACE: "));
        }
    }

    #[test]
    fn test_storage_operations_unsupported() {
        let logger = Recording::default();
        assert!(logger.local_storage_path().unwrap_err().is_not_implemented());
        assert!(logger.purge().unwrap_err().is_not_implemented());
        assert!(logger.get_all(true).expect("default get_all").is_empty());
    }

    #[test]
    fn test_is_enabled_follows_configure() {
        let core = LoggerCore::new();
        assert!(!core.is_enabled(LogLevel::Info));
        assert!(core.is_enabled(LogLevel::Warn));

        core.configure(LoggerConfiguration::configure_defaults().with_level(LogLevel::Debug));
        assert!(LogLevel::ALL.iter().all(|&level| core.is_enabled(level)));

        core.configure(LoggerConfiguration::configure_defaults().with_level(LogLevel::Fatal));
        assert!(!core.is_enabled(LogLevel::Error));
        assert!(core.entry_if_enabled(LogLevel::Error, "t", "m", None).is_none());
        assert!(core.entry_if_enabled(LogLevel::Fatal, "t", "m", None).is_some());
    }

    #[test]
    fn test_format_ignores_level_filter() {
        let core = LoggerCore::new();
        core.configure(LoggerConfiguration::configure_defaults().with_level(LogLevel::Fatal));
        let line = core.format_message(LogLevel::Debug, "t", "m", None);
        assert!(line.starts_with("Debug "));
    }

    #[test]
    fn test_shared_logger_is_object_safe() {
        let logger: SharedLogger = Arc::new(Recording::default());
        logger.fatal("t", "through a trait object").expect("fatal");
        assert_eq!(logger.log_level(), LogLevel::Warn);
    }
}
