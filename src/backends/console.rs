//! Console backend

use crate::core::{LogEntry, LogLevel, Logger, LoggerConfiguration, LoggerCore, LoggerError, Result};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

/// Writes formatted entries to the terminal.
///
/// Error and Fatal go to stderr, everything else to stdout. The console
/// keeps nothing, so the storage operations are not available.
pub struct ConsoleLogger {
    core: LoggerCore,
    use_colors: bool,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            core: LoggerCore::new(),
            use_colors: true,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            core: LoggerCore::new(),
            use_colors,
        }
    }

    /// Start from `config` instead of the initial configuration
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_base::backends::ConsoleLogger;
    /// use rust_logger_base::{Logger, LoggerConfiguration, LogLevel};
    ///
    /// let logger = ConsoleLogger::new()
    ///     .with_configuration(LoggerConfiguration::configure_defaults().with_level(LogLevel::Info));
    /// assert_eq!(logger.log_level(), LogLevel::Info);
    /// ```
    #[must_use]
    pub fn with_configuration(self, config: LoggerConfiguration) -> Self {
        self.core.configure(config);
        self
    }

    /// Color the leading level name of a formatted entry
    fn colorize(&self, level: LogLevel, formatted: &str) -> String {
        if !self.use_colors {
            return formatted.to_string();
        }

        match formatted.strip_prefix(level.to_str()) {
            Some(rest) => format!("{}{}", level.to_str().color(level.color_code()), rest),
            None => formatted.to_string(),
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for ConsoleLogger {
    fn core(&self) -> &LoggerCore {
        &self.core
    }

    fn write_entry(&self, entry: &LogEntry, formatted: &str) -> Result<()> {
        let output = self.colorize(entry.level, formatted);

        self.core.locked_invoke(|| {
            // Route Error and Fatal levels to stderr, others to stdout
            match entry.level {
                LogLevel::Error | LogLevel::Fatal => {
                    let mut stderr = std::io::stderr().lock();
                    stderr.write_all(output.as_bytes())?;
                    stderr.flush()?;
                }
                _ => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(output.as_bytes())?;
                    stdout.flush()?;
                }
            }
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
