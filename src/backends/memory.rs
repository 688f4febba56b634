//! In-memory backend
//!
//! Keeps formatted entries in a vector. Useful in tests and for embedding
//! a log view in an application.

use crate::core::{LogEntry, Logger, LoggerConfiguration, LoggerCore, LoggerError, Result};
use parking_lot::Mutex;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct MemoryLogger {
    core: LoggerCore,
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configuration(config: LoggerConfiguration) -> Self {
        Self {
            core: LoggerCore::with_configuration(config),
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Logger for MemoryLogger {
    fn core(&self) -> &LoggerCore {
        &self.core
    }

    fn write_entry(&self, _entry: &LogEntry, formatted: &str) -> Result<()> {
        self.core.locked_invoke(|| {
            self.lines
                .lock()
                .push(formatted.trim_end_matches(['\r', '\n']).to_string());
            Ok(())
        })
    }

    fn local_storage_path(&self) -> Result<PathBuf> {
        Err(LoggerError::not_implemented("local_storage_path"))
    }

    fn get_all(&self, in_descending_order: bool) -> Result<Vec<String>> {
        self.core.locked_invoke(|| {
            let mut lines = self.lines.lock().clone();
            if in_descending_order {
                lines.reverse();
            }
            Ok(lines)
        })
    }

    fn purge(&self) -> Result<()> {
        self.core.locked_invoke(|| {
            self.lines.lock().clear();
            Ok(())
        })
    }
}
