//! Log entry structure

use super::error_detail::ErrorDetail;
use super::log_level::LogLevel;
use super::timestamp::format_timestamp;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag used when the caller does not supply one
pub const DEFAULT_TAG: &str = "tag";

/// Message used when the caller does not supply one
pub const DEFAULT_MESSAGE: &str = "message";

/// Line terminator appended to every formatted entry
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// One log event, produced fresh per call and never retained by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<FixedOffset>,
    pub tag: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl LogEntry {
    /// Sanitize text to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so one entry always occupies exactly one line.
    fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        level: LogLevel,
        timestamp: DateTime<FixedOffset>,
        tag: &str,
        message: &str,
    ) -> Self {
        Self {
            level,
            timestamp,
            tag: Self::sanitize(tag),
            message: Self::sanitize(message),
            error: None,
        }
    }

    pub fn with_error(mut self, error: Option<&ErrorDetail>) -> Self {
        self.error = error.map(|detail| ErrorDetail {
            message: detail.message.as_deref().map(Self::sanitize),
            stack_trace: detail.stack_trace.as_deref().map(Self::sanitize),
        });
        self
    }

    /// Formatted line including the trailing line terminator
    #[must_use]
    pub fn format(&self) -> String {
        format!("{}{}", self, LINE_ENDING)
    }
}

impl fmt::Display for LogEntry {
    /// Single line without terminator:
    /// `{LEVEL} {yyyy-MM-dd HH:mm:ss.fff} {tag} {message}` followed by
    /// ` EXCEPTION: {message} STACK TRACE: {stack trace}` when an error is attached.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.level,
            format_timestamp(&self.timestamp),
            self.tag,
            self.message
        )?;

        if let Some(ref error) = self.error {
            write!(
                f,
                " EXCEPTION: {} STACK TRACE: {}",
                error.message_str(),
                error.stack_trace_str()
            )?;
        }

        Ok(())
    }
}
