//! Optional failure payload attached to a log entry

use serde::{Deserialize, Serialize};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;

/// Message and stack trace of a failure being logged.
///
/// Either part may be absent; a missing part renders as an empty string in
/// the formatted entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: Option<String>,
    pub stack_trace: Option<String>,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            stack_trace: None,
        }
    }

    #[must_use]
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// Build a detail from any error value.
    ///
    /// The stack trace is a captured backtrace when `RUST_BACKTRACE` enables
    /// capture; otherwise it is the chain of `source()` errors, if any.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let backtrace = Backtrace::capture();
        let stack_trace = if backtrace.status() == BacktraceStatus::Captured {
            Some(backtrace.to_string())
        } else {
            Self::source_chain(err)
        };

        Self {
            message: Some(err.to_string()),
            stack_trace,
        }
    }

    fn source_chain(err: &(dyn Error + 'static)) -> Option<String> {
        let mut causes = Vec::new();
        let mut current = err.source();
        while let Some(cause) = current {
            causes.push(format!("caused by: {}", cause));
            current = cause.source();
        }

        if causes.is_empty() {
            None
        } else {
            Some(causes.join(" "))
        }
    }

    pub fn message_str(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    pub fn stack_trace_str(&self) -> &str {
        self.stack_trace.as_deref().unwrap_or("")
    }
}

impl From<&str> for ErrorDetail {
    fn from(message: &str) -> Self {
        ErrorDetail::new(message)
    }
}

impl From<String> for ErrorDetail {
    fn from(message: String) -> Self {
        ErrorDetail::new(message)
    }
}
