//! Error types for the logger base

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Boxed error raised by a backend's unit of work
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A required argument was missing or unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A backend does not provide this capability
    #[error("Operation '{operation}' is not implemented by this logger")]
    NotImplemented { operation: String },

    /// Failure raised by a backend, passed through unchanged
    #[error(transparent)]
    Backend(BackendError),

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LoggerError::InvalidArgument(msg.into())
    }

    /// Create a not-implemented error for the named operation
    pub fn not_implemented(operation: impl Into<String>) -> Self {
        LoggerError::NotImplemented {
            operation: operation.into(),
        }
    }

    /// Wrap an arbitrary backend failure
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<BackendError>,
    {
        LoggerError::Backend(err.into())
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Whether this error signals a missing backend capability
    #[must_use]
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, LoggerError::NotImplemented { .. })
    }
}
