//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to
//! the matching [`Logger`](crate::Logger) method and evaluates to its
//! `Result`.
//!
//! # Examples
//!
//! ```
//! use rust_logger_base::prelude::*;
//! use rust_logger_base::log_warn;
//!
//! let logger = MemoryLogger::new();
//!
//! let port = 8080;
//! log_warn!(logger, "server", "port {} already bound", port).unwrap();
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// Without a tag and message, the entry carries
/// [`DEFAULT_TAG`](crate::core::DEFAULT_TAG) and
/// [`DEFAULT_MESSAGE`](crate::core::DEFAULT_MESSAGE).
///
/// # Examples
///
/// ```
/// # use rust_logger_base::prelude::*;
/// # let logger = MemoryLogger::new();
/// use rust_logger_base::log_at;
/// log_at!(logger, LogLevel::Error, "http", "status {}", 500).unwrap();
/// log_at!(logger, LogLevel::Error).unwrap();
/// assert!(logger.get_all(true).unwrap()[0].ends_with(" tag message"));
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr) => {
        {
            use $crate::Logger as _;
            $logger.log(
                $level,
                $crate::core::DEFAULT_TAG,
                $crate::core::DEFAULT_MESSAGE,
                None,
            )
        }
    };
    ($logger:expr, $level:expr, $tag:expr, $($arg:tt)+) => {
        {
            use $crate::Logger as _;
            $logger.log($level, $tag, &format!($($arg)+), None)
        }
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr) => {
        $crate::log_at!($logger, $crate::LogLevel::Debug)
    };
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Debug, $tag, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! log_info {
    ($logger:expr) => {
        $crate::log_at!($logger, $crate::LogLevel::Info)
    };
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Info, $tag, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr) => {
        $crate::log_at!($logger, $crate::LogLevel::Warn)
    };
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Warn, $tag, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_base::prelude::*;
/// # let logger = MemoryLogger::new();
/// use rust_logger_base::log_error;
/// let code = 42;
/// log_error!(logger, "db", "query failed with code {}", code).unwrap();
/// assert_eq!(logger.len(), 1);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr) => {
        $crate::log_at!($logger, $crate::LogLevel::Error)
    };
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Error, $tag, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr) => {
        $crate::log_at!($logger, $crate::LogLevel::Fatal)
    };
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Fatal, $tag, $($arg)+)
    };
}
