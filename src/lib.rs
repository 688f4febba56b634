//! # Rust Logger Base
//!
//! A reusable base for pluggable application loggers. The shared core
//! handles configuration, level filtering, entry formatting and serialized
//! write access; concrete backends only supply persistence, enumeration and
//! purge.
//!
//! ## Features
//!
//! - **One Capability Trait**: implement [`Logger`] and get the per-severity
//!   helpers, filtering and formatting for free
//! - **Serialized Writes**: [`SerializedInvoker`] keeps concurrent writers
//!   from interleaving on a shared target
//! - **Deterministic Format**: `{Level} {yyyy-MM-dd HH:mm:ss.fff} {tag} {message}`
//! - **Reference Backends**: memory, console and size-rotated file
//!
//! ## Example
//!
//! ```
//! use rust_logger_base::prelude::*;
//!
//! let logger = MemoryLogger::new();
//! logger.configure(LoggerConfiguration::configure_defaults().with_level(LogLevel::Info));
//!
//! logger.debug("app", "filtered out").unwrap();
//! logger.info("app", "started").unwrap();
//!
//! let entries = logger.get_all(true).unwrap();
//! assert_eq!(entries.len(), 1);
//! assert!(entries[0].starts_with("Info "));
//! ```

pub mod backends;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::backends::ConsoleLogger;
    #[cfg(feature = "file")]
    pub use crate::backends::FileLogger;
    pub use crate::backends::MemoryLogger;
    pub use crate::core::{
        ErrorDetail, LogEntry, LogLevel, LogTimeOption, Logger, LoggerConfiguration, LoggerCore,
        LoggerError, Result, SerializedInvoker, SharedLogger,
    };
}

pub use crate::backends::MemoryLogger;
pub use crate::core::{
    BackendError, ErrorDetail, LogEntry, LogLevel, LogTimeOption, Logger, LoggerConfiguration,
    LoggerCore, LoggerError, Result, SerializedInvoker, SharedLogger,
};
