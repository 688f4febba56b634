//! Core logger types and traits

pub mod config;
pub mod error;
pub mod error_detail;
pub mod invoker;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use config::{
    LoggerConfiguration, CONFIGURE_MAX_LOG_FILE_SIZE_KB, DEFAULT_LOG_FILE_NAME,
    DEFAULT_MAX_LOG_FILES_COUNT, INITIAL_MAX_LOG_FILE_SIZE_KB,
};
pub use error::{BackendError, LoggerError, Result};
pub use error_detail::ErrorDetail;
pub use invoker::SerializedInvoker;
pub use log_entry::{LogEntry, DEFAULT_MESSAGE, DEFAULT_TAG, LINE_ENDING};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerCore, SharedLogger};
pub use timestamp::{format_timestamp, LogTimeOption, TIMESTAMP_FORMAT};
