//! Clock selection and timestamp rendering
//!
//! Entries are stamped either with local wall-clock time or with UTC,
//! depending on the configured [`LogTimeOption`]. Both are carried as a
//! `DateTime<FixedOffset>` so the clock source stays visible in the value.

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// strftime pattern for `yyyy-MM-dd HH:mm:ss.fff`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Clock source used to stamp log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogTimeOption {
    /// Local wall-clock time (default)
    #[default]
    LocalTime,
    /// Coordinated Universal Time
    UtcTime,
}

impl LogTimeOption {
    /// Read the current time from the selected clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logger_base::LogTimeOption;
    ///
    /// let now = LogTimeOption::UtcTime.now();
    /// assert_eq!(now.offset().local_minus_utc(), 0);
    /// ```
    #[must_use]
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            LogTimeOption::LocalTime => Local::now().fixed_offset(),
            LogTimeOption::UtcTime => Utc::now().fixed_offset(),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogTimeOption::LocalTime => "LocalTime",
            LogTimeOption::UtcTime => "UtcTime",
        }
    }
}

impl fmt::Display for LogTimeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogTimeOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "localtime" => Ok(LogTimeOption::LocalTime),
            "utc" | "utctime" => Ok(LogTimeOption::UtcTime),
            _ => Err(format!("Invalid time option: '{}'", s)),
        }
    }
}

/// Render a timestamp as `yyyy-MM-dd HH:mm:ss.fff`
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
