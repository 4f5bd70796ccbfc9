//! Timestamp pattern for log file entries.
//!
//! The pattern is a strftime-compatible string, bounded in length and
//! validated at construction so that formatting the current local time
//! can never fail afterwards.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hard cap on the character length of a time format pattern.
pub const TIME_FORMAT_MAX_LEN: usize = 50;

/// Default pattern used until the host configures another one.
const DEFAULT_PATTERN: &str = "%H:%M:%S %d-%m-%Y";

/// A validated strftime-style pattern for log file timestamps.
///
/// # Examples
///
/// ```
/// use message_logger::core::TimeFormat;
///
/// let format = TimeFormat::new("%Y-%m-%d %H:%M").unwrap();
/// assert_eq!(format.as_str(), "%Y-%m-%d %H:%M");
///
/// assert!(TimeFormat::new("%Q").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeFormat(String);

impl TimeFormat {
    /// Validate and store a pattern.
    ///
    /// Rejects patterns longer than [`TIME_FORMAT_MAX_LEN`] characters and
    /// patterns `chrono` cannot parse, without mutating anything.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();

        if pattern.chars().count() > TIME_FORMAT_MAX_LEN {
            return Err(LoggerError::invalid_argument(
                "time format",
                format!("pattern exceeds {} characters", TIME_FORMAT_MAX_LEN),
            ));
        }

        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::invalid_argument(
                "time format",
                format!("'{}' is not a valid strftime pattern", pattern),
            ));
        }

        Ok(Self(pattern))
    }

    /// The stored pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Format the current local time with the stored pattern.
    #[must_use]
    pub fn format_now(&self) -> String {
        Local::now().format(&self.0).to_string()
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self(DEFAULT_PATTERN.to_string())
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TimeFormat {
    type Error = LoggerError;

    fn try_from(pattern: String) -> Result<Self> {
        Self::new(pattern)
    }
}

impl From<TimeFormat> for String {
    fn from(format: TimeFormat) -> String {
        format.0
    }
}
