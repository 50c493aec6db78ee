//! Timestamp formatting for the `time` key
//!
//! Provides the configurable layout used to render an entry's timestamp.
//! Every variant renders to a string; custom strftime layouts are checked at
//! render time and report a formatter error instead of panicking.

use super::error::{LoggerError, Result};
use chrono::format::StrftimeItems;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp layout options
///
/// # Examples
///
/// ```
/// use json_log_formatter::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&time).unwrap(), "2024-01-01T00:00:00Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with second precision: `2024-01-01T00:00:00Z`
    ///
    /// This is the default format. It round-trips through any RFC 3339 parser.
    #[default]
    Rfc3339,

    /// RFC 3339 with milliseconds: `2024-01-01T00:00:00.123Z`
    Rfc3339Millis,

    /// RFC 3339 with microseconds: `2024-01-01T00:00:00.123456Z`
    Rfc3339Micros,

    /// Unix timestamp in seconds, as a string: `"1704067200"`
    Unix,

    /// Unix timestamp in milliseconds, as a string: `"1704067200123"`
    UnixMillis,

    /// Custom strftime layout
    ///
    /// # Examples
    ///
    /// ```
    /// use json_log_formatter::core::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Build a format from a configured layout string
    ///
    /// An empty layout selects the default.
    #[must_use]
    pub fn from_layout(layout: &str) -> Self {
        if layout.is_empty() {
            TimestampFormat::default()
        } else {
            TimestampFormat::Custom(layout.to_string())
        }
    }

    /// Format a `DateTime` according to this format
    ///
    /// Only `Custom` layouts can fail, when they contain an unknown specifier.
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let rendered = match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3339Millis => {
                datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
            }
            TimestampFormat::Rfc3339Micros => {
                datetime.to_rfc3339_opts(SecondsFormat::Micros, true)
            }
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(layout) => {
                let mut out = String::with_capacity(layout.len() + 16);
                write!(
                    out,
                    "{}",
                    datetime.format_with_items(StrftimeItems::new(layout))
                )
                .map_err(|e| {
                    LoggerError::formatter_with_source(
                        "JSON",
                        format!("invalid timestamp layout '{}'", layout),
                        e,
                    )
                })?;
                out
            }
        };
        Ok(rendered)
    }

    /// Check that this format can render a timestamp
    pub fn validate(&self) -> Result<()> {
        self.format(&DateTime::<Utc>::default())
            .map(|_| ())
            .map_err(|_| LoggerError::config("TimestampFormat", self.description()))
    }

    /// Get a description of this format
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            TimestampFormat::Rfc3339 => "RFC 3339 (2024-01-01T00:00:00Z)".to_string(),
            TimestampFormat::Rfc3339Millis => {
                "RFC 3339 with milliseconds (2024-01-01T00:00:00.123Z)".to_string()
            }
            TimestampFormat::Rfc3339Micros => {
                "RFC 3339 with microseconds (2024-01-01T00:00:00.123456Z)".to_string()
            }
            TimestampFormat::Unix => "Unix timestamp in seconds (1704067200)".to_string(),
            TimestampFormat::UnixMillis => {
                "Unix timestamp in milliseconds (1704067200123)".to_string()
            }
            TimestampFormat::Custom(layout) => format!("custom strftime layout '{}'", layout),
        }
    }
}

impl From<&str> for TimestampFormat {
    fn from(layout: &str) -> Self {
        TimestampFormat::from_layout(layout)
    }
}
