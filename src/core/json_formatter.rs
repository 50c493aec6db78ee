//! JSON formatter for log entries
//!
//! Each entry becomes one JSON object on one line:
//!
//! ```text
//! {"fields.level":"debug","level":"info","msg":"started","time":"2024-01-01T00:00:00Z"}
//! ```
//!
//! `time`, `msg` and `level` are always written by the formatter. A user field
//! with one of those keys is kept under `fields.<key>` instead of being
//! dropped.

use super::error::{LoggerError, Result};
use super::fields::{prefix_field_clashes, RESERVED_KEYS};
use super::formatter::Formatter;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

static DEFAULT_TIMESTAMP_FORMAT: TimestampFormat = TimestampFormat::Rfc3339;

/// Configuration for [`JsonFormatter`]
///
/// Deserializable so it can live in an application's config file. An empty
/// or missing `timestamp_format` selects RFC 3339.
///
/// # Examples
///
/// ```
/// use json_log_formatter::core::{FormatterConfig, JsonFormatter};
///
/// let config: FormatterConfig =
///     serde_json::from_str(r#"{"timestamp_format":"%Y-%m-%d %H:%M:%S"}"#).unwrap();
/// let formatter = JsonFormatter::from_config(&config).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// strftime layout for the `time` key
    pub timestamp_format: String,
}

impl FormatterConfig {
    /// Create a new formatter configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp layout
    #[must_use]
    pub fn with_timestamp_format(mut self, layout: impl Into<String>) -> Self {
        self.timestamp_format = layout.into();
        self
    }
}

/// Renders entries as newline-terminated JSON objects
///
/// Holds no state besides its timestamp format, so one instance can be shared
/// across threads (for example behind an `Arc`) and used concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonFormatter {
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp format
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a strftime layout; an empty layout keeps the default
    #[must_use]
    pub fn with_layout(self, layout: &str) -> Self {
        self.with_timestamp_format(TimestampFormat::from_layout(layout))
    }

    /// Build a formatter from configuration, rejecting unusable layouts
    pub fn from_config(config: &FormatterConfig) -> Result<Self> {
        let format = TimestampFormat::from_layout(&config.timestamp_format);
        format.validate()?;
        Ok(Self::new().with_timestamp_format(format))
    }

    /// The timestamp format entries are actually rendered with
    pub fn timestamp_format(&self) -> &TimestampFormat {
        match &self.timestamp_format {
            TimestampFormat::Custom(layout) if layout.is_empty() => &DEFAULT_TIMESTAMP_FORMAT,
            format => format,
        }
    }

    /// Assemble the output record without serializing it
    ///
    /// Keys are ordered, so serialized output is byte-for-byte deterministic.
    pub fn to_record(&self, entry: &LogEntry) -> Result<BTreeMap<String, Value>> {
        let mut fields = entry.fields.clone();
        prefix_field_clashes(&mut fields, &RESERVED_KEYS);

        let mut record = BTreeMap::new();
        record.insert(
            "time".to_string(),
            Value::String(self.timestamp_format().format(&entry.timestamp)?),
        );
        record.insert("msg".to_string(), Value::String(entry.message.clone()));
        record.insert(
            "level".to_string(),
            Value::String(entry.level.to_str().to_string()),
        );

        for field in fields {
            let value = field.value.to_json_value().map_err(|e| match e {
                LoggerError::FormatterError { message, source, .. } => {
                    LoggerError::FormatterError {
                        format_type: "JSON".to_string(),
                        message: format!("field '{}': {}", field.key, message),
                        source,
                    }
                }
                other => other,
            })?;
            record.insert(field.key, value);
        }

        Ok(record)
    }

    /// Same output as [`Formatter::format`], as a `String`
    pub fn format_to_string(&self, entry: &LogEntry) -> Result<String> {
        let bytes = self.format(entry)?;
        String::from_utf8(bytes).map_err(|e| {
            LoggerError::formatter_with_source("JSON", "output is not valid UTF-8", e)
        })
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &LogEntry) -> Result<Vec<u8>> {
        let record = self.to_record(entry)?;

        let mut serialized = serde_json::to_vec(&record).map_err(|e| {
            LoggerError::formatter_with_source("JSON", "failed to marshal fields to JSON", e)
        })?;
        serialized.push(b'\n');
        Ok(serialized)
    }

    fn name(&self) -> &str {
        "json"
    }
}
