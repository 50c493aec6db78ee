//! Core formatter types and traits

pub mod appender;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod json_formatter;
pub mod log_entry;
pub mod log_level;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use fields::{
    prefix_field_clashes, Field, FieldValue, Fields, FIELD_CLASH_PREFIX, RESERVED_KEYS,
};
pub use formatter::Formatter;
pub use json_formatter::{FormatterConfig, JsonFormatter};
pub use log_entry::{LogEntry, ERROR_KEY};
pub use log_level::LogLevel;
pub use timestamp::TimestampFormat;
