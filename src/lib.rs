//! # JSON Log Formatter
//!
//! Renders structured log entries as single-line JSON, ready for a stream or
//! file sink.
//!
//! ## Features
//!
//! - **Reserved keys**: `time`, `msg` and `level` are always written by the formatter
//! - **No data loss**: user fields named like a reserved key are kept as `fields.<key>`
//! - **Error values**: error fields are written as their message text
//! - **Thread Safe**: a formatter is immutable once configured and can be shared
//!
//! ```
//! use json_log_formatter::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! let entry = LogEntry::new(LogLevel::Info, "started")
//!     .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
//!     .with_field("level", "debug");
//!
//! let line = JsonFormatter::new().format_to_string(&entry).unwrap();
//! assert_eq!(
//!     line,
//!     "{\"fields.level\":\"debug\",\"level\":\"info\",\"msg\":\"started\",\"time\":\"2024-01-01T00:00:00Z\"}\n"
//! );
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::WriterAppender;
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::JsonAppender;
    pub use crate::core::{
        Appender, Field, FieldValue, Fields, Formatter, FormatterConfig, JsonFormatter, LogEntry,
        LogLevel, LoggerError, Result, TimestampFormat, RESERVED_KEYS,
    };
}

pub use crate::appenders::WriterAppender;
#[cfg(feature = "console")]
pub use crate::appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use crate::appenders::JsonAppender;
pub use crate::core::{
    prefix_field_clashes, Appender, Field, FieldValue, Fields, Formatter, FormatterConfig,
    JsonFormatter, LogEntry, LogLevel, LoggerError, Result, TimestampFormat, ERROR_KEY,
    FIELD_CLASH_PREFIX, RESERVED_KEYS,
};
