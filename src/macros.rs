//! Macros for building entries and field collections inline.
//!
//! # Examples
//!
//! ```
//! use json_log_formatter::prelude::*;
//! use json_log_formatter::{entry, fields};
//!
//! let port = 8080;
//! let entry = entry!(LogLevel::Info, "Server listening on port {}", port)
//!     .with_fields(fields! { "port" => 8080, "tls" => false });
//!
//! let line = JsonFormatter::new().format_to_string(&entry).unwrap();
//! assert!(line.contains("\"port\":8080"));
//! ```

/// Build a [`Fields`](crate::Fields) collection, keeping the written order.
///
/// Duplicate keys are kept as written.
///
/// # Examples
///
/// ```
/// use json_log_formatter::fields;
///
/// let fields = fields! { "user" => "alice", "attempt" => 3 };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.add_field($key, $value);
        )+
        fields
    }};
}

/// Create a [`LogEntry`](crate::LogEntry) with a `format!`-style message.
///
/// # Examples
///
/// ```
/// use json_log_formatter::{entry, LogLevel};
///
/// let entry = entry!(LogLevel::Error, "Error code: {}", 500);
/// assert_eq!(entry.message, "Error code: 500");
/// ```
#[macro_export]
macro_rules! entry {
    ($level:expr, $($arg:tt)+) => {
        $crate::LogEntry::new($level, format!($($arg)+))
    };
}
