//! Console appender implementation

use crate::core::{Appender, Formatter, JsonFormatter, LogEntry, Result, TimestampFormat};
use std::io::Write;
use std::sync::Arc;

/// Writes JSON lines to stdout, or to stderr for `error` and `fatal` entries
pub struct ConsoleAppender {
    formatter: Arc<dyn Formatter>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            formatter: Arc::new(JsonFormatter::new()),
        }
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```
    /// use json_log_formatter::appenders::ConsoleAppender;
    /// use json_log_formatter::TimestampFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339Millis);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.formatter = Arc::new(JsonFormatter::new().with_timestamp_format(format));
        self
    }

    /// Use a different (possibly shared) formatter
    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let bytes = self.formatter.format(entry)?;

        // Route Error and Fatal levels to stderr, others to stdout
        if entry.level.is_error() {
            std::io::stderr().lock().write_all(&bytes)?;
        } else {
            std::io::stdout().lock().write_all(&bytes)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
