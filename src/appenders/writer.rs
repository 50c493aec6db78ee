//! Appender over any `std::io::Write` sink

use crate::core::{Appender, Formatter, JsonFormatter, LogEntry, LoggerError, Result};
use std::io::Write;
use std::sync::Arc;

/// Writes formatted entries to an arbitrary writer
///
/// The entry is fully formatted before anything is written, so a formatter
/// error never leaves a partial line in the sink.
///
/// # Example
///
/// ```
/// use json_log_formatter::appenders::WriterAppender;
/// use json_log_formatter::{Appender, LogEntry, LogLevel};
///
/// let mut appender = WriterAppender::new(Vec::new());
/// appender.append(&LogEntry::new(LogLevel::Info, "hello")).unwrap();
/// assert!(appender.get_ref().ends_with(b"\n"));
/// ```
pub struct WriterAppender<W: Write + Send + Sync> {
    writer: W,
    formatter: Arc<dyn Formatter>,
}

impl<W: Write + Send + Sync> WriterAppender<W> {
    /// Create an appender that formats entries as JSON
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            formatter: Arc::new(JsonFormatter::new()),
        }
    }

    /// Use a different (possibly shared) formatter
    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn set_formatter(&mut self, formatter: Arc<dyn Formatter>) {
        self.formatter = formatter;
    }

    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> Appender for WriterAppender<W> {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let bytes = self.formatter.format(entry)?;
        self.writer
            .write_all(&bytes)
            .map_err(|e| LoggerError::io_operation("writing log entry", "sink rejected write", e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, TimestampFormat};

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_one_line_per_entry() -> Result<()> {
        let mut appender = WriterAppender::new(Vec::new());

        for i in 0..3 {
            let entry = LogEntry::new(LogLevel::Debug, format!("Iteration {}", i))
                .with_field("iteration", i);
            appender.append(&entry)?;
        }
        appender.flush()?;

        let output = String::from_utf8(appender.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(parsed["msg"].is_string());
            assert_eq!(parsed["level"], "debug");
        }
        Ok(())
    }

    #[test]
    fn test_format_error_writes_nothing() {
        let mut appender = WriterAppender::new(Vec::new());
        let entry = LogEntry::new(LogLevel::Info, "bad").with_field("ratio", f64::INFINITY);

        let err = appender.append(&entry).unwrap_err();

        assert!(err.is_format_error());
        assert!(appender.get_ref().is_empty());
    }

    #[test]
    fn test_io_failure_is_reported() {
        let mut appender = WriterAppender::new(FailingSink);
        let err = appender
            .append(&LogEntry::new(LogLevel::Info, "lost"))
            .unwrap_err();

        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }

    #[test]
    fn test_shared_formatter() -> Result<()> {
        let formatter: Arc<dyn Formatter> =
            Arc::new(JsonFormatter::new().with_timestamp_format(TimestampFormat::Unix));
        let mut first = WriterAppender::new(Vec::new()).with_formatter(Arc::clone(&formatter));
        let mut second = WriterAppender::new(Vec::new()).with_formatter(formatter);

        let entry = LogEntry::new(LogLevel::Info, "same");
        first.append(&entry)?;
        second.append(&entry)?;

        assert_eq!(first.get_ref(), second.get_ref());
        assert_eq!(first.formatter().name(), "json");
        Ok(())
    }
}
