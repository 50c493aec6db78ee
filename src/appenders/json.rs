//! JSON file appender for structured logging

use super::writer::WriterAppender;
use crate::core::{Appender, JsonFormatter, LogEntry, Result, TimestampFormat};
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

/// Appends each log entry to a file as a single-line JSON object (JSONL)
///
/// Compatible with log aggregation tools like ELK, Loki, etc.
pub struct JsonAppender {
    inner: WriterAppender<BufWriter<File>>,
}

impl JsonAppender {
    /// Open (or create) `path` for appending
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(Self {
            inner: WriterAppender::new(BufWriter::new(file)),
        })
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use json_log_formatter::appenders::JsonAppender;
    /// use json_log_formatter::TimestampFormat;
    ///
    /// let appender = JsonAppender::new("/var/log/app.jsonl")
    ///     .unwrap()
    ///     .with_timestamp_format(TimestampFormat::UnixMillis);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        let formatter = JsonFormatter::new().with_timestamp_format(format);
        self.inner.set_formatter(Arc::new(formatter));
        self
    }
}

impl Appender for JsonAppender {
    fn name(&self) -> &str {
        "json"
    }

    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.inner.append(entry)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}

impl Drop for JsonAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
