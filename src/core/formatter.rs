//! Formatter trait: turns a log entry into the bytes an appender writes

use super::{error::Result, log_entry::LogEntry};

pub trait Formatter: Send + Sync {
    /// Render `entry`. On error no bytes are produced.
    fn format(&self, entry: &LogEntry) -> Result<Vec<u8>>;
    fn name(&self) -> &str;
}
