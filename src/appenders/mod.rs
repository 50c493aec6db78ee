//! Appender implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod json;
pub mod writer;

#[cfg(feature = "console")]
pub use console::ConsoleAppender;
#[cfg(feature = "file")]
pub use json::JsonAppender;
pub use writer::WriterAppender;

// Re-export traits for backward compatibility
pub use crate::core::Appender;
