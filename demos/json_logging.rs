//! JSON logging example
//!
//! Demonstrates reserved-key clash handling, error fields and custom
//! timestamp layouts, writing to the console and a JSONL file.
//!
//! Run with: cargo run --example json_logging

use json_log_formatter::prelude::*;
use json_log_formatter::{entry, fields};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== JSON Log Formatter - Example ===\n");

    let mut console = ConsoleAppender::new();

    println!("1. Plain entry:");
    console.append(&LogEntry::new(LogLevel::Info, "Application started"))?;

    println!("\n2. User fields that clash with reserved keys are kept as fields.<key>:");
    let entry = entry!(LogLevel::Info, "Processing {} items", 100)
        .with_fields(fields! { "level" => "debug", "msg" => "from caller", "batch" => 7 });
    console.append(&entry)?;

    println!("\n3. Error values are written as their message (stderr for error level):");
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    console.append(&LogEntry::new(LogLevel::Error, "Write failed").with_error(io_err))?;

    println!("\n4. Custom timestamp layout from configuration:");
    let config: FormatterConfig =
        serde_json::from_str(r#"{"timestamp_format":"%d/%b/%Y:%H:%M:%S %z"}"#)
            .map_err(|e| LoggerError::config("FormatterConfig", e.to_string()))?;
    let formatter = JsonFormatter::from_config(&config)?;
    let mut console = ConsoleAppender::new().with_formatter(Arc::new(formatter));
    let entry = LogEntry::new(LogLevel::Warn, "Low disk space").with_field("free_mb", 512);
    console.append(&entry)?;

    println!("\n5. Formatting failures produce no output:");
    let bad = LogEntry::new(LogLevel::Info, "ratio").with_field("ratio", f64::NAN);
    if let Err(e) = console.append(&bad) {
        println!("   rejected: {}", e);
    }

    let path = std::env::temp_dir().join("json_log_formatter_demo.jsonl");
    let mut file = JsonAppender::new(&path)?;
    let entry = LogEntry::new(LogLevel::Debug, "Written to file")
        .with_field("path", path.display().to_string());
    file.append(&entry)?;
    file.flush()?;
    println!("\n6. Appended one line to {}", path.display());

    console.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
