//! Property-based tests for json_log_formatter using proptest

use chrono::{TimeZone, Utc};
use json_log_formatter::prelude::*;
use json_log_formatter::{prefix_field_clashes, FIELD_CLASH_PREFIX};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug)]
struct Failure(String);

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for Failure {}

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

/// Keys that never collide with reserved keys or their prefixed forms
fn plain_key() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}".prop_filter("must not be reserved", |k| !RESERVED_KEYS.contains(&k.as_str()))
}

/// Keys drawn mostly from the reserved set
fn clash_prone_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("time".to_string()),
        Just("msg".to_string()),
        Just("level".to_string()),
        "[a-z]{1,6}",
    ]
}

/// String or error values, the types the output must always encode
fn text_or_error() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        ".*".prop_map(FieldValue::from),
        ".*".prop_map(|m| FieldValue::error(Failure(m))),
    ]
}

fn fields_from(pairs: Vec<(String, FieldValue)>) -> Fields {
    pairs.into_iter().collect()
}

fn format_record(entry: &LogEntry) -> serde_json::Map<String, serde_json::Value> {
    let line = JsonFormatter::new()
        .format_to_string(entry)
        .expect("strings and errors always encode");
    assert!(line.ends_with('\n'));
    assert_eq!(line.matches('\n').count(), 1);
    match serde_json::from_str::<serde_json::Value>(&line).expect("output parses as JSON") {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

fn entry_with(level: LogLevel, message: String, fields: Fields) -> LogEntry {
    LogEntry::new(level, message)
        .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .with_fields(fields)
}

// ============================================================================
// Clash Resolution Properties
// ============================================================================

proptest! {
    /// Running clash resolution twice equals running it once
    #[test]
    fn test_prefix_clashes_idempotent(
        pairs in prop::collection::vec((clash_prone_key(), text_or_error()), 0..12)
    ) {
        let mut once = fields_from(pairs);
        prefix_field_clashes(&mut once, &RESERVED_KEYS);

        let mut twice = once.clone();
        prefix_field_clashes(&mut twice, &RESERVED_KEYS);

        prop_assert_eq!(once, twice);
    }

    /// Clash resolution keeps length and values, and leaves no bare reserved key
    #[test]
    fn test_prefix_clashes_preserves_values(
        pairs in prop::collection::vec((clash_prone_key(), text_or_error()), 0..12)
    ) {
        let original = fields_from(pairs);
        let mut renamed = original.clone();
        renamed.prefix_clashes(&RESERVED_KEYS);

        prop_assert_eq!(renamed.len(), original.len());
        for (before, after) in original.iter().zip(renamed.iter()) {
            prop_assert_eq!(&before.value, &after.value);
            if RESERVED_KEYS.contains(&before.key.as_str()) {
                prop_assert_eq!(after.key.clone(), format!("{}{}", FIELD_CLASH_PREFIX, before.key));
            } else {
                prop_assert_eq!(&after.key, &before.key);
            }
        }
        for key in RESERVED_KEYS {
            prop_assert!(!renamed.contains_key(key));
        }
    }
}

// ============================================================================
// Formatter Output Properties
// ============================================================================

proptest! {
    /// Output always parses and always carries the reserved keys
    #[test]
    fn test_output_always_parses(
        level in any_level(),
        message in ".*",
        pairs in prop::collection::vec((clash_prone_key(), text_or_error()), 0..8)
    ) {
        let record = format_record(&entry_with(level, message.clone(), fields_from(pairs)));

        prop_assert_eq!(&record["msg"], &serde_json::Value::String(message));
        prop_assert_eq!(&record["level"], &serde_json::Value::String(level.to_string()));
        prop_assert_eq!(&record["time"], &serde_json::Value::String("2024-01-01T00:00:00Z".to_string()));
    }

    /// Empty field collection produces exactly the three reserved keys
    #[test]
    fn test_empty_fields_exact_keys(level in any_level(), message in ".*") {
        let record = format_record(&entry_with(level, message, Fields::new()));

        let keys: BTreeSet<&str> = record.keys().map(String::as_str).collect();
        let expected: BTreeSet<&str> = RESERVED_KEYS.iter().copied().collect();
        prop_assert_eq!(keys, expected);
    }

    /// Without clashes the key set is the reserved keys plus the user keys
    #[test]
    fn test_non_clashing_key_set(
        pairs in prop::collection::vec((plain_key(), ".*"), 0..8)
    ) {
        let fields: Fields = pairs.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let record = format_record(&entry_with(LogLevel::Info, "m".to_string(), fields));

        let keys: BTreeSet<String> = record.keys().cloned().collect();
        let mut expected: BTreeSet<String> =
            RESERVED_KEYS.iter().map(|k| k.to_string()).collect();
        expected.extend(pairs.iter().map(|(k, _)| k.clone()));
        prop_assert_eq!(keys, expected);
        prop_assert!(!record.keys().any(|k| k.starts_with(FIELD_CLASH_PREFIX)));
    }

    /// A clashing user field survives under its prefixed key
    #[test]
    fn test_clashing_field_is_preserved(
        key in prop_oneof![Just("time"), Just("msg"), Just("level")],
        value in ".*",
        level in any_level()
    ) {
        let fields = Fields::new().with_field(key, value.clone());
        let record = format_record(&entry_with(level, "canonical".to_string(), fields));

        let prefixed = format!("{}{}", FIELD_CLASH_PREFIX, key);
        prop_assert_eq!(&record[prefixed.as_str()], &serde_json::Value::String(value));
        prop_assert!(record.contains_key(key));
        prop_assert_eq!(&record["level"], &serde_json::Value::String(level.to_string()));
        prop_assert_eq!(&record["msg"], &serde_json::Value::String("canonical".to_string()));
    }

    /// Error values are written as their message text
    #[test]
    fn test_error_values_render_as_message(key in plain_key(), text in ".*") {
        let fields = Fields::new().with_field(key.clone(), FieldValue::error(Failure(text.clone())));
        let record = format_record(&entry_with(LogLevel::Error, "failed".to_string(), fields));

        prop_assert_eq!(&record[key.as_str()], &serde_json::Value::String(text));
    }

    /// Same entry and configuration give identical bytes
    #[test]
    fn test_output_deterministic(
        message in ".*",
        pairs in prop::collection::vec((clash_prone_key(), ".*"), 0..8)
    ) {
        let fields: Fields = pairs.into_iter().collect();
        let entry = entry_with(LogLevel::Debug, message, fields);
        let formatter = JsonFormatter::new();

        prop_assert_eq!(formatter.format(&entry).unwrap(), formatter.format(&entry).unwrap());
    }
}

// ============================================================================
// LogLevel Properties
// ============================================================================

proptest! {
    /// Level names round-trip through FromStr
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Parsing accepts case-insensitive input
    #[test]
    fn test_log_level_case_insensitive(level in any_level(), upper in any::<bool>()) {
        let input = if upper {
            level.to_str().to_uppercase()
        } else {
            level.to_str().to_string()
        };
        prop_assert_eq!(input.parse::<LogLevel>(), Ok(level));
    }
}
