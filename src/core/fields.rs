//! Caller-supplied structured fields and reserved-key clash resolution
//!
//! This module provides:
//! - `FieldValue`: a tagged value (scalar, JSON, or error)
//! - `Field`: one key/value pair
//! - `Fields`: an ordered collection that may contain duplicate keys
//! - `prefix_field_clashes`: renames fields that collide with reserved keys

use crate::core::error::{LoggerError, Result};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Keys the formatter writes itself. User fields never overwrite them.
pub const RESERVED_KEYS: [&str; 3] = ["time", "msg", "level"];

/// Prefix applied to a user field whose key is reserved
pub const FIELD_CLASH_PREFIX: &str = "fields.";

/// Value type for structured logging fields
#[derive(Debug, Clone)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    /// Arbitrary structured value, written as-is
    Json(serde_json::Value),
    /// Rendered as its `Display` text, never as a structure
    Error(Arc<dyn StdError + Send + Sync + 'static>),
}

impl FieldValue {
    /// Wrap an error so it is written as its message text
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        FieldValue::Error(Arc::new(err))
    }

    /// Convert to serde_json::Value for JSON serialization
    ///
    /// Fails for floats JSON cannot represent (NaN, +/-inf).
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| {
                    LoggerError::formatter("JSON", format!("unsupported value: float {}", f))
                })?,
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Json(v) => v.clone(),
            FieldValue::Error(e) => serde_json::Value::String(e.to_string()),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FieldValue::Error(_))
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => a == b,
            (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
            (FieldValue::Float(a), FieldValue::Float(b)) => a == b,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Null, FieldValue::Null) => true,
            (FieldValue::Json(a), FieldValue::Json(b)) => a == b,
            (FieldValue::Error(a), FieldValue::Error(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Json(v) => write!(f, "{}", v),
            FieldValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        FieldValue::Json(v)
    }
}

impl From<std::io::Error> for FieldValue {
    fn from(e: std::io::Error) -> Self {
        FieldValue::error(e)
    }
}

impl From<Arc<dyn StdError + Send + Sync + 'static>> for FieldValue {
    fn from(e: Arc<dyn StdError + Send + Sync + 'static>) -> Self {
        FieldValue::Error(e)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

/// A single caller-supplied key/value pair
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered collection of fields, duplicates allowed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    fields: Vec<Field>,
}

impl Fields {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to the collection
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.push(Field::new(key, value));
        self
    }

    /// Add a field to the collection (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.push(Field::new(key, value));
    }

    /// First field with exactly this key, if any
    pub fn find(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.find(key).map(|field| &field.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the collection has any fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Rename fields that collide with `reserved`; see [`prefix_field_clashes`]
    pub fn prefix_clashes(&mut self, reserved: &[&str]) {
        prefix_field_clashes(self, reserved);
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for Fields {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, v)| Field::new(k, v)).collect()
    }
}

impl Extend<Field> for Fields {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

/// Rename every field whose key equals one of `reserved` to
/// `FIELD_CLASH_PREFIX + key`, in place.
///
/// Position and value are kept. Comparison is case-sensitive. Running this
/// twice is the same as running it once.
pub fn prefix_field_clashes(fields: &mut Fields, reserved: &[&str]) {
    for key in reserved {
        for field in fields.fields.iter_mut().filter(|field| field.key == *key) {
            field.key = format!("{}{}", FIELD_CLASH_PREFIX, key);
        }
    }
}
