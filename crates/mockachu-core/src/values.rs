//! Generated values and output rows.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single generated cell value.
///
/// Values are deliberately primitive: every action produces a null, boolean,
/// integer, float or string. Formats that need flat text (CSV, XML, SQL,
/// HTML) go through [`Value::render`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null, produced by the nullable-percentage policy.
    Null,
    /// Boolean value (`RANDOM_BIT` and friends produce integers instead).
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// String value.
    Str(String),
}

impl Value {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Flat-text rendering used by the CSV/XML/SQL/HTML serializers.
    ///
    /// Null renders as the empty string; everything else as its natural
    /// textual form.
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.clone(),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

/// One generated output row.
///
/// An `IndexMap` keeps the field declaration order, which the serializers
/// rely on. Duplicate field names collapse onto the first occurrence, the
/// same way a dictionary would.
pub type Row = IndexMap<String, Value>;
