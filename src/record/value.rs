//! Typed cell values.
//!
//! [`Value`] mirrors the closed set of [`ColumnType`]s plus an explicit null.
//!
//! ```
//! use morph_filter::record::value::Value;
//! use morph_filter::schema::ColumnType;
//!
//! let value = Value::String("東京都".to_string());
//! assert_eq!(value.as_str(), Some("東京都"));
//! assert!(value.matches(ColumnType::String));
//! assert!(Value::Null.matches(ColumnType::Long));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::column::ColumnType;

/// A single value in a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Text value
    String(String),
    /// Boolean value
    Boolean(bool),
    /// Floating point value
    Double(f64),
    /// Integer value
    Long(i64),
    /// Timestamp value
    Timestamp(DateTime<Utc>),
    /// JSON value
    Json(serde_json::Value),
    /// Null value
    Null,
}

impl Value {
    /// The column type this value belongs to, `None` for null.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Value::String(_) => Some(ColumnType::String),
            Value::Boolean(_) => Some(ColumnType::Boolean),
            Value::Double(_) => Some(ColumnType::Double),
            Value::Long(_) => Some(ColumnType::Long),
            Value::Timestamp(_) => Some(ColumnType::Timestamp),
            Value::Json(_) => Some(ColumnType::Json),
            Value::Null => None,
        }
    }

    /// Check whether this value can be stored in a column of the given type.
    pub fn matches(&self, column_type: ColumnType) -> bool {
        self.column_type().is_none_or(|t| t == column_type)
    }

    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the text if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the JSON value if this is a JSON value.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Get the integer if this is a long value.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Long(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::Timestamp(dt)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
