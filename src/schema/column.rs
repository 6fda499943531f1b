//! Column definitions for record schemas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// The closed set of column types a record stream can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// UTF-8 text
    String,
    /// true/false
    Boolean,
    /// 64-bit floating point
    Double,
    /// 64-bit signed integer
    Long,
    /// UTC instant
    Timestamp,
    /// Arbitrary JSON value
    Json,
}

impl ColumnType {
    /// Get the lowercase name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Boolean => "boolean",
            ColumnType::Double => "double",
            ColumnType::Long => "long",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Json => "json",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" => Ok(ColumnType::String),
            "boolean" => Ok(ColumnType::Boolean),
            "double" => Ok(ColumnType::Double),
            "long" => Ok(ColumnType::Long),
            "timestamp" => Ok(ColumnType::Timestamp),
            "json" => Ok(ColumnType::Json),
            other => Err(FilterError::configuration(format!(
                "Unknown column type '{other}'"
            ))),
        }
    }
}

/// A named, typed column at a fixed position in a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Zero-based position within the owning schema
    pub position: usize,
    /// Column name, unique within the owning schema
    pub name: String,
    /// Value type stored in this column
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    /// Create a new column.
    pub fn new<S: Into<String>>(position: usize, name: S, column_type: ColumnType) -> Self {
        Column {
            position,
            name: name.into(),
            column_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_parsing() {
        assert_eq!("STRING".parse::<ColumnType>().unwrap(), ColumnType::String);
        assert_eq!("json".parse::<ColumnType>().unwrap(), ColumnType::Json);
        assert_eq!(
            "Timestamp".parse::<ColumnType>().unwrap(),
            ColumnType::Timestamp
        );

        let err = "decimal".parse::<ColumnType>().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_column_serde() {
        let column = Column::new(1, "text", ColumnType::String);
        let json = serde_json::to_string(&column).unwrap();
        assert_eq!(json, r#"{"position":1,"name":"text","type":"string"}"#);
    }
}
