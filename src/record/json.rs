//! JSON Lines conversion for records.
//!
//! Each line holds one JSON object keyed by column name:
//! ```jsonl
//! {"id": 1, "text": "東京都に住む", "at": "2024-01-01T00:00:00Z"}
//! {"id": 2, "text": null}
//! ```
//! Missing keys and `null` become [`Value::Null`]. Timestamps are RFC 3339 strings.

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value as JsonValue};

use crate::error::{FilterError, Result};
use crate::record::record::{Page, Record};
use crate::record::value::Value;
use crate::schema::column::{Column, ColumnType};
use crate::schema::schema::Schema;

/// Converts between JSON objects and records of a fixed schema.
#[derive(Debug, Clone)]
pub struct JsonRecordConverter {
    schema: Schema,
}

impl JsonRecordConverter {
    /// Create a converter for the given schema.
    pub fn new(schema: Schema) -> Self {
        JsonRecordConverter { schema }
    }

    /// Get the schema this converter reads and writes.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Parse one JSON line into a record.
    pub fn parse_line(&self, line: &str) -> Result<Record> {
        let value: JsonValue = serde_json::from_str(line)?;
        let JsonValue::Object(map) = value else {
            return Err(FilterError::configuration(
                "Each input line must be a JSON object",
            ));
        };

        let values = self
            .schema
            .columns()
            .iter()
            .map(|column| Self::to_value(column, map.get(&column.name)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Record::new(values))
    }

    /// Read up to `batch_size` non-blank lines into a page. An empty page means end of input.
    pub fn read_page<R: BufRead>(&self, reader: &mut R, batch_size: usize) -> Result<Page> {
        let mut page = Page::with_capacity(batch_size);
        let mut line = String::new();

        while page.len() < batch_size {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            page.push(self.parse_line(trimmed)?);
        }

        Ok(page)
    }

    /// Render a record as a JSON object in schema order.
    ///
    /// NaN and infinite doubles have no JSON form and are rejected.
    pub fn to_json(&self, record: &Record) -> Result<JsonValue> {
        let mut map = Map::new();
        for column in self.schema.columns() {
            let value = record.get(column.position).unwrap_or(&Value::Null);
            map.insert(column.name.clone(), Self::to_json_value(column, value)?);
        }
        Ok(JsonValue::Object(map))
    }

    /// Write every record of a page as one JSON line.
    pub fn write_page<W: Write>(&self, writer: &mut W, page: &Page) -> Result<()> {
        for record in page.records() {
            serde_json::to_writer(&mut *writer, &self.to_json(record)?)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn to_value(column: &Column, json: Option<&JsonValue>) -> Result<Value> {
        let json = match json {
            None | Some(JsonValue::Null) => return Ok(Value::Null),
            Some(v) => v,
        };

        let value = match (column.column_type, json) {
            (ColumnType::String, JsonValue::String(s)) => Some(Value::String(s.clone())),
            (ColumnType::Boolean, JsonValue::Bool(b)) => Some(Value::Boolean(*b)),
            (ColumnType::Long, JsonValue::Number(n)) => n.as_i64().map(Value::Long),
            (ColumnType::Double, JsonValue::Number(n)) => n.as_f64().map(Value::Double),
            (ColumnType::Timestamp, JsonValue::String(s)) => s
                .parse::<DateTime<Utc>>()
                .ok()
                .map(Value::Timestamp),
            (ColumnType::Json, v) => Some(Value::Json(v.clone())),
            _ => None,
        };

        value.ok_or_else(|| {
            FilterError::configuration(format!(
                "Value {json} is not a valid {} for column '{}'",
                column.column_type, column.name
            ))
        })
    }

    fn to_json_value(column: &Column, value: &Value) -> Result<JsonValue> {
        let json = match value {
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::Double(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .ok_or_else(|| {
                    FilterError::configuration(format!(
                        "Value {f} of column '{}' cannot be written as JSON",
                        column.name
                    ))
                })?,
            Value::Long(i) => JsonValue::from(*i),
            Value::Timestamp(dt) => JsonValue::String(dt.to_rfc3339()),
            Value::Json(v) => v.clone(),
            Value::Null => JsonValue::Null,
        };
        Ok(json)
    }
}
