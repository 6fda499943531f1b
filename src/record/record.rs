//! Positional records and record pages.

use serde::{Deserialize, Serialize};

use crate::record::value::Value;

/// A row of values addressed by schema position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    values: Vec<Value>,
}

impl Record {
    /// Create a record from values in schema order.
    pub fn new(values: Vec<Value>) -> Self {
        Record { values }
    }

    /// Create a record of `len` nulls.
    pub fn nulls(len: usize) -> Self {
        Record {
            values: vec![Value::Null; len],
        }
    }

    /// Get the value at a position.
    pub fn get(&self, position: usize) -> Option<&Value> {
        self.values.get(position)
    }

    /// Replace the value at a position. Out-of-range positions are ignored and reported as `false`.
    pub fn set(&mut self, position: usize, value: Value) -> bool {
        match self.values.get_mut(position) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Get all values in schema order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consume the record, returning its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Get the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the record has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Value>> for Record {
    fn from(values: Vec<Value>) -> Self {
        Record::new(values)
    }
}

/// A batch of records delivered to or produced by a stream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    records: Vec<Record>,
}

impl Page {
    /// Create a page from records.
    pub fn new(records: Vec<Record>) -> Self {
        Page { records }
    }

    /// Create an empty page with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Page {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Get all records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consume the page, returning its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for Page {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Page {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_set_get() {
        let mut record = Record::nulls(2);
        assert!(record.set(1, Value::from("a")));
        assert!(!record.set(2, Value::from("b")));
        assert_eq!(record.get(0), Some(&Value::Null));
        assert_eq!(record.get(1).and_then(Value::as_str), Some("a"));
        assert_eq!(record.get(2), None);
    }

    #[test]
    fn test_page_collect() {
        let page: Page = (0..3)
            .map(|i| Record::new(vec![Value::Long(i)]))
            .collect();
        assert_eq!(page.len(), 3);
        assert_eq!(page.records()[2].get(0).and_then(Value::as_long), Some(2));
    }
}
