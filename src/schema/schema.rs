//! Ordered record schemas.

use ahash::AHashMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{FilterError, Result};
use crate::schema::column::{Column, ColumnType};

/// An ordered sequence of uniquely named columns.
///
/// Positions are dense and zero-based: the column at index `i` always has
/// `position == i`. Schemas are immutable once built and shared read-only
/// between planning and every record transformation of a stream.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Vec<ColumnSpec>")]
pub struct Schema {
    /// Columns in position order
    columns: Vec<Column>,
    /// Name to position index
    by_name: AHashMap<String, usize>,
}

/// Column description as it appears in schema files; positions are implied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name
    pub name: String,
    /// Column type
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Schema {
            columns: Vec::new(),
            by_name: AHashMap::new(),
        }
    }

    /// Build a schema from `(name, type)` pairs, numbering positions in order.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ColumnType)>,
        S: Into<String>,
    {
        let mut schema = Schema::new();
        for (name, column_type) in columns {
            schema.add_column(name, column_type)?;
        }
        Ok(schema)
    }

    /// Append a column at the next position.
    pub fn add_column<S: Into<String>>(&mut self, name: S, column_type: ColumnType) -> Result<()> {
        let name = name.into();

        if name.is_empty() {
            return Err(FilterError::configuration("Column name cannot be empty"));
        }
        if self.by_name.contains_key(&name) {
            return Err(FilterError::configuration(format!(
                "Column '{name}' already exists"
            )));
        }

        let position = self.columns.len();
        self.by_name.insert(name.clone(), position);
        self.columns.push(Column::new(position, name, column_type));
        Ok(())
    }

    /// Look up a column by name.
    pub fn lookup(&self, name: &str) -> Option<&Column> {
        self.by_name.get(name).map(|&i| &self.columns[i])
    }

    /// Look up a column by name, failing with a configuration error if absent.
    pub fn require(&self, name: &str) -> Result<&Column> {
        self.lookup(name).ok_or_else(|| {
            FilterError::configuration(format!("Column '{name}' does not exist in schema"))
        })
    }

    /// Get the column at a position.
    pub fn column(&self, position: usize) -> Option<&Column> {
        self.columns.get(position)
    }

    /// Get all columns in position order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get all column names in position order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.columns)
    }
}

impl TryFrom<Vec<ColumnSpec>> for Schema {
    type Error = FilterError;

    fn try_from(specs: Vec<ColumnSpec>) -> Result<Self> {
        Schema::from_columns(specs.into_iter().map(|s| (s.name, s.column_type)))
    }
}
