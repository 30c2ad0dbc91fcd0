//! Schema types

use serde::{Deserialize, Serialize};

/// Logical column type
///
/// The closed set of storage-level value kinds a column may hold. Composite
/// inputs are always flattened to these scalar kinds; there is no nested
/// column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    String,
    Bytes,
    /// Opaque dynamic payload; always optional
    Any,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Int8 => write!(f, "int8"),
            ColumnType::Int16 => write!(f, "int16"),
            ColumnType::Int32 => write!(f, "int32"),
            ColumnType::Int64 => write!(f, "int64"),
            ColumnType::Uint8 => write!(f, "uint8"),
            ColumnType::Uint16 => write!(f, "uint16"),
            ColumnType::Uint32 => write!(f, "uint32"),
            ColumnType::Uint64 => write!(f, "uint64"),
            ColumnType::String => write!(f, "string"),
            ColumnType::Bytes => write!(f, "bytes"),
            ColumnType::Any => write!(f, "any"),
        }
    }
}

/// Sort role of a key column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
}

/// One named, typed, optionally sort-marked unit of the output schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Logical type
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// Whether every row must carry a non-null value for this column
    pub required: bool,

    /// Sort role; set only for key-marked columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Column {
    /// Create a required column with no sort role
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            required: true,
            sort_order: None,
        }
    }

    /// Mark the column as optional (rows may omit it)
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Mark the column as an ascending sort-key column
    #[must_use]
    pub fn ascending(mut self) -> Self {
        self.sort_order = Some(SortOrder::Ascending);
        self
    }

    /// Whether this column participates in the sort key
    pub fn is_key(&self) -> bool {
        self.sort_order.is_some()
    }
}

/// The ordered list of columns describing a tabular row shape
///
/// Order is significant: it defines physical column order and, for
/// key-marked columns, the sort-key prefix order. A schema is immutable
/// once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Create a schema from an ordered column list
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// The columns, in schema order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Names of the key columns, in schema order
    pub fn key_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_key())
            .map(|c| c.name.as_str())
            .collect()
    }
}
