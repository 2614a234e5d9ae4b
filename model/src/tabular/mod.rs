mod parser;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

pub use parser::TabularError;

/// A single cell of a parsed row. The variant is decided per column, see
/// [`TabularPayload::from_csv`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Integer(i) => serializer.serialize_i64(*i),
            CellValue::Float(f) => serializer.serialize_f64(*f),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Null => serializer.serialize_none(),
        }
    }
}

/// Column name to cell value, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<(String, CellValue)>,
}

impl Row {
    pub fn new(cells: Vec<(String, CellValue)>) -> Self {
        Self { cells }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Rows and columns parsed from a delimited text object.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularPayload {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl TabularPayload {
    /// Parses comma separated content whose first line is the header.
    ///
    /// Column types are inferred over the whole column: integers when every
    /// cell is an integer, floats when every present cell is numeric, booleans
    /// when every present cell is a `True`/`False` literal and text otherwise.
    /// Empty and NA-like cells become [`CellValue::Null`].
    pub fn from_csv(content: &[u8]) -> Result<Self, TabularError> {
        let (columns, rows) = parser::parse(content)?;
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
