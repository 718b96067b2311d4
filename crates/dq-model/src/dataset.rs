//! In-memory columnar dataset.

use std::collections::BTreeSet;

use crate::data_type::DataType;
use crate::error::{ModelError, Result};

/// String representation of a missing cell.
///
/// Length and extremum statistics run over every cell's representation, so a
/// missing cell contributes an empty string.
pub const MISSING_REPR: &str = "";

/// A single named column. `None` cells are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    cells: Vec<Option<String>>,
    data_type: DataType,
}

impl Column {
    /// Builds a column and infers its type from the present cells.
    pub fn new(name: impl Into<String>, cells: Vec<Option<String>>) -> Self {
        let data_type = DataType::infer(cells.iter().flatten().map(String::as_str));
        Self {
            name: name.into(),
            cells,
            data_type,
        }
    }

    /// Builds a column with an explicit type.
    pub fn with_type(
        name: impl Into<String>,
        cells: Vec<Option<String>>,
        data_type: DataType,
    ) -> Self {
        Self {
            name: name.into(),
            cells,
            data_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Iterates over the present values, skipping missing cells.
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().flatten().map(String::as_str)
    }

    /// Iterates over every cell's string representation, in row order.
    pub fn reprs(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .map(|cell| cell.as_deref().unwrap_or(MISSING_REPR))
    }

    /// String representation of the cell at `row`, if the row exists.
    pub fn repr_at(&self, row: usize) -> Option<&str> {
        self.cells
            .get(row)
            .map(|cell| cell.as_deref().unwrap_or(MISSING_REPR))
    }
}

/// An ordered set of equally long, uniquely named columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Builds a dataset, checking that column names are unique and that every
    /// column has the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);
        let mut names: BTreeSet<&str> = BTreeSet::new();
        for column in &columns {
            if !names.insert(column.name()) {
                return Err(ModelError::DuplicateColumn {
                    name: column.name().to_string(),
                });
            }
            if column.len() != row_count {
                return Err(ModelError::ColumnLength {
                    name: column.name().to_string(),
                    expected: row_count,
                    found: column.len(),
                });
            }
        }
        drop(names);
        Ok(Self { columns, row_count })
    }

    /// Builds a dataset with the given headers and no rows.
    pub fn empty(headers: &[String]) -> Result<Self> {
        Self::new(
            headers
                .iter()
                .map(|name| Column::with_type(name.clone(), Vec::new(), DataType::Object))
                .collect(),
        )
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Number of rows (`N`).
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
