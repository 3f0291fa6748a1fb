//! In-memory tabular data model backed by Arrow arrays.
//!
//! A [`Table`] is an ordered sequence of named [`Column`]s aligned by row
//! index. Columns are backed by one of three Arrow array types: `Utf8`
//! (text, the form in which data arrives from loaders), `Int64`, or
//! `Float64` (the forms produced by the column converter). Every cell has a
//! canonical text rendering and a best-effort numeric parse; both are what
//! the classification heuristics operate on.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::DataType;

use crate::error::{CoreError, Result};

/// A single named column of cell values.
///
/// Cloning a column is cheap: the backing Arrow buffers are shared, not
/// copied. The column converter relies on this to pass string columns
/// through with their original storage.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    values: ArrayRef,
}

impl Column {
    /// Creates a column over an existing Arrow array.
    ///
    /// Only `Utf8`, `Int64`, and `Float64` storage is accepted.
    pub fn new(name: impl Into<String>, values: ArrayRef) -> Result<Self> {
        let name = name.into();
        match values.data_type() {
            DataType::Utf8 | DataType::Int64 | DataType::Float64 => Ok(Self { name, values }),
            other => Err(CoreError::UnsupportedColumnType {
                column: name,
                data_type: other.to_string(),
            }),
        }
    }

    /// Creates a text column from string values.
    pub fn from_strings<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            values: Arc::new(StringArray::from_iter_values(values)),
        }
    }

    /// Creates an integer column.
    pub fn from_ints<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self {
            name: name.into(),
            values: Arc::new(Int64Array::from_iter_values(values)),
        }
    }

    /// Creates a floating-point column.
    pub fn from_reals<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            name: name.into(),
            values: Arc::new(Float64Array::from_iter_values(values)),
        }
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the backing Arrow array.
    pub fn values(&self) -> &ArrayRef {
        &self.values
    }

    /// Returns the number of rows in this column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Canonical text rendering of the cell at `row`.
    ///
    /// Numeric storage renders with its native stringification ("3",
    /// "1.5"). Null cells and out-of-range rows render as the empty
    /// string, which never parses as numeric.
    pub fn text(&self, row: usize) -> String {
        if row >= self.values.len() || self.values.is_null(row) {
            return String::new();
        }
        if let Some(arr) = self.values.as_any().downcast_ref::<StringArray>() {
            arr.value(row).to_string()
        } else if let Some(arr) = self.values.as_any().downcast_ref::<Int64Array>() {
            arr.value(row).to_string()
        } else if let Some(arr) = self.values.as_any().downcast_ref::<Float64Array>() {
            arr.value(row).to_string()
        } else {
            // Unreachable: constructors reject other storage types.
            String::new()
        }
    }

    /// Best-effort numeric parse of the cell's text rendering.
    pub fn parse_numeric(&self, row: usize) -> Option<f64> {
        let text = self.text(row);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok()
    }
}

/// An ordered collection of equal-length named columns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Creates a table from the given columns.
    ///
    /// Every column must have the same row count.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);
        for column in &columns {
            if column.len() != row_count {
                return Err(CoreError::ColumnLength {
                    column: column.name().to_string(),
                    expected: row_count,
                    actual: column.len(),
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    /// Creates a table with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column at `index`, if in range.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Returns all columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the name of the column at `index`, if in range.
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(Column::name)
    }

    /// Canonical text rendering of the cell at (`row`, `column`).
    ///
    /// Returns `None` when either index is out of range.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<String> {
        if row >= self.row_count {
            return None;
        }
        self.columns.get(column).map(|c| c.text(row))
    }

    /// Appends a typed column to the table.
    ///
    /// The new column must match the table's row count; a column appended
    /// to a table with no columns defines it.
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if self.columns.is_empty() {
            self.row_count = column.len();
        } else if column.len() != self.row_count {
            return Err(CoreError::ColumnLength {
                column: column.name().to_string(),
                expected: self.row_count,
                actual: column.len(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Atomically replaces all column storage.
    ///
    /// The replacement must preserve column count, names, order, and row
    /// count; only the backing value representation may change. Callers
    /// holding a reference to the table observe the new storage.
    pub fn replace_columns(&mut self, columns: Vec<Column>) -> Result<()> {
        if columns.len() != self.columns.len() {
            return Err(CoreError::shape_mismatch(format!(
                "expected {} columns, got {}",
                self.columns.len(),
                columns.len()
            )));
        }
        for (current, replacement) in self.columns.iter().zip(&columns) {
            if current.name() != replacement.name() {
                return Err(CoreError::shape_mismatch(format!(
                    "column '{}' cannot be replaced by '{}'",
                    current.name(),
                    replacement.name()
                )));
            }
            if replacement.len() != self.row_count {
                return Err(CoreError::ColumnLength {
                    column: replacement.name().to_string(),
                    expected: self.row_count,
                    actual: replacement.len(),
                });
            }
        }
        self.columns = columns;
        Ok(())
    }
}
