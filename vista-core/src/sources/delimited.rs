//! Delimited text source (CSV, TSV).
//!
//! Decoding is delegated to the Arrow CSV reader; this source only decides
//! the delimiter, forces an all-text schema, and applies header
//! re-detection. Reading everything as `Utf8` is deliberate: type decisions
//! belong to the analyzers, not the reader.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, StringArray};
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use tracing::{debug, instrument};

use super::{DataSource, Dataset};
use crate::error::{CoreError, Result};
use crate::table::{Column, Table};

/// Rows sampled when inferring the column layout.
const LAYOUT_SAMPLE_ROWS: usize = 128;

/// Options for reading a delimited text file.
#[derive(Debug, Clone, Default)]
pub struct DelimitedOptions {
    /// Field delimiter; `None` picks by file extension (tab for
    /// `.tab`/`.tsv`, comma otherwise).
    pub delimiter: Option<u8>,
    /// Whether the first row is a header; `None` enables re-detection.
    pub has_header: Option<bool>,
}

/// A delimited text file source.
#[derive(Debug, Clone)]
pub struct DelimitedSource {
    path: PathBuf,
    options: DelimitedOptions,
}

impl DelimitedSource {
    /// Creates a source for `path` with default options.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options: DelimitedOptions::default(),
        }
    }

    /// Creates a source for `path` with custom options.
    pub fn with_options(path: impl AsRef<Path>, options: DelimitedOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    fn delimiter(&self) -> u8 {
        if let Some(delimiter) = self.options.delimiter {
            return delimiter;
        }
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "tab" | "tsv" => b'\t',
            _ => b',',
        }
    }

    /// Reads the file into an all-text table.
    fn read_table(&self, has_header: bool) -> Result<Table> {
        let format = Format::default()
            .with_header(has_header)
            .with_delimiter(self.delimiter());

        let mut file = File::open(&self.path)?;
        let (layout, _) = format
            .infer_schema(&mut file, Some(LAYOUT_SAMPLE_ROWS))
            .map_err(|e| CoreError::data_source("delimited", e.to_string()))?;

        // Only the names and the column count come from inference; every
        // column is read as raw text.
        let fields: Vec<Field> = layout
            .fields()
            .iter()
            .map(|field| Field::new(field.name().to_string(), DataType::Utf8, true))
            .collect();
        let schema = Arc::new(Schema::new(fields));
        if schema.fields().is_empty() {
            return Ok(Table::empty());
        }

        let file = File::open(&self.path)?;
        let reader = ReaderBuilder::new(Arc::clone(&schema))
            .with_format(format)
            .build(file)
            .map_err(|e| CoreError::data_source("delimited", e.to_string()))?;

        let mut batches = Vec::new();
        for batch in reader {
            batches.push(batch.map_err(|e| CoreError::data_source("delimited", e.to_string()))?);
        }

        let mut columns = Vec::with_capacity(schema.fields().len());
        for (index, field) in schema.fields().iter().enumerate() {
            let chunks: Vec<&dyn Array> = batches
                .iter()
                .map(|batch| batch.column(index).as_ref())
                .collect();
            let values: ArrayRef = if chunks.is_empty() {
                Arc::new(StringArray::from(Vec::<&str>::new()))
            } else {
                arrow::compute::concat(&chunks)?
            };
            columns.push(Column::new(field.name().to_string(), values)?);
        }
        Table::new(columns)
    }

    /// Returns `true` if any column's name also occurs among that
    /// column's values, i.e. the "header" row looks like data.
    fn header_row_looks_like_data(table: &Table) -> bool {
        table.columns().iter().any(|column| {
            let name = column.name();
            (0..column.len()).any(|row| column.text(row) == name)
        })
    }
}

impl DataSource for DelimitedSource {
    /// Loads the file into an all-text [`Table`].
    ///
    /// Unless overridden by [`DelimitedOptions::has_header`], the file is
    /// first read with a header row; if any column name then shows up in
    /// its own column's values the header assumption was wrong, and the
    /// file is re-read headerless with generated column names.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Dataset> {
        if let Some(has_header) = self.options.has_header {
            return Ok(Dataset::Table(self.read_table(has_header)?));
        }
        let table = self.read_table(true)?;
        if Self::header_row_looks_like_data(&table) {
            debug!("header row matches column data, re-reading headerless");
            return Ok(Dataset::Table(self.read_table(false)?));
        }
        Ok(Dataset::Table(table))
    }

    fn description(&self) -> String {
        format!(
            "delimited text file: {} (delimiter '{}')",
            self.path.display(),
            self.delimiter().escape_ascii()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn load_table(source: &DelimitedSource) -> Table {
        match source.load().unwrap() {
            Dataset::Table(table) => table,
            Dataset::Tree(_) => panic!("expected a table"),
        }
    }

    #[test]
    fn test_csv_loads_as_text() {
        let file = write_file(".csv", "id,score,label\n1,1.5,a\n2,2.5,b\n3,3.5,a\n");
        let table = load_table(&DelimitedSource::new(file.path()));
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_name(0), Some("id"));
        assert_eq!(table.column_name(2), Some("label"));
        // Values stay text until the analyzers convert them.
        assert_eq!(
            table.column(1).unwrap().values().data_type(),
            &DataType::Utf8
        );
        assert_eq!(table.cell_text(1, 1).unwrap(), "2.5");
    }

    #[test]
    fn test_tsv_delimiter_from_extension() {
        let file = write_file(".tsv", "a\tb\n1\tx\n2\ty\n");
        let table = load_table(&DelimitedSource::new(file.path()));
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.cell_text(0, 1).unwrap(), "x");
    }

    #[test]
    fn test_header_redetection() {
        // No header row: the first data row would be swallowed as names
        // and "a" would show up again in its own column.
        let file = write_file(".csv", "a,b\n1,a\n2,b\n");
        let table = load_table(&DelimitedSource::new(file.path()));
        assert_eq!(table.row_count(), 3);
        assert_ne!(table.column_name(0), Some("a"));
    }

    #[test]
    fn test_header_override_skips_redetection() {
        let file = write_file(".csv", "a,b\n1,a\n2,b\n");
        let source = DelimitedSource::with_options(
            file.path(),
            DelimitedOptions {
                delimiter: None,
                has_header: Some(true),
            },
        );
        let table = load_table(&source);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_name(0), Some("a"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DelimitedSource::new("/no/such/file.csv").load().unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_description_mentions_delimiter() {
        let source = DelimitedSource::new("data.tsv");
        assert!(source.description().contains("\\t"));
    }
}
