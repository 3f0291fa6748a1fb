//! Error types for the Vista core library.
//!
//! All fallible operations in this crate return [`CoreError`] through the
//! crate-wide [`Result`] alias. Cell-level anomalies (a value that does not
//! parse under its classified type) are not errors: they degrade to a
//! documented fallback so downstream views always receive a fully-typed
//! table. `CoreError` is reserved for structural problems such as ragged
//! column lengths or an unreadable data source.

use thiserror::Error;

/// The main error type for the Vista core library.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A column's row count disagrees with the rest of the table.
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    ColumnLength {
        /// Name of the offending column
        column: String,
        /// Row count the table requires
        expected: usize,
        /// Row count the column actually has
        actual: usize,
    },

    /// Replacement columns do not match the table's shape.
    #[error("table shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A column is backed by an array type this crate does not handle.
    #[error("column '{column}' has unsupported storage type {data_type}")]
    UnsupportedColumnType {
        /// Name of the offending column
        column: String,
        /// Display form of the Arrow data type
        data_type: String,
    },

    /// Error from Arrow operations.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Error from I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from data source operations.
    #[error("Data source error ({source_type}): {message}")]
    DataSource {
        /// Kind of source (e.g. "delimited")
        source_type: String,
        /// Detailed error message
        message: String,
    },

    /// Error related to configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error when an operation is not supported.
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

/// A type alias for `Result<T, CoreError>` used throughout the crate.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Creates a shape mismatch error with the given message.
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Creates a data source error with the given source type and message.
    pub fn data_source(source_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataSource {
            source_type: source_type.into(),
            message: message.into(),
        }
    }

    /// Creates a configuration error with the given message.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a not-supported error with the given message.
    pub fn not_supported(msg: impl Into<String>) -> Self {
        Self::NotSupported(msg.into())
    }
}
