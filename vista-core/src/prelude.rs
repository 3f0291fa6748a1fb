//! Prelude for commonly used types and traits in vista-core.

pub use crate::analyzers::{
    analyze_table, classify_columns, column_domains, convert_columns, detect_relations, BasicType,
    ColumnDomain, Relation, RelationMatrix, SemanticType, TableAnalysis,
};
pub use crate::error::{CoreError, Result};
pub use crate::logging::LoggingConfig;
pub use crate::session::ViewSession;
pub use crate::sources::{load_path, DataSource, Dataset, DelimitedSource};
pub use crate::table::{Column, Table};
pub use crate::tree::Tree;
pub use crate::views::{View, ViewInput, ViewKind, ViewRegistry};
