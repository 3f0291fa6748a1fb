//! Column analysis for freshly loaded tables.
//!
//! Everything a table needs before a view can use it happens here, in a
//! fixed order:
//!
//! 1. **Domain extraction** ([`column_domains`]): the set of distinct
//!    textual values per column.
//! 2. **Type classification** ([`classify_columns`]): one [`SemanticType`]
//!    per column, from numeric-ratio heuristics over the column's own
//!    values and domain size.
//! 3. **Storage conversion** ([`convert_columns`]): each column's backing
//!    storage is rewritten to match its type.
//! 4. **Relation detection** ([`detect_relations`]): shared-domain flags
//!    for every pair of compatible columns.
//!
//! All four results are recomputed in full on every table load; nothing is
//! incremental and nothing persists across loads.

mod classify;
mod convert;
mod domain;
mod relations;
mod types;

pub use classify::{
    classify_columns, DISTINCT_RATIO, FRACTIONAL_RATIO, MOSTLY_NUMERIC_RATIO,
};
pub use convert::convert_columns;
pub use domain::{column_domains, ColumnDomain};
pub use relations::{detect_relations, Relation, RelationMatrix, SHARED_DOMAIN_RATIO};
pub use types::{BasicType, SemanticType};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::Result;
use crate::table::Table;

/// The derived results of analyzing one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableAnalysis {
    /// Semantic type per column, in column order.
    pub types: Vec<SemanticType>,
    /// Pairwise shared-domain relations.
    pub relations: RelationMatrix,
}

/// Runs the full analysis pipeline over `table`.
///
/// Extracts domains, classifies every column, rewrites the column storage
/// in place to match the classification, and detects pairwise relations.
/// Relations are computed from the pre-conversion domains, so category
/// columns relate on the renderings the data arrived with.
#[instrument(skip_all, fields(columns = table.column_count(), rows = table.row_count()))]
pub fn analyze_table(table: &mut Table) -> Result<TableAnalysis> {
    let domains = column_domains(table);
    let types = classify_columns(table, &domains);
    convert_columns(table, &types)?;
    let relations = detect_relations(table, &domains, &types);
    info!(
        columns = table.column_count(),
        rows = table.row_count(),
        shared_pairs = relations.shared_pairs().len(),
        "analyzed table"
    );
    Ok(TableAnalysis { types, relations })
}
