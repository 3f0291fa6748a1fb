//! Column domain extraction.

use std::collections::HashSet;

use tracing::instrument;

use crate::table::Table;

/// The set of distinct textual values occurring in a column.
pub type ColumnDomain = HashSet<String>;

/// Computes the domain of every column in `table`.
///
/// Each domain holds the canonical text rendering of every cell in that
/// column, duplicates collapsed. The result is positional: entry `i`
/// belongs to column `i`. Domains feed both the type classifier (distinct
/// counts) and the relation detector (intersection sizes), and are
/// recomputed from scratch on every table load.
#[instrument(skip(table), fields(columns = table.column_count(), rows = table.row_count()))]
pub fn column_domains(table: &Table) -> Vec<ColumnDomain> {
    let row_count = table.row_count();
    table
        .columns()
        .iter()
        .map(|column| {
            let mut distinct = ColumnDomain::with_capacity(row_count.min(1024));
            for row in 0..row_count {
                distinct.insert(column.text(row));
            }
            distinct
        })
        .collect()
}
