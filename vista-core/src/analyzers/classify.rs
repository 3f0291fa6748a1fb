//! Per-column semantic type classification.
//!
//! The classifier looks at each column in isolation: how many cells parse
//! as numbers, how many of those carry a fractional part, and how many
//! distinct renderings the column holds. Three fixed ratios turn those
//! counts into one of the five [`SemanticType`]s. The thresholds are policy
//! constants, not configuration: downstream consumers depend on stable
//! classification for a given dataset.

use tracing::{debug, instrument};

use super::domain::ColumnDomain;
use super::types::SemanticType;
use crate::table::Table;

/// A column is "mostly numeric" when more than this share of its rows
/// parse as numbers.
pub const MOSTLY_NUMERIC_RATIO: f64 = 0.95;

/// A mostly-numeric column is continuous when more than this share of its
/// rows carry a non-zero fractional part.
pub const FRACTIONAL_RATIO: f64 = 0.01;

/// A column is categorical when its distinct-value count is below this
/// share of its rows.
pub const DISTINCT_RATIO: f64 = 0.9;

/// Classifies every column of `table`.
///
/// `domains` must be the output of
/// [`column_domains`](super::column_domains) for the same table; entry `i`
/// pairs with column `i`.
///
/// Decision per column, over `n` rows (strict comparisons throughout):
/// - more than `0.95 * n` cells parse as numbers:
///   - more than `0.01 * n` of them are fractional: [`Continuous`],
///   - fewer than `0.9 * n` distinct values: [`IntegerCategory`],
///   - otherwise: [`IntegerData`];
/// - otherwise:
///   - fewer than `0.9 * n` distinct values: [`StringCategory`],
///   - otherwise: [`StringData`].
///
/// A zero-row table classifies every column as [`StringData`]: the ratio
/// comparisons are degenerate at `n == 0`, so the rule is pinned explicitly
/// (no numeric evidence, no distinct-value pressure).
///
/// [`Continuous`]: SemanticType::Continuous
/// [`IntegerCategory`]: SemanticType::IntegerCategory
/// [`IntegerData`]: SemanticType::IntegerData
/// [`StringCategory`]: SemanticType::StringCategory
/// [`StringData`]: SemanticType::StringData
#[instrument(skip_all, fields(columns = table.column_count(), rows = table.row_count()))]
pub fn classify_columns(table: &Table, domains: &[ColumnDomain]) -> Vec<SemanticType> {
    debug_assert_eq!(domains.len(), table.column_count());
    let row_count = table.row_count();
    if row_count == 0 {
        return vec![SemanticType::StringData; table.column_count()];
    }
    let rows = row_count as f64;

    table
        .columns()
        .iter()
        .zip(domains)
        .map(|(column, domain)| {
            let mut num_numeric = 0usize;
            let mut num_fractional = 0usize;
            for row in 0..row_count {
                if let Some(value) = column.parse_numeric(row) {
                    num_numeric += 1;
                    if value.fract() != 0.0 {
                        num_fractional += 1;
                    }
                }
            }
            let num_distinct = domain.len();

            let semantic = if num_numeric as f64 > MOSTLY_NUMERIC_RATIO * rows {
                if num_fractional as f64 > FRACTIONAL_RATIO * rows {
                    SemanticType::Continuous
                } else if (num_distinct as f64) < DISTINCT_RATIO * rows {
                    SemanticType::IntegerCategory
                } else {
                    SemanticType::IntegerData
                }
            } else if (num_distinct as f64) < DISTINCT_RATIO * rows {
                SemanticType::StringCategory
            } else {
                SemanticType::StringData
            };
            debug!(
                column = column.name(),
                num_numeric,
                num_fractional,
                num_distinct,
                %semantic,
                "classified column"
            );
            semantic
        })
        .collect()
}
