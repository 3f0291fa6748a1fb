//! Cross-column relation detection.
//!
//! Two columns are related when their value domains overlap enough to
//! suggest a meaningful cross-reference, e.g. a join key or a shared
//! category set that a graph view can use as edge endpoints. Detection is
//! gated on the coarse [`BasicType`]: only columns of the same discrete
//! grouping are comparable, and continuous columns never participate.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::domain::ColumnDomain;
use super::types::{BasicType, SemanticType};
use crate::table::Table;

/// Two domains are shared when their intersection holds more than this
/// share of the table's rows.
pub const SHARED_DOMAIN_RATIO: f64 = 0.01;

/// The relation between two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// No meaningful overlap between the columns' domains.
    Unrelated,
    /// The columns draw values from overlapping domains.
    SharedDomain,
}

/// Symmetric pairwise relations over a table's columns.
///
/// Only the upper triangle is stored; [`get`](Self::get) normalizes the
/// index order, so lookups are symmetric by construction. The diagonal and
/// out-of-range lookups are defined as [`Relation::Unrelated`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationMatrix {
    column_count: usize,
    cells: Vec<Relation>,
}

impl RelationMatrix {
    /// Creates a matrix for `column_count` columns with every pair
    /// initialized to [`Relation::Unrelated`].
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            cells: vec![Relation::Unrelated; column_count * column_count.saturating_sub(1) / 2],
        }
    }

    /// Creates a matrix over no columns.
    pub fn empty() -> Self {
        Self::new(0)
    }

    /// Returns the number of columns this matrix covers.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Offset of the unordered pair (i, j), i < j, in the triangle.
    fn offset(&self, i: usize, j: usize) -> usize {
        i * (2 * self.column_count - i - 1) / 2 + (j - i - 1)
    }

    /// Returns the relation between columns `a` and `b`.
    pub fn get(&self, a: usize, b: usize) -> Relation {
        if a == b || a >= self.column_count || b >= self.column_count {
            return Relation::Unrelated;
        }
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        self.cells[self.offset(i, j)]
    }

    fn set(&mut self, i: usize, j: usize, relation: Relation) {
        let offset = self.offset(i, j);
        self.cells[offset] = relation;
    }

    /// Returns every pair (i, j), i < j, marked [`Relation::SharedDomain`].
    pub fn shared_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.column_count {
            for j in (i + 1)..self.column_count {
                if self.get(i, j) == Relation::SharedDomain {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

/// Detects the relation for every unordered pair of distinct columns.
///
/// `domains` and `types` must be positional outputs for the same table.
/// Pair rule, for columns of the same non-[`Other`](BasicType::Other)
/// basic type: [`Relation::SharedDomain`] when the domain intersection
/// holds more than `0.01 * row_count` values (strict), otherwise
/// [`Relation::Unrelated`]. Pairs of differing basic type, and any pair
/// involving a continuous column, are unrelated without comparing domains.
/// Every pair is evaluated independently.
#[instrument(skip_all, fields(columns = table.column_count(), rows = table.row_count()))]
pub fn detect_relations(
    table: &Table,
    domains: &[ColumnDomain],
    types: &[SemanticType],
) -> RelationMatrix {
    debug_assert_eq!(domains.len(), table.column_count());
    debug_assert_eq!(types.len(), table.column_count());
    let column_count = table.column_count().min(domains.len()).min(types.len());
    let threshold = SHARED_DOMAIN_RATIO * table.row_count() as f64;

    let mut relations = RelationMatrix::new(column_count);
    for i in 0..column_count {
        for j in (i + 1)..column_count {
            let left = types[i].basic_type();
            let right = types[j].basic_type();
            if left != right || left == BasicType::Other {
                continue;
            }
            let shared = domains[i].intersection(&domains[j]).count();
            if shared as f64 > threshold {
                debug!(
                    left = table.column_name(i).unwrap_or_default(),
                    right = table.column_name(j).unwrap_or_default(),
                    shared,
                    "columns share a domain"
                );
                relations.set(i, j, Relation::SharedDomain);
            }
        }
    }
    relations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::{classify_columns, column_domains};
    use crate::table::Column;

    fn detect(table: &Table) -> RelationMatrix {
        let domains = column_domains(table);
        let types = classify_columns(table, &domains);
        detect_relations(table, &domains, &types)
    }

    #[test]
    fn test_shared_string_domains() {
        let table = Table::new(vec![
            Column::from_strings("from", ["a", "b", "a", "c", "b"]),
            Column::from_strings("to", ["b", "c", "c", "a", "a"]),
        ])
        .unwrap();
        let relations = detect(&table);
        assert_eq!(relations.get(0, 1), Relation::SharedDomain);
        assert_eq!(relations.get(1, 0), Relation::SharedDomain);
    }

    #[test]
    fn test_disjoint_domains_unrelated() {
        let table = Table::new(vec![
            Column::from_strings("x", ["a", "b", "a", "b", "a"]),
            Column::from_strings("y", ["p", "q", "p", "q", "p"]),
        ])
        .unwrap();
        assert_eq!(detect(&table).get(0, 1), Relation::Unrelated);
    }

    #[test]
    fn test_continuous_never_related() {
        // Identical renderings, but continuous columns are excluded from
        // domain comparison outright.
        let table = Table::new(vec![
            Column::from_strings("u", ["1.5", "2.5", "3.5", "4.5", "5.5"]),
            Column::from_strings("v", ["1.5", "2.5", "3.5", "4.5", "5.5"]),
        ])
        .unwrap();
        assert_eq!(detect(&table).get(0, 1), Relation::Unrelated);
    }

    #[test]
    fn test_mixed_basic_types_unrelated() {
        let values: Vec<String> = (0..20).map(|i| (i % 3).to_string()).collect();
        let table = Table::new(vec![
            Column::from_strings("num", &values),
            Column::from_strings("cat", values.iter().map(|v| format!("s{v}"))),
        ])
        .unwrap();
        assert_eq!(detect(&table).get(0, 1), Relation::Unrelated);
    }

    #[test]
    fn test_integer_category_domains_relate() {
        let left: Vec<String> = (0..20).map(|i| (i % 3).to_string()).collect();
        let right: Vec<String> = (0..20).map(|i| (i % 4).to_string()).collect();
        let table = Table::new(vec![
            Column::from_strings("l", &left),
            Column::from_strings("r", &right),
        ])
        .unwrap();
        // Domains {0,1,2} and {0,1,2,3} share 3 values, well over 1% of
        // 20 rows.
        assert_eq!(detect(&table).get(0, 1), Relation::SharedDomain);
    }

    #[test]
    fn test_every_pair_evaluated_past_a_mismatch() {
        // A continuous column sitting between two related string columns
        // must not mask their relation.
        let table = Table::new(vec![
            Column::from_strings("a", ["x", "y", "x", "y", "x"]),
            Column::from_strings("mid", ["1.5", "2.5", "3.5", "4.5", "5.5"]),
            Column::from_strings("b", ["y", "x", "y", "x", "y"]),
        ])
        .unwrap();
        let relations = detect(&table);
        assert_eq!(relations.get(0, 1), Relation::Unrelated);
        assert_eq!(relations.get(1, 2), Relation::Unrelated);
        assert_eq!(relations.get(0, 2), Relation::SharedDomain);
    }

    #[test]
    fn test_zero_rows_all_unrelated() {
        let table = Table::new(vec![
            Column::from_strings("a", Vec::<&str>::new()),
            Column::from_strings("b", Vec::<&str>::new()),
        ])
        .unwrap();
        // Empty domains intersect in 0 values and the threshold is
        // strict, so nothing relates.
        assert_eq!(detect(&table).get(0, 1), Relation::Unrelated);
    }

    #[test]
    fn test_matrix_lookup_edges() {
        let matrix = RelationMatrix::new(3);
        assert_eq!(matrix.get(1, 1), Relation::Unrelated);
        assert_eq!(matrix.get(0, 7), Relation::Unrelated);
        assert_eq!(matrix.column_count(), 3);
        assert!(matrix.shared_pairs().is_empty());
    }

    #[test]
    fn test_shared_pairs_listing() {
        let table = Table::new(vec![
            Column::from_strings("a", ["x", "y", "x", "y", "x"]),
            Column::from_strings("b", ["y", "x", "y", "x", "y"]),
            Column::from_strings("c", ["p", "q", "p", "q", "p"]),
        ])
        .unwrap();
        assert_eq!(detect(&table).shared_pairs(), vec![(0, 1)]);
    }
}
