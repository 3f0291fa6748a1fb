//! Semantic column types inferred by the classifier.

use serde::{Deserialize, Serialize};

/// The inferred meaning of a column's data.
///
/// Decided per column by [`classify_columns`](super::classify_columns) and
/// consumed by the column converter (which picks the storage type) and the
/// relation detector (which gates on the coarser [`BasicType`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticType {
    /// Real-valued measurements (a meaningful fraction of cells carry a
    /// fractional part).
    Continuous,
    /// Nearly all-distinct integers: an identifier or a measurement, not a
    /// category.
    IntegerData,
    /// Repeated integers drawn from a small domain.
    IntegerCategory,
    /// Free text with nearly all-distinct values.
    StringData,
    /// Repeated strings drawn from a small domain.
    StringCategory,
}

impl SemanticType {
    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continuous => "Continuous",
            Self::IntegerData => "IntegerData",
            Self::IntegerCategory => "IntegerCategory",
            Self::StringData => "StringData",
            Self::StringCategory => "StringCategory",
        }
    }

    /// Maps this type onto its coarse [`BasicType`] grouping.
    ///
    /// Continuous columns map to [`BasicType::Other`]: real-valued
    /// measurements are deliberately excluded from shared-domain relation
    /// detection, which only makes sense over discrete domains.
    pub fn basic_type(self) -> BasicType {
        match self {
            Self::IntegerData | Self::IntegerCategory => BasicType::Numeric,
            Self::StringData | Self::StringCategory => BasicType::String,
            Self::Continuous => BasicType::Other,
        }
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse grouping of [`SemanticType`] used to gate relation detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicType {
    /// Integer-backed columns (data or category).
    Numeric,
    /// Text-backed columns (data or category).
    String,
    /// Columns excluded from relation detection.
    Other,
}
