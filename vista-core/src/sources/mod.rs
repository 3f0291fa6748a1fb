//! Data source connectors feeding the session.
//!
//! Sources produce a populated [`Dataset`]; they never classify. Decoding
//! is delegated to the Arrow readers, and the columns always arrive as raw
//! text so the analyzers see exactly what was in the file.

use std::fmt::Debug;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::table::Table;
use crate::tree::Tree;

mod delimited;

pub use delimited::{DelimitedOptions, DelimitedSource};

/// A dataset produced by a source: tabular or tree-shaped.
#[derive(Debug, Clone)]
pub enum Dataset {
    /// Tabular data, subject to classification on install.
    Table(Table),
    /// Tree-shaped data, installed as-is.
    Tree(Tree),
}

impl Dataset {
    /// Returns the table, if this dataset is tabular.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            Self::Tree(_) => None,
        }
    }

    /// Returns the tree, if this dataset is tree-shaped.
    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Table(_) => None,
        }
    }
}

/// A loadable data source.
pub trait DataSource: Debug {
    /// Loads the source into a populated dataset.
    fn load(&self) -> Result<Dataset>;

    /// Returns a human-readable description of this data source.
    fn description(&self) -> String;
}

/// Loads `path` with a source picked by file extension.
///
/// Everything readable lands on the delimited reader (tab-separated for
/// `.tab`/`.tsv`, comma-separated otherwise). Tree formats have no reader
/// here; trees are built through the [`Tree`](crate::tree::Tree) API.
pub fn load_path(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "tre" | "vtk" => Err(CoreError::not_supported(format!(
            "no reader for '.{extension}' files; construct the dataset programmatically"
        ))),
        _ => DelimitedSource::new(path).load(),
    }
}
