//! The dispatch seam between the session and rendering components.
//!
//! Rendering lives outside this crate. What lives here is the contract a
//! renderer implements ([`View`]) and the registry the session dispatches
//! through ([`ViewRegistry`]), keyed by a typed [`ViewKind`] tag instead of
//! free-form names. When a dataset is installed the active view receives a
//! [`ViewInput`] carrying the table together with its classified types and
//! relations, or the tree.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analyzers::{RelationMatrix, SemanticType};
use crate::error::CoreError;
use crate::table::Table;
use crate::tree::Tree;

/// The kinds of view the surrounding tool can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    /// Node-link graph layout.
    Graph,
    /// 2D scatter plot.
    Scatter,
    /// 3D scatter plot.
    Scatter3d,
    /// Treemap.
    Treemap,
    /// Tree ring.
    Treering,
    /// Phylogenetic tree.
    Phylotree,
}

impl ViewKind {
    /// Every view kind, in display order.
    pub const ALL: [ViewKind; 6] = [
        ViewKind::Graph,
        ViewKind::Scatter,
        ViewKind::Scatter3d,
        ViewKind::Treemap,
        ViewKind::Treering,
        ViewKind::Phylotree,
    ];

    /// Returns the display name of this view kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Graph => "GRAPH",
            Self::Scatter => "SCATTER",
            Self::Scatter3d => "3D SCATTER",
            Self::Treemap => "TREEMAP",
            Self::Treering => "TREERING",
            Self::Phylotree => "PHYLOTREE",
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::configuration(format!("unknown view kind '{s}'")))
    }
}

/// A classified table handed to a view.
#[derive(Debug, Clone, Copy)]
pub struct TableInput<'a> {
    /// The converted table.
    pub table: &'a Table,
    /// Semantic type per column.
    pub types: &'a [SemanticType],
    /// Pairwise shared-domain relations, e.g. for suggesting graph edge
    /// endpoint columns.
    pub relations: &'a RelationMatrix,
}

/// The dataset a view is configured with.
#[derive(Debug, Clone, Copy)]
pub enum ViewInput<'a> {
    /// Tabular data plus its derived classification.
    Table(TableInput<'a>),
    /// Tree-shaped data, passed through without classification.
    Tree(&'a Tree),
}

/// Contract implemented by rendering components.
///
/// All methods except [`configure`](Self::configure) have no-op defaults;
/// a view only overrides the surface it supports.
pub trait View: Send {
    /// Called whenever the active dataset changes or this view becomes
    /// active.
    fn configure(&mut self, input: ViewInput<'_>);

    /// Called before each render pass.
    fn prepare_render(&mut self) {}

    /// Names of the attributes this view exposes.
    fn attributes(&self) -> Vec<String> {
        Vec::new()
    }

    /// Legal values for `attribute`.
    fn attribute_options(&self, _attribute: &str) -> Vec<String> {
        Vec::new()
    }

    /// Sets `attribute` to `value`.
    fn set_attribute(&mut self, _attribute: &str, _value: &str) {}

    /// Returns the current value of `attribute`.
    fn attribute(&self, _attribute: &str) -> Option<String> {
        None
    }
}

/// Registry of available views, keyed by [`ViewKind`].
#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<ViewKind, Box<dyn View>>,
}

impl ViewRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `view` under `kind`, replacing any previous registration.
    pub fn register(&mut self, kind: ViewKind, view: Box<dyn View>) {
        self.views.insert(kind, view);
    }

    /// Returns the registered kinds, in [`ViewKind::ALL`] order.
    pub fn kinds(&self) -> Vec<ViewKind> {
        ViewKind::ALL
            .into_iter()
            .filter(|kind| self.views.contains_key(kind))
            .collect()
    }

    /// Returns `true` if a view is registered under `kind`.
    pub fn contains(&self, kind: ViewKind) -> bool {
        self.views.contains_key(&kind)
    }

    /// Returns the view registered under `kind`.
    pub fn get(&self, kind: ViewKind) -> Option<&dyn View> {
        self.views.get(&kind).map(|view| view.as_ref())
    }

    /// Returns the view registered under `kind` for mutation.
    pub fn get_mut(&mut self, kind: ViewKind) -> Option<&mut Box<dyn View>> {
        self.views.get_mut(&kind)
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
