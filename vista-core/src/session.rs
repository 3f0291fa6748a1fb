//! The session object owning the active dataset.
//!
//! A [`ViewSession`] holds at most one active table or tree, the derived
//! classification results, and the view registry. One exclusive lock
//! covers the whole load sequence (domain extraction, classification,
//! conversion, relation detection, view configuration), so a reader can
//! never observe a half-installed dataset: accessors that run while a load
//! is in progress block until it finishes. The lock lives inside the
//! session and is only ever taken through scoped guards, so it is released
//! on every exit path.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{info, instrument};

use crate::analyzers::{analyze_table, RelationMatrix, SemanticType};
use crate::error::Result;
use crate::table::Table;
use crate::tree::Tree;
use crate::views::{TableInput, View, ViewInput, ViewKind, ViewRegistry};

struct SessionState {
    table: Option<Table>,
    tree: Option<Tree>,
    types: Vec<SemanticType>,
    relations: RelationMatrix,
    views: ViewRegistry,
    active: ViewKind,
}

impl SessionState {
    fn clear_dataset(&mut self) {
        self.table = None;
        self.tree = None;
        self.types.clear();
        self.relations = RelationMatrix::empty();
    }

    fn configure_active_view(&mut self) {
        let active = self.active;
        let Some(view) = self.views.get_mut(active) else {
            return;
        };
        if let Some(tree) = &self.tree {
            view.configure(ViewInput::Tree(tree));
        } else if let Some(table) = &self.table {
            view.configure(ViewInput::Table(TableInput {
                table,
                types: &self.types,
                relations: &self.relations,
            }));
        }
    }
}

/// Session context for one visualization surface.
///
/// Replaces the free-floating "active table, active tree, active view"
/// globals of a naive design with one object that can be shared by
/// reference between the loading side and the display side.
pub struct ViewSession {
    state: Mutex<SessionState>,
}

impl ViewSession {
    /// Creates a session with no dataset and an empty view registry.
    ///
    /// The active view kind starts as [`ViewKind::Graph`].
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState {
                table: None,
                tree: None,
                types: Vec::new(),
                relations: RelationMatrix::empty(),
                views: ViewRegistry::new(),
                active: ViewKind::Graph,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `view` under `kind`.
    pub fn register_view(&self, kind: ViewKind, view: Box<dyn View>) {
        self.lock().views.register(kind, view);
    }

    /// Returns the registered view kinds.
    pub fn view_kinds(&self) -> Vec<ViewKind> {
        self.lock().views.kinds()
    }

    /// Installs `table` as the active dataset.
    ///
    /// Under one lock acquisition: clears any previous table or tree, runs
    /// the full analysis pipeline (the table's column storage is rewritten
    /// to match the classification), stores the results, and configures
    /// the active view. No reader can observe the session between the
    /// clear and the install.
    #[instrument(skip_all, fields(columns = table.column_count(), rows = table.row_count()))]
    pub fn set_table(&self, mut table: Table) -> Result<()> {
        let mut state = self.lock();
        state.clear_dataset();
        let analysis = analyze_table(&mut table)?;
        state.types = analysis.types;
        state.relations = analysis.relations;
        state.table = Some(table);
        state.configure_active_view();
        info!(active = %state.active, "installed table");
        Ok(())
    }

    /// Installs `tree` as the active dataset.
    ///
    /// Trees pass through untouched: no classification or relation
    /// detection applies. Any previous table state is cleared first, under
    /// the same lock acquisition.
    #[instrument(skip_all, fields(nodes = tree.node_count()))]
    pub fn set_tree(&self, tree: Tree) {
        let mut state = self.lock();
        state.clear_dataset();
        state.tree = Some(tree);
        state.configure_active_view();
        info!(active = %state.active, "installed tree");
    }

    /// Switches the active view kind, reconfiguring only on change.
    pub fn set_active_view(&self, kind: ViewKind) {
        let mut state = self.lock();
        if state.active != kind {
            state.active = kind;
            state.configure_active_view();
        }
    }

    /// Returns the active view kind.
    pub fn active_view(&self) -> ViewKind {
        self.lock().active
    }

    /// Row count of the active table, or 0 when none is loaded.
    pub fn row_count(&self) -> usize {
        self.lock().table.as_ref().map_or(0, Table::row_count)
    }

    /// Column count of the active table, or 0 when none is loaded.
    pub fn column_count(&self) -> usize {
        self.lock().table.as_ref().map_or(0, Table::column_count)
    }

    /// Name of column `index` of the active table.
    pub fn column_name(&self, index: usize) -> Option<String> {
        self.lock()
            .table
            .as_ref()
            .and_then(|t| t.column_name(index).map(str::to_string))
    }

    /// Text rendering of the cell at (`row`, `column`) of the active
    /// table, or `None` when out of range or no table is loaded.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<String> {
        self.lock().table.as_ref().and_then(|t| t.cell_text(row, column))
    }

    /// Semantic types of the active table's columns, in column order.
    pub fn column_types(&self) -> Vec<SemanticType> {
        self.lock().types.clone()
    }

    /// Pairwise relations of the active table's columns.
    pub fn relations(&self) -> RelationMatrix {
        self.lock().relations.clone()
    }

    /// Returns `true` if a tree is the active dataset.
    pub fn has_tree(&self) -> bool {
        self.lock().tree.is_some()
    }

    /// Attribute names exposed by the active view.
    pub fn attributes(&self) -> Vec<String> {
        let state = self.lock();
        state
            .views
            .get(state.active)
            .map_or_else(Vec::new, |view| view.attributes())
    }

    /// Legal values for `attribute` on the active view.
    pub fn attribute_options(&self, attribute: &str) -> Vec<String> {
        let state = self.lock();
        state
            .views
            .get(state.active)
            .map_or_else(Vec::new, |view| view.attribute_options(attribute))
    }

    /// Sets `attribute` on the active view.
    pub fn set_attribute(&self, attribute: &str, value: &str) {
        let mut state = self.lock();
        let active = state.active;
        if let Some(view) = state.views.get_mut(active) {
            view.set_attribute(attribute, value);
        }
    }

    /// Current value of `attribute` on the active view.
    pub fn attribute(&self, attribute: &str) -> Option<String> {
        let state = self.lock();
        state
            .views
            .get(state.active)
            .and_then(|view| view.attribute(attribute))
    }

    /// Forwards a render-preparation pass to the active view.
    pub fn prepare_render(&self) {
        let mut state = self.lock();
        let active = state.active;
        if let Some(view) = state.views.get_mut(active) {
            view.prepare_render();
        }
    }
}

impl Default for ViewSession {
    fn default() -> Self {
        Self::new()
    }
}
