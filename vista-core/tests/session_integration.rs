//! Integration tests for the session: loading, accessors, and the view
//! dispatch seam.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use vista_core::prelude::*;
use vista_core::views::TableInput;

/// Minimal graph view double: remembers which columns were suggested as
/// edge endpoints and exposes one attribute.
#[derive(Default)]
struct GraphViewStub {
    configured: Arc<AtomicUsize>,
    endpoint_columns: Arc<Mutex<Option<(usize, usize)>>>,
    color_attribute: Option<String>,
}

impl View for GraphViewStub {
    fn configure(&mut self, input: ViewInput<'_>) {
        self.configured.fetch_add(1, Ordering::SeqCst);
        if let ViewInput::Table(TableInput { relations, .. }) = input {
            *self.endpoint_columns.lock().unwrap() = relations.shared_pairs().first().copied();
        }
    }

    fn attributes(&self) -> Vec<String> {
        vec!["color".to_string()]
    }

    fn attribute_options(&self, attribute: &str) -> Vec<String> {
        if attribute == "color" {
            vec!["degree".to_string(), "label".to_string()]
        } else {
            Vec::new()
        }
    }

    fn set_attribute(&mut self, attribute: &str, value: &str) {
        if attribute == "color" {
            self.color_attribute = Some(value.to_string());
        }
    }

    fn attribute(&self, attribute: &str) -> Option<String> {
        if attribute == "color" {
            self.color_attribute.clone()
        } else {
            None
        }
    }
}

fn edge_list_table() -> Table {
    Table::new(vec![
        Column::from_strings("from", ["n1", "n2", "n1", "n3", "n2", "n1"]),
        Column::from_strings("to", ["n2", "n3", "n3", "n1", "n1", "n2"]),
        Column::from_strings("weight", ["0.5", "1.5", "0.25", "0.75", "1.25", "0.1"]),
    ])
    .unwrap()
}

#[test]
fn test_csv_to_session_round_trip() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(file, "id,score,label\n1,1.5,a\n2,2.5,b\n3,3.5,a\n4,4.5,b\n5,5.5,a\n").unwrap();
    file.flush().unwrap();

    let session = ViewSession::new();
    match load_path(file.path()).unwrap() {
        Dataset::Table(table) => session.set_table(table).unwrap(),
        Dataset::Tree(tree) => session.set_tree(tree),
    }

    assert_eq!(session.row_count(), 5);
    assert_eq!(session.column_count(), 3);
    assert_eq!(session.column_name(2), Some("label".to_string()));
    assert_eq!(
        session.column_types(),
        vec![
            SemanticType::IntegerData,
            SemanticType::Continuous,
            SemanticType::StringCategory,
        ]
    );
    // Conversion happened in place: integer storage renders canonically.
    assert_eq!(session.cell_text(0, 1), Some("1.5".to_string()));
    assert_eq!(session.cell_text(4, 0), Some("5".to_string()));
}

#[test]
fn test_relations_reach_the_active_view() {
    let session = ViewSession::new();
    let configured = Arc::new(AtomicUsize::new(0));
    let endpoints = Arc::new(Mutex::new(None));
    session.register_view(
        ViewKind::Graph,
        Box::new(GraphViewStub {
            configured: Arc::clone(&configured),
            endpoint_columns: Arc::clone(&endpoints),
            color_attribute: None,
        }),
    );

    session.set_table(edge_list_table()).unwrap();
    assert_eq!(configured.load(Ordering::SeqCst), 1);

    // The stub saw the first shared-domain pair; from/to share their
    // node-name domain while weight is continuous and excluded.
    assert_eq!(*endpoints.lock().unwrap(), Some((0, 1)));
    assert_eq!(session.relations().shared_pairs(), vec![(0, 1)]);
    assert_eq!(session.attribute_options("color").len(), 2);
    session.set_attribute("color", "degree");
    assert_eq!(session.attribute("color"), Some("degree".to_string()));
}

#[test]
fn test_tree_pass_through() {
    let session = ViewSession::new();
    let mut tree = Tree::new();
    let root = tree.add_node(None, "root").unwrap();
    let child = tree.add_node(Some(root), "child").unwrap();
    tree.set_branch_length(child, 0.4).unwrap();

    session.set_tree(tree);
    assert!(session.has_tree());
    // No table accessors apply to a tree.
    assert_eq!(session.row_count(), 0);
    assert!(session.column_types().is_empty());
}

#[test]
fn test_loads_are_serialized_by_the_session_lock() {
    let session = Arc::new(ViewSession::new());
    let mut handles = Vec::new();
    for _ in 0..4 {
        let session = Arc::clone(&session);
        handles.push(thread::spawn(move || {
            for _ in 0..25 {
                session.set_table(edge_list_table()).unwrap();
                // Readers racing a load must always observe a fully
                // installed table, never a cleared or half-built one.
                let rows = session.row_count();
                assert!(rows == 0 || rows == 6);
                let types = session.column_types();
                assert!(types.is_empty() || types.len() == 3);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(session.row_count(), 6);
}

#[test]
fn test_view_kind_catalogue() {
    let session = ViewSession::new();
    assert!(session.view_kinds().is_empty());
    session.register_view(ViewKind::Graph, Box::new(GraphViewStub::default()));
    session.register_view(ViewKind::Phylotree, Box::new(GraphViewStub::default()));
    assert_eq!(
        session.view_kinds(),
        vec![ViewKind::Graph, ViewKind::Phylotree]
    );
    assert_eq!(session.active_view(), ViewKind::Graph);
}
