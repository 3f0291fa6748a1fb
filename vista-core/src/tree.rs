//! Tree-shaped datasets.
//!
//! Trees arrive from upstream loaders (e.g. phylogenies) and pass through
//! the session untouched: column classification and relation detection
//! apply to tables only. The structure here is an index-linked arena so
//! view components can walk it without lifetime gymnastics.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Identifier of a node within its [`Tree`].
pub type NodeId = usize;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TreeNode {
    name: String,
    branch_length: Option<f64>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A rooted tree of named nodes with optional branch lengths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its identifier.
    ///
    /// Pass `None` as the parent only for the first node (the root); every
    /// later node must name an existing parent.
    pub fn add_node(&mut self, parent: Option<NodeId>, name: impl Into<String>) -> Result<NodeId> {
        let id = self.nodes.len();
        match parent {
            None if id == 0 => {}
            None => {
                return Err(CoreError::configuration(
                    "tree already has a root; new nodes need a parent",
                ))
            }
            Some(p) => {
                if p >= id {
                    return Err(CoreError::configuration(format!(
                        "parent node {p} does not exist"
                    )));
                }
                self.nodes[p].children.push(id);
            }
        }
        self.nodes.push(TreeNode {
            name: name.into(),
            branch_length: None,
            parent,
            children: Vec::new(),
        });
        Ok(id)
    }

    /// Sets the branch length of the edge above `node`.
    pub fn set_branch_length(&mut self, node: NodeId, length: f64) -> Result<()> {
        let entry = self
            .nodes
            .get_mut(node)
            .ok_or_else(|| CoreError::configuration(format!("node {node} does not exist")))?;
        entry.branch_length = Some(length);
        Ok(())
    }

    /// Returns the root node, if the tree is non-empty.
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the name of `node`, if it exists.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|n| n.name.as_str())
    }

    /// Returns the branch length above `node`.
    pub fn branch_length(&self, node: NodeId) -> Option<f64> {
        self.nodes.get(node).and_then(|n| n.branch_length)
    }

    /// Returns the parent of `node`.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    /// Returns the children of `node`, in insertion order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(node).map_or(&[], |n| n.children.as_slice())
    }

    /// Returns `true` if `node` exists and has no children.
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| n.children.is_empty())
    }

    /// Returns the number of leaf nodes.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.children.is_empty()).count()
    }
}
