//! The built checklist tree and its read-only queries.
//!
//! Nodes are stored flat in depth-first pre-order. Every subtree therefore
//! occupies a contiguous slot range, which keeps downward propagation a
//! simple slice walk.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::error::{ChecklistError, Result};
use crate::logging::ChecklistTreeDebug;
use crate::node::Node;
use crate::path::NodePath;
use crate::state::{CheckState, NodeRole};

/// A checklist tree with live check states.
///
/// The shape is fixed once built; see [`ChecklistTree::build`] for
/// construction and [`ChecklistTree::toggle`] for state changes.
#[derive(Clone)]
pub struct ChecklistTree {
    /// Nodes in pre-order.
    pub(crate) nodes: Vec<Node>,
    /// Path to slot lookup.
    pub(crate) index: HashMap<NodePath, usize>,
    /// Slot of each node's parent group.
    pub(crate) parents: Vec<Option<usize>>,
    /// Slots of each node's immediate children.
    pub(crate) child_slots: Vec<Vec<usize>>,
    /// One past the last slot of each node's subtree.
    pub(crate) subtree_end: Vec<usize>,
    /// Slot of the check-all pseudo-item.
    pub(crate) check_all: Option<usize>,
    pub(crate) allow_indeterminate: bool,
    /// Number of checked nodes, not counting the check-all item.
    pub(crate) checked_count: usize,
}

impl ChecklistTree {
    /// All nodes in depth-first pre-order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes, including the check-all item.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether group headers may become indeterminate.
    pub fn allow_indeterminate(&self) -> bool {
        self.allow_indeterminate
    }

    /// Look up a node by path.
    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        self.index.get(path).map(|&slot| &self.nodes[slot])
    }

    /// Returns `true` if a node exists at `path`.
    pub fn contains(&self, path: &NodePath) -> bool {
        self.index.contains_key(path)
    }

    /// The state of the node at `path`.
    pub fn state(&self, path: &NodePath) -> Result<CheckState> {
        self.slot_of(path).map(|slot| self.nodes[slot].state)
    }

    /// The check-all pseudo-item, if configured.
    pub fn check_all(&self) -> Option<&Node> {
        self.check_all.map(|slot| &self.nodes[slot])
    }

    /// Root-level nodes in order, excluding the check-all item.
    pub fn roots(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(slot, node)| self.parents[*slot].is_none() && !node.role.is_check_all())
            .map(|(_, node)| node)
    }

    /// The parent group of the node at `path`; `None` for root entries.
    pub fn parent(&self, path: &NodePath) -> Result<Option<&Node>> {
        let slot = self.slot_of(path)?;
        Ok(self.parents[slot].map(|parent| &self.nodes[parent]))
    }

    /// Immediate children of the node at `path`.
    pub fn children(&self, path: &NodePath) -> Result<Vec<&Node>> {
        let slot = self.slot_of(path)?;
        Ok(self.child_slots[slot]
            .iter()
            .map(|&child| &self.nodes[child])
            .collect())
    }

    /// Every node below `path`, in pre-order.
    pub fn descendants(&self, path: &NodePath) -> Result<&[Node]> {
        let slot = self.slot_of(path)?;
        Ok(&self.nodes[slot + 1..self.subtree_end[slot]])
    }

    /// Values of all checked items, in pre-order.
    ///
    /// Group headers and the check-all item never contribute.
    pub fn selected_values(&self) -> Vec<&Value> {
        self.selected_items().filter_map(|node| node.value()).collect()
    }

    /// Labels of all checked items, in pre-order.
    pub fn selected_labels(&self) -> Vec<&str> {
        self.selected_items().map(|node| node.label()).collect()
    }

    /// Paths of all checked items, in pre-order.
    pub fn selected_paths(&self) -> Vec<&NodePath> {
        self.selected_items().map(|node| node.path()).collect()
    }

    fn selected_items(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.role == NodeRole::Item && node.state.is_checked())
    }

    /// Render the tree for debugging.
    pub fn debug_tree(&self) -> String {
        ChecklistTreeDebug::new().format_tree(self)
    }

    pub(crate) fn slot_of(&self, path: &NodePath) -> Result<usize> {
        self.index
            .get(path)
            .copied()
            .ok_or_else(|| ChecklistError::invalid_node(path))
    }
}

impl fmt::Debug for ChecklistTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChecklistTree")
            .field("len", &self.nodes.len())
            .field("allow_indeterminate", &self.allow_indeterminate)
            .field("check_all", &self.check_all.is_some())
            .field("checked_count", &self.checked_count)
            .finish()
    }
}

/// Collect the values of all checked items of `tree`, in pre-order.
pub fn selected_values(tree: &ChecklistTree) -> Vec<Value> {
    tree.selected_values().into_iter().cloned().collect()
}
