//! Checklist nodes.

use serde::Serialize;
use serde_json::Value;

use crate::path::NodePath;
use crate::state::{CheckState, NodeRole};

/// A single entry in a built checklist tree.
///
/// The shape fields (`path`, `role`, `label`, `value`, `children`) are fixed
/// at construction; only `state` changes, and only through the propagator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub(crate) path: NodePath,
    pub(crate) role: NodeRole,
    pub(crate) label: String,
    pub(crate) value: Option<Value>,
    pub(crate) state: CheckState,
    pub(crate) children: Vec<NodePath>,
}

impl Node {
    pub(crate) fn new(path: NodePath, role: NodeRole, label: String, value: Option<Value>) -> Self {
        Self {
            path,
            role,
            label,
            value,
            state: CheckState::Checked,
            children: Vec::new(),
        }
    }

    /// Position of the node in the tree.
    pub fn path(&self) -> &NodePath {
        &self.path
    }

    /// Zero-based depth; root entries and the check-all item have depth 0.
    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    /// Display text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Payload of an item or of the check-all item. Group headers carry none.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn state(&self) -> CheckState {
        self.state
    }

    /// Paths of the immediate children, in order.
    pub fn children(&self) -> &[NodePath] {
        &self.children
    }

    /// Returns `true` for selectable leaves.
    pub fn is_item(&self) -> bool {
        matches!(self.role, NodeRole::Item)
    }
}
