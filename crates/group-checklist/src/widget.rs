//! The dropdown group checklist widget.
//!
//! [`GroupChecklist`] owns one checklist tree and everything the closed
//! control and its dropdown need around it: presentation options, the open
//! flag and signals that announce state changes.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use group_checklist::{GroupChecklist, NodePath};
//! use serde_json::json;
//!
//! let mut checklist = GroupChecklist::from_json(
//!     &json!([{"text": "Fruit", "items": ["Apple", "Banana"]}, "Carrot"]),
//!     &json!({"allowIndeterminate": true, "placeholder": "Groceries"}),
//! )?;
//!
//! let updates = Arc::new(AtomicUsize::new(0));
//! let counter = updates.clone();
//! checklist.states_changed.connect(move |nodes| {
//!     counter.fetch_add(nodes.len(), Ordering::SeqCst);
//! });
//!
//! checklist.toggle(&NodePath::from([1, 2]), false)?;
//! assert_eq!(updates.load(Ordering::SeqCst), 2);
//! assert_eq!(checklist.display_text(), "Groceries");
//! # Ok::<(), group_checklist::ChecklistError>(())
//! ```

use group_checklist_core::{
    CheckState, ChecklistConfig, ChecklistSpec, ChecklistTree, Node, NodePath, NodeRole, Result,
    Value,
};

use crate::layout::{
    DropdownGeometry, Placement, Rect, RowMetrics, TextMeasure, dropdown_geometry, place_dropdown,
};
use crate::logging::targets;
use crate::options::DropdownOptions;
use crate::signal::Signal;

/// What the presentation layer needs to draw one row of the dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub path: NodePath,
    pub label: String,
    pub role: NodeRole,
    pub state: CheckState,
    pub depth: usize,
    /// Left offset in pixels: the configured indent times the depth.
    pub indent: f32,
}

/// Where an open dropdown sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownPosition {
    pub placement: Placement,
    pub x: f32,
    pub y: f32,
}

/// A select-like control whose dropdown holds a hierarchical checklist.
///
/// # Signals
///
/// - `states_changed(Vec<Node>)`: Emitted after a toggle with every node
///   whose state changed, in pre-order
/// - `selection_changed(Vec<Value>)`: Emitted when the set of checked item
///   values changed
/// - `opened(DropdownPosition)`: Emitted when the dropdown opens
/// - `closed()`: Emitted when the dropdown closes
pub struct GroupChecklist {
    tree: ChecklistTree,
    options: DropdownOptions,
    position: Option<DropdownPosition>,

    /// Signal emitted with the nodes changed by a toggle.
    pub states_changed: Signal<Vec<Node>>,
    /// Signal emitted with the new selection when it changes.
    pub selection_changed: Signal<Vec<Value>>,
    /// Signal emitted when the dropdown opens.
    pub opened: Signal<DropdownPosition>,
    /// Signal emitted when the dropdown closes.
    pub closed: Signal<()>,
}

impl GroupChecklist {
    /// Build the widget for a specification.
    pub fn new(spec: &ChecklistSpec, config: &ChecklistConfig, options: DropdownOptions) -> Self {
        Self::with_tree(ChecklistTree::build(spec, config), options)
    }

    /// Build the widget from a JSON data array and a JSON option object.
    ///
    /// The option object carries both the core options and the presentation
    /// options. Only the data can cause an error.
    pub fn from_json(data: &Value, options: &Value) -> Result<Self> {
        let spec = ChecklistSpec::from_json(data)?;
        Ok(Self::new(
            &spec,
            &ChecklistConfig::from_json(options),
            DropdownOptions::from_json(options),
        ))
    }

    /// Wrap an already built tree.
    pub fn with_tree(tree: ChecklistTree, options: DropdownOptions) -> Self {
        Self {
            tree,
            options,
            position: None,
            states_changed: Signal::new(),
            selection_changed: Signal::new(),
            opened: Signal::new(),
            closed: Signal::new(),
        }
    }

    // =========================================================================
    // Checklist
    // =========================================================================

    /// The underlying tree.
    pub fn tree(&self) -> &ChecklistTree {
        &self.tree
    }

    /// The presentation options.
    pub fn options(&self) -> &DropdownOptions {
        &self.options
    }

    /// Set the node at `path` to `checked` and propagate.
    ///
    /// Returns the changed nodes; the same list is emitted through
    /// `states_changed` when it is not empty.
    pub fn toggle(&mut self, path: &NodePath, checked: bool) -> Result<Vec<Node>> {
        let changed = self.tree.toggle(path, checked)?;
        self.announce(&changed);
        Ok(changed)
    }

    /// Apply a checkbox click on the node at `path`.
    pub fn click(&mut self, path: &NodePath) -> Result<Vec<Node>> {
        let changed = self.tree.click(path)?;
        self.announce(&changed);
        Ok(changed)
    }

    /// Values of all checked items, in pre-order.
    pub fn selected_values(&self) -> Vec<Value> {
        group_checklist_core::selected_values(&self.tree)
    }

    /// Text shown in the closed control.
    pub fn display_text(&self) -> &str {
        &self.options.placeholder
    }

    /// One row per node, in pre-order.
    pub fn rows(&self) -> Vec<RowView> {
        self.tree
            .nodes()
            .iter()
            .map(|node| RowView {
                path: node.path().clone(),
                label: node.label().to_string(),
                role: node.role(),
                state: node.state(),
                depth: node.depth(),
                indent: self.options.indent * node.depth() as f32,
            })
            .collect()
    }

    fn announce(&self, changed: &[Node]) {
        if changed.is_empty() {
            return;
        }

        tracing::trace!(target: targets::WIDGET, changed = changed.len(), "checklist states changed");
        self.states_changed.emit(changed.to_vec());

        if changed.iter().any(Node::is_item) {
            self.selection_changed.emit(self.selected_values());
        }
    }

    // =========================================================================
    // Dropdown
    // =========================================================================

    /// Size the dropdown for the current rows.
    pub fn geometry(&self, measure: &impl TextMeasure, metrics: &RowMetrics) -> DropdownGeometry {
        dropdown_geometry(&self.rows(), measure, metrics, self.options.max_drop_height)
    }

    /// Returns `true` while the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.position.is_some()
    }

    /// Where the open dropdown sits, if it is open.
    pub fn position(&self) -> Option<DropdownPosition> {
        self.position
    }

    /// Open the dropdown next to `anchor`, the closed control's bounds.
    ///
    /// Opening an already open dropdown re-positions it.
    pub fn open(&mut self, anchor: Rect, viewport_height: f32, geometry: &DropdownGeometry) -> DropdownPosition {
        let (placement, x, y) = place_dropdown(anchor, geometry.height, viewport_height);
        let position = DropdownPosition { placement, x, y };
        self.position = Some(position);

        tracing::debug!(target: targets::WIDGET, ?placement, x, y, "dropdown opened");
        self.opened.emit(position);
        position
    }

    /// Close the dropdown. Does nothing if it is already closed.
    pub fn close(&mut self) {
        if self.position.take().is_some() {
            tracing::debug!(target: targets::WIDGET, "dropdown closed");
            self.closed.emit(());
        }
    }

    /// Open a closed dropdown or close an open one, as a click on the
    /// control does. Returns the new position when it opened.
    pub fn toggle_dropdown(
        &mut self,
        anchor: Rect,
        viewport_height: f32,
        geometry: &DropdownGeometry,
    ) -> Option<DropdownPosition> {
        if self.is_open() {
            self.close();
            None
        } else {
            Some(self.open(anchor, viewport_height, geometry))
        }
    }
}

impl std::fmt::Debug for GroupChecklist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupChecklist")
            .field("tree", &self.tree)
            .field("options", &self.options)
            .field("position", &self.position)
            .finish()
    }
}
