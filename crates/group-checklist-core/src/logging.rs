//! Logging and debugging facilities for checklist trees.
//!
//! This module provides:
//! - Target and span names for filtering `tracing` output by subsystem
//! - Debug visualization of a built tree and its check states
//!
//! # Tracing Integration
//!
//! The model emits `tracing` events but never installs a subscriber. To see
//! logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("group_checklist_core=trace")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use group_checklist_core::{ChecklistConfig, ChecklistSpec, ChecklistTree, EntrySpec};
//! use group_checklist_core::logging::{ChecklistTreeDebug, TreeFormatOptions};
//!
//! let spec = ChecklistSpec::new([EntrySpec::group("Fruit", ["Apple".into()])]);
//! let tree = ChecklistTree::build(&spec, &ChecklistConfig::default());
//!
//! let output = ChecklistTreeDebug::with_options(TreeFormatOptions::minimal()).format_tree(&tree);
//! assert!(output.contains("Apple"));
//! ```

use std::fmt;

use crate::node::Node;
use crate::state::{CheckState, NodeRole};
use crate::tree::ChecklistTree;

/// Span names used by the model.
pub mod span_names {
    /// Tree construction span.
    pub const BUILD: &str = "build";
    /// Toggle propagation span.
    pub const TOGGLE: &str = "toggle";
}

/// Target names for log filtering.
pub mod targets {
    /// Crate-wide target.
    pub const CORE: &str = "group_checklist_core";
    /// Tree builder target.
    pub const BUILDER: &str = "group_checklist_core::builder";
    /// Propagator target.
    pub const PROPAGATE: &str = "group_checklist_core::propagate";
    /// Configuration reader target.
    pub const CONFIG: &str = "group_checklist_core::config";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Single-line representation with nested parentheses.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show dotted node paths.
    pub show_paths: bool,
    /// Whether to show node roles.
    pub show_roles: bool,
    /// Whether to show check-state markers.
    pub show_states: bool,
    /// Maximum depth to render (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_paths: true,
            show_roles: false,
            show_states: true,
            max_depth: None,
        }
    }
}

impl TreeFormatOptions {
    /// Options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_roles: true,
            ..Default::default()
        }
    }

    /// Options for labels only.
    pub fn minimal() -> Self {
        Self {
            show_paths: false,
            show_roles: false,
            show_states: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing a checklist tree.
#[derive(Debug, Clone, Default)]
pub struct ChecklistTreeDebug {
    options: TreeFormatOptions,
}

impl ChecklistTreeDebug {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format the whole tree.
    pub fn format_tree(&self, tree: &ChecklistTree) -> String {
        TreeDisplay {
            options: &self.options,
            tree,
        }
        .to_string()
    }
}

struct TreeDisplay<'a> {
    options: &'a TreeFormatOptions,
    tree: &'a ChecklistTree,
}

impl TreeDisplay<'_> {
    fn visible(&self, node: &Node) -> bool {
        self.options.max_depth.is_none_or(|max| node.depth() <= max)
    }

    fn write_label(&self, f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
        if self.options.show_states {
            f.write_str(state_marker(node.state()))?;
            f.write_str(" ")?;
        }
        if self.options.show_paths {
            write!(f, "{} ", node.path())?;
        }
        f.write_str(if node.label().is_empty() { "(untitled)" } else { node.label() })?;
        if self.options.show_roles {
            write!(f, " ({})", role_name(node.role()))?;
        }
        Ok(())
    }

    fn write_lines(&self, f: &mut fmt::Formatter<'_>, slot: usize, prefix: &str, is_last: bool) -> fmt::Result {
        let tree = self.tree;
        let node = &tree.nodes[slot];
        if !self.visible(node) {
            return Ok(());
        }

        let (tee, corner, bar) = match self.options.style {
            TreeStyle::Unicode => ("\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} ", "\u{2502}   "),
            _ => ("|-- ", "`-- ", "|   "),
        };

        let child_prefix = if tree.parents[slot].is_none() {
            f.write_str(prefix)?;
            String::new()
        } else {
            write!(f, "{prefix}{}", if is_last { corner } else { tee })?;
            format!("{prefix}{}", if is_last { "    " } else { bar })
        };
        self.write_label(f, node)?;
        f.write_str("\n")?;

        let children = &tree.child_slots[slot];
        for (i, &child) in children.iter().enumerate() {
            self.write_lines(f, child, &child_prefix, i + 1 == children.len())?;
        }
        Ok(())
    }

    fn write_compact(&self, f: &mut fmt::Formatter<'_>, slot: usize) -> fmt::Result {
        let node = &self.tree.nodes[slot];
        self.write_label(f, node)?;

        let children: Vec<usize> = self.tree.child_slots[slot]
            .iter()
            .copied()
            .filter(|&child| self.visible(&self.tree.nodes[child]))
            .collect();
        if !children.is_empty() {
            f.write_str("(")?;
            for (i, child) in children.into_iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                self.write_compact(f, child)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots: Vec<usize> = (0..self.tree.nodes.len())
            .filter(|&slot| self.tree.parents[slot].is_none())
            .collect();

        if roots.is_empty() {
            return f.write_str("(empty)\n");
        }

        if self.options.style == TreeStyle::Compact {
            for (i, slot) in roots.into_iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                self.write_compact(f, slot)?;
            }
            return f.write_str("\n");
        }

        for slot in roots {
            self.write_lines(f, slot, "", true)?;
        }
        Ok(())
    }
}

fn state_marker(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Indeterminate => "[-]",
        CheckState::Unchecked => "[ ]",
    }
}

fn role_name(role: NodeRole) -> &'static str {
    match role {
        NodeRole::Item => "item",
        NodeRole::GroupHeader => "group",
        NodeRole::CheckAll => "check-all",
    }
}
