//! Check states and node roles.

use serde::{Deserialize, Serialize};

/// The check state of a checklist node.
///
/// Nodes can be in one of three states:
/// - `Unchecked`: The node is not selected
/// - `Indeterminate`: Some, but not all, of a group's children are selected
/// - `Checked`: The node is fully selected
///
/// `Indeterminate` only ever appears on group headers, and only when the
/// tree was built with indeterminate support enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    /// The node is not checked.
    #[default]
    Unchecked,
    /// The node summarizes a mix of checked and unchecked children.
    Indeterminate,
    /// The node is checked.
    Checked,
}

impl CheckState {
    /// Returns `true` if the state is `Checked`.
    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }

    /// Returns `true` if the state is `Unchecked`.
    pub fn is_unchecked(&self) -> bool {
        matches!(self, CheckState::Unchecked)
    }

    /// Returns `true` if the state is `Indeterminate`.
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, CheckState::Indeterminate)
    }

    /// The state a checkbox click moves to.
    ///
    /// A checked box becomes unchecked; unchecked and indeterminate boxes
    /// become checked.
    pub fn clicked(&self) -> CheckState {
        match self {
            CheckState::Checked => CheckState::Unchecked,
            CheckState::Unchecked | CheckState::Indeterminate => CheckState::Checked,
        }
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// What a node represents in the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// A selectable leaf carrying a value.
    Item,
    /// A category whose state is derived from its children.
    GroupHeader,
    /// The synthetic root-level master toggle.
    CheckAll,
}

impl NodeRole {
    /// Returns `true` for group headers.
    pub fn is_group(&self) -> bool {
        matches!(self, NodeRole::GroupHeader)
    }

    /// Returns `true` for the check-all pseudo-item.
    pub fn is_check_all(&self) -> bool {
        matches!(self, NodeRole::CheckAll)
    }
}
