//! Check-state propagation.
//!
//! A toggle is applied in three steps:
//!
//! 1. The target is set. A group header pushes its new state down to every
//!    descendant; the check-all item pushes it to every node in the tree.
//! 2. Each ancestor of the target is re-derived from its immediate
//!    children, closest ancestor first. Once one ancestor resolves to
//!    `Indeterminate`, every ancestor above it is `Indeterminate` too.
//! 3. The check-all item, if present, becomes `Checked` exactly when every
//!    other node is `Checked`.
//!
//! The target path is resolved before anything is written, so a failed
//! toggle leaves the tree untouched.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::logging::{span_names, targets};
use crate::node::Node;
use crate::path::NodePath;
use crate::state::{CheckState, NodeRole};
use crate::tree::ChecklistTree;

/// Aggregate the states of a group's immediate children.
///
/// All checked gives `Checked`, all unchecked gives `Unchecked`, anything
/// else is mixed: `Indeterminate` when allowed, `Unchecked` otherwise. A
/// group with no children is `Unchecked`.
pub fn aggregate(children: impl IntoIterator<Item = CheckState>, allow_indeterminate: bool) -> CheckState {
    let mut any = false;
    let mut all_checked = true;
    let mut all_unchecked = true;

    for state in children {
        any = true;
        all_checked &= state.is_checked();
        all_unchecked &= state.is_unchecked();
    }

    if !any || all_unchecked {
        CheckState::Unchecked
    } else if all_checked {
        CheckState::Checked
    } else if allow_indeterminate {
        CheckState::Indeterminate
    } else {
        CheckState::Unchecked
    }
}

impl ChecklistTree {
    /// Apply one user interaction: set the node at `path` to `checked`.
    ///
    /// Returns every node whose state changed, in pre-order. Fails with
    /// `InvalidNodeReference` if no node exists at `path`.
    pub fn toggle(&mut self, path: &NodePath, checked: bool) -> Result<Vec<Node>> {
        let target = self.slot_of(path)?;
        let _span = tracing::trace_span!(target: targets::PROPAGATE, span_names::TOGGLE, %path, checked)
            .entered();

        let state = CheckState::from(checked);
        let mut changed = BTreeSet::new();

        match self.nodes[target].role {
            NodeRole::CheckAll => {
                for slot in 0..self.nodes.len() {
                    self.set_state(slot, state, &mut changed);
                }
            }
            NodeRole::GroupHeader => {
                for slot in target..self.subtree_end[target] {
                    self.set_state(slot, state, &mut changed);
                }
                self.refresh_ancestors(target, &mut changed);
                self.refresh_check_all(&mut changed);
            }
            NodeRole::Item => {
                self.set_state(target, state, &mut changed);
                self.refresh_ancestors(target, &mut changed);
                self.refresh_check_all(&mut changed);
            }
        }

        tracing::trace!(target: targets::PROPAGATE, changed = changed.len(), "toggle applied");
        Ok(changed.into_iter().map(|slot| self.nodes[slot].clone()).collect())
    }

    /// Toggle the node addressed by a dotted level string such as `1.2`.
    pub fn toggle_level(&mut self, level: &str, checked: bool) -> Result<Vec<Node>> {
        let path: NodePath = level.parse()?;
        self.toggle(&path, checked)
    }

    /// Apply a checkbox click on the node at `path`.
    ///
    /// A checked node becomes unchecked; unchecked and indeterminate nodes
    /// become checked.
    pub fn click(&mut self, path: &NodePath) -> Result<Vec<Node>> {
        let next = self.state(path)?.clicked();
        self.toggle(path, next.is_checked())
    }

    fn set_state(&mut self, slot: usize, state: CheckState, changed: &mut BTreeSet<usize>) {
        let node = &mut self.nodes[slot];
        if node.state == state {
            return;
        }

        if !node.role.is_check_all() {
            if node.state.is_checked() {
                self.checked_count -= 1;
            } else if state.is_checked() {
                self.checked_count += 1;
            }
        }

        node.state = state;
        changed.insert(slot);
    }

    fn refresh_ancestors(&mut self, slot: usize, changed: &mut BTreeSet<usize>) {
        let mut current = self.parents[slot];

        // An indeterminate child makes its group indeterminate, so the
        // state cascades to every ancestor above the first mixed group.
        while let Some(group) = current {
            let state = aggregate(
                self.child_slots[group].iter().map(|&child| self.nodes[child].state),
                self.allow_indeterminate,
            );
            self.set_state(group, state, changed);
            current = self.parents[group];
        }
    }

    fn refresh_check_all(&mut self, changed: &mut BTreeSet<usize>) {
        if let Some(slot) = self.check_all {
            let total = self.nodes.len() - 1;
            let state = CheckState::from(self.checked_count == total);
            self.set_state(slot, state, changed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CheckAllItem, ChecklistConfig};
    use crate::error::ChecklistError;
    use crate::spec::{ChecklistSpec, EntrySpec};

    fn tree(allow_indeterminate: bool, check_all: bool) -> ChecklistTree {
        let spec = ChecklistSpec::new([
            EntrySpec::group(
                "Root",
                [
                    EntrySpec::group("G1", ["a".into(), "b".into()]),
                    EntrySpec::leaf("c"),
                ],
            ),
            EntrySpec::leaf("d"),
        ]);
        let mut config = ChecklistConfig::new().with_allow_indeterminate(allow_indeterminate);
        if check_all {
            config = config.with_check_all_item(CheckAllItem::default());
        }
        ChecklistTree::build(&spec, &config)
    }

    fn state(tree: &ChecklistTree, path: &[u32]) -> CheckState {
        tree.state(&NodePath::from(path.to_vec())).unwrap()
    }

    #[test]
    fn test_aggregate() {
        use CheckState::*;
        assert_eq!(aggregate([Checked, Checked], true), Checked);
        assert_eq!(aggregate([Unchecked, Unchecked], true), Unchecked);
        assert_eq!(aggregate([Checked, Unchecked], true), Indeterminate);
        assert_eq!(aggregate([Checked, Unchecked], false), Unchecked);
        assert_eq!(aggregate([Checked, Indeterminate], true), Indeterminate);
        assert_eq!(aggregate([Indeterminate], true), Indeterminate);
        assert_eq!(aggregate([], true), Unchecked);
        assert_eq!(aggregate([], false), Unchecked);
    }

    #[test]
    fn test_item_toggle_reports_changes_in_order() {
        let mut tree = tree(true, true);
        let changed = tree.toggle(&NodePath::from([1, 1, 2]), false).unwrap();
        let paths: Vec<_> = changed.iter().map(|n| n.path().to_string()).collect();
        assert_eq!(paths, ["0", "1", "1.1", "1.1.2"]);
        assert_eq!(changed[0].state(), CheckState::Unchecked);
        assert_eq!(changed[1].state(), CheckState::Indeterminate);
    }

    #[test]
    fn test_unchanged_toggle_reports_nothing() {
        let mut tree = tree(false, false);
        let changed = tree.toggle(&NodePath::from([2]), true).unwrap();
        assert!(changed.is_empty());
    }

    #[test]
    fn test_group_toggle_cascades_down_and_up() {
        let mut tree = tree(true, false);
        tree.toggle(&NodePath::from([1, 1]), false).unwrap();
        assert_eq!(state(&tree, &[1, 1, 1]), CheckState::Unchecked);
        assert_eq!(state(&tree, &[1, 1, 2]), CheckState::Unchecked);
        assert_eq!(state(&tree, &[1]), CheckState::Indeterminate);

        tree.toggle(&NodePath::from([1]), true).unwrap();
        for path in [vec![1], vec![1, 1], vec![1, 1, 1], vec![1, 1, 2], vec![1, 2]] {
            assert_eq!(state(&tree, &path), CheckState::Checked);
        }
    }

    #[test]
    fn test_indeterminate_cascades_upward() {
        let mut tree = tree(true, false);
        tree.toggle(&NodePath::from([1, 1, 1]), false).unwrap();
        assert_eq!(state(&tree, &[1, 1]), CheckState::Indeterminate);
        assert_eq!(state(&tree, &[1]), CheckState::Indeterminate);

        tree.toggle(&NodePath::from([1, 2]), false).unwrap();
        assert_eq!(state(&tree, &[1]), CheckState::Indeterminate);

        tree.toggle(&NodePath::from([1, 1, 2]), false).unwrap();
        assert_eq!(state(&tree, &[1, 1]), CheckState::Unchecked);
        assert_eq!(state(&tree, &[1]), CheckState::Unchecked);
    }

    #[test]
    fn test_check_all_follows_every_node() {
        let mut tree = tree(false, true);
        tree.toggle(&NodePath::from([2]), false).unwrap();
        assert_eq!(state(&tree, &[0]), CheckState::Unchecked);

        tree.toggle(&NodePath::from([2]), true).unwrap();
        assert_eq!(state(&tree, &[0]), CheckState::Checked);

        tree.toggle(&NodePath::check_all(), false).unwrap();
        assert!(tree.nodes().iter().all(|n| n.state() == CheckState::Unchecked));
        assert!(tree.selected_values().is_empty());
    }

    #[test]
    fn test_click() {
        let mut tree = tree(true, false);
        tree.click(&NodePath::from([1, 1, 1])).unwrap();
        assert_eq!(state(&tree, &[1, 1]), CheckState::Indeterminate);

        tree.click(&NodePath::from([1, 1])).unwrap();
        assert_eq!(state(&tree, &[1, 1]), CheckState::Checked);
        assert_eq!(state(&tree, &[1, 1, 1]), CheckState::Checked);
    }

    #[test]
    fn test_invalid_reference_leaves_tree_untouched() {
        let mut tree = tree(true, false);
        let before: Vec<_> = tree.nodes().iter().map(|n| n.state()).collect();

        let err = tree.toggle(&NodePath::from([3]), false).unwrap_err();
        assert_eq!(err, ChecklistError::InvalidNodeReference { path: "3".into() });

        let err = tree.toggle(&NodePath::check_all(), false).unwrap_err();
        assert!(matches!(err, ChecklistError::InvalidNodeReference { .. }));

        for level in ["1..1", " 1 . 02 ", "01.1", "1.\t2"] {
            assert!(tree.toggle_level(level, false).is_err(), "{level:?} should be rejected");
        }

        let after: Vec<_> = tree.nodes().iter().map(|n| n.state()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_level() {
        let mut tree = tree(false, false);
        let changed = tree.toggle_level("1.2", false).unwrap();
        assert_eq!(changed.len(), 2);
        assert_eq!(state(&tree, &[1]), CheckState::Unchecked);
    }
}
