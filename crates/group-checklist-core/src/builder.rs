//! Tree construction.
//!
//! Walks the input specification depth-first, assigning each entry the
//! 1-based sibling index that extends its parent's path. New trees start
//! fully checked. When a check-all item is configured it is placed at path
//! `[0]`, ahead of every root entry.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::ChecklistConfig;
use crate::error::Result;
use crate::logging::{span_names, targets};
use crate::node::Node;
use crate::path::NodePath;
use crate::propagate::aggregate;
use crate::spec::{ChecklistSpec, EntrySpec};
use crate::state::{CheckState, NodeRole};
use crate::tree::ChecklistTree;

/// Build the flattened node list for `spec`, in pre-order.
pub fn build(spec: &ChecklistSpec, config: &ChecklistConfig) -> Vec<Node> {
    ChecklistTree::build(spec, config).nodes
}

impl ChecklistTree {
    /// Build a tree from a specification.
    pub fn build(spec: &ChecklistSpec, config: &ChecklistConfig) -> Self {
        let _span = tracing::debug_span!(target: targets::BUILDER, span_names::BUILD).entered();

        let mut builder = TreeBuilder::default();

        if let Some(item) = &config.check_all_item {
            builder.push(
                NodePath::check_all(),
                NodeRole::CheckAll,
                item.text.clone(),
                Some(item.value.clone()),
                None,
            );
        }

        for (i, entry) in spec.entries().iter().enumerate() {
            builder.push_entry(entry, NodePath::root().child(sibling_index(i)), None);
        }

        let tree = builder.finish(config);
        tracing::debug!(
            target: targets::BUILDER,
            nodes = tree.len(),
            allow_indeterminate = tree.allow_indeterminate,
            check_all = tree.check_all.is_some(),
            "checklist tree built"
        );
        tree
    }

    /// Parse a JSON specification and option object, then build.
    pub fn from_json(data: &Value, options: &Value) -> Result<Self> {
        let spec = ChecklistSpec::from_json(data)?;
        Ok(Self::build(&spec, &ChecklistConfig::from_json(options)))
    }
}

/// 1-based index for the sibling at `position`.
///
/// A level holds at most `u32::MAX` siblings; past that, paths would no
/// longer be unique.
fn sibling_index(position: usize) -> u32 {
    let index = u32::try_from(position + 1);
    debug_assert!(index.is_ok(), "more than u32::MAX siblings at one level");
    index.unwrap_or(u32::MAX)
}

#[derive(Default)]
struct TreeBuilder {
    nodes: Vec<Node>,
    parents: Vec<Option<usize>>,
    child_slots: Vec<Vec<usize>>,
    subtree_end: Vec<usize>,
}

impl TreeBuilder {
    fn push(
        &mut self,
        path: NodePath,
        role: NodeRole,
        label: String,
        value: Option<Value>,
        parent: Option<usize>,
    ) -> usize {
        let slot = self.nodes.len();
        if let Some(parent) = parent {
            self.nodes[parent].children.push(path.clone());
            self.child_slots[parent].push(slot);
        }
        self.nodes.push(Node::new(path, role, label, value));
        self.parents.push(parent);
        self.child_slots.push(Vec::new());
        self.subtree_end.push(slot + 1);
        slot
    }

    fn push_entry(&mut self, entry: &EntrySpec, path: NodePath, parent: Option<usize>) {
        match entry {
            EntrySpec::Group(group) if !group.items.is_empty() => {
                let slot = self.push(
                    path.clone(),
                    NodeRole::GroupHeader,
                    group.text.clone(),
                    None,
                    parent,
                );
                for (i, item) in group.items.iter().enumerate() {
                    self.push_entry(item, path.child(sibling_index(i)), Some(slot));
                }
                self.subtree_end[slot] = self.nodes.len();
            }
            EntrySpec::Group(group) => {
                self.push(
                    path,
                    NodeRole::Item,
                    group.text.clone(),
                    Some(Value::String(group.text.clone())),
                    parent,
                );
            }
            EntrySpec::Leaf(leaf) => {
                self.push(
                    path,
                    NodeRole::Item,
                    leaf.label.clone(),
                    Some(leaf.value.clone()),
                    parent,
                );
            }
        }
    }

    fn finish(self, config: &ChecklistConfig) -> ChecklistTree {
        let index: HashMap<NodePath, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| (node.path.clone(), slot))
            .collect();
        let check_all = self
            .nodes
            .iter()
            .position(|node| node.role == NodeRole::CheckAll);

        let mut tree = ChecklistTree {
            nodes: self.nodes,
            index,
            parents: self.parents,
            child_slots: self.child_slots,
            subtree_end: self.subtree_end,
            check_all,
            allow_indeterminate: config.allow_indeterminate,
            checked_count: 0,
        };
        normalize(&mut tree);
        tree
    }
}

/// Derive every group header from its children, bottom-up, then settle the
/// check-all item and the checked-node count.
fn normalize(tree: &mut ChecklistTree) {
    for slot in (0..tree.nodes.len()).rev() {
        if tree.nodes[slot].role.is_group() {
            let state = aggregate(
                tree.child_slots[slot].iter().map(|&child| tree.nodes[child].state),
                tree.allow_indeterminate,
            );
            tree.nodes[slot].state = state;
        }
    }

    tree.checked_count = tree
        .nodes
        .iter()
        .filter(|node| !node.role.is_check_all() && node.state.is_checked())
        .count();

    if let Some(slot) = tree.check_all {
        let total = tree.nodes.len() - 1;
        tree.nodes[slot].state = CheckState::from(tree.checked_count == total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckAllItem;

    fn fruit_spec() -> ChecklistSpec {
        ChecklistSpec::new([
            EntrySpec::group("Fruit", ["Apple".into(), "Banana".into()]),
            EntrySpec::leaf("Carrot"),
        ])
    }

    fn summary(nodes: &[Node]) -> Vec<(String, NodeRole, &str, CheckState)> {
        nodes
            .iter()
            .map(|n| (n.path().to_string(), n.role(), n.label(), n.state()))
            .collect()
    }

    #[test]
    fn test_build_paths_and_roles() {
        let nodes = build(&fruit_spec(), &ChecklistConfig::default());
        assert_eq!(
            summary(&nodes),
            vec![
                ("1".to_string(), NodeRole::GroupHeader, "Fruit", CheckState::Checked),
                ("1.1".to_string(), NodeRole::Item, "Apple", CheckState::Checked),
                ("1.2".to_string(), NodeRole::Item, "Banana", CheckState::Checked),
                ("2".to_string(), NodeRole::Item, "Carrot", CheckState::Checked),
            ]
        );
        assert_eq!(nodes[0].children(), &[NodePath::from([1, 1]), NodePath::from([1, 2])]);
        assert_eq!(nodes[1].depth(), 1);
        assert!(nodes[0].value().is_none());
        assert_eq!(nodes[3].value(), Some(&Value::from("Carrot")));
    }

    #[test]
    fn test_build_with_check_all_item() {
        let config = ChecklistConfig::new().with_check_all_item(CheckAllItem::new("Everything", -1));
        let tree = ChecklistTree::build(&fruit_spec(), &config);

        let check_all = tree.check_all().unwrap();
        assert_eq!(check_all.path(), &NodePath::check_all());
        assert_eq!(check_all.label(), "Everything");
        assert_eq!(check_all.value(), Some(&Value::from(-1)));
        assert_eq!(check_all.state(), CheckState::Checked);
        assert_eq!(check_all.depth(), 0);
        assert_eq!(tree.nodes()[0].role(), NodeRole::CheckAll);
        assert_eq!(tree.nodes()[1].label(), "Fruit");
    }

    #[test]
    fn test_empty_group_becomes_leaf() {
        let spec = ChecklistSpec::new([EntrySpec::group("Nothing", [])]);
        let nodes = build(&spec, &ChecklistConfig::default());
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].role(), NodeRole::Item);
        assert_eq!(nodes[0].value(), Some(&Value::from("Nothing")));
    }

    #[test]
    fn test_duplicate_labels_keep_distinct_paths() {
        let spec = ChecklistSpec::new([
            EntrySpec::group("Same", ["x".into(), "x".into()]),
            EntrySpec::leaf("Same"),
        ]);
        let tree = ChecklistTree::build(&spec, &ChecklistConfig::default());
        assert!(tree.contains(&NodePath::from([1, 1])));
        assert!(tree.contains(&NodePath::from([1, 2])));
        assert!(tree.contains(&NodePath::from([2])));
    }

    #[test]
    fn test_empty_spec() {
        let tree = ChecklistTree::build(&ChecklistSpec::default(), &ChecklistConfig::default());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_from_json() {
        let tree = ChecklistTree::from_json(
            &serde_json::json!([{"text": "G", "items": ["a", {"text": "H", "items": ["b"]}]}]),
            &serde_json::json!({"allowIndeterminate": true}),
        )
        .unwrap();
        assert!(tree.allow_indeterminate());
        assert_eq!(tree.get(&NodePath::from([1, 2, 1])).unwrap().label(), "b");
        assert_eq!(tree.get(&NodePath::from([1, 2, 1])).unwrap().depth(), 2);
    }

    #[test]
    fn test_sibling_index_is_one_based() {
        assert_eq!(sibling_index(0), 1);
        assert_eq!(sibling_index(41), 42);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "siblings at one level")]
    fn test_sibling_index_past_limit() {
        sibling_index(u32::MAX as usize);
    }
}
