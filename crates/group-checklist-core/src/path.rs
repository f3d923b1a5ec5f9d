//! Hierarchical node paths.
//!
//! A [`NodePath`] identifies a checklist node by the 1-based sibling index at
//! every level from the root down, e.g. `[2, 1, 3]` is the third child of the
//! first child of the second root entry. Paths render as dotted "level"
//! strings (`2.1.3`) and parse back from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChecklistError;

/// Sibling index reserved for the check-all pseudo-item.
pub const CHECK_ALL_INDEX: u32 = 0;

/// Position of a node in the checklist tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<u32>);

impl NodePath {
    /// The empty path, i.e. the position above all root entries.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of the check-all pseudo-item.
    pub fn check_all() -> Self {
        Self(vec![CHECK_ALL_INDEX])
    }

    /// Create a path from sibling indices.
    pub fn from_indices(indices: impl IntoIterator<Item = u32>) -> Self {
        Self(indices.into_iter().collect())
    }

    /// The sibling indices, outermost first.
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Zero-based depth. Root entries have depth 0.
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// The enclosing group's path, or `None` for root entries.
    pub fn parent(&self) -> Option<NodePath> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Extend this path with a 1-based sibling index.
    pub fn child(&self, index: u32) -> NodePath {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// Returns `true` if `other` lies strictly below this path.
    pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
        other.0.len() > self.0.len() && other.0.starts_with(&self.0)
    }

    /// Returns `true` for the check-all pseudo-item's path.
    pub fn is_check_all(&self) -> bool {
        self.0 == [CHECK_ALL_INDEX]
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = ChecklistError;

    /// Parse a dotted level string such as `1.4.3`.
    ///
    /// Segments are plain decimal numbers without sign, whitespace or
    /// leading zeros. `0` is accepted only as the whole string, naming the
    /// check-all item.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "0" {
            return Ok(Self::check_all());
        }

        s.split('.')
            .map(|segment| {
                let well_formed = segment.bytes().all(|b| b.is_ascii_digit())
                    && segment.bytes().next().is_some_and(|b| b != b'0');
                if !well_formed {
                    return Err(ChecklistError::malformed_path(s));
                }
                segment
                    .parse::<u32>()
                    .map_err(|_| ChecklistError::malformed_path(s))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Vec<u32>> for NodePath {
    fn from(indices: Vec<u32>) -> Self {
        Self(indices)
    }
}

impl<const N: usize> From<[u32; N]> for NodePath {
    fn from(indices: [u32; N]) -> Self {
        Self(indices.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_and_parent() {
        let path = NodePath::from([2, 1, 3]);
        assert_eq!(path.depth(), 2);
        assert_eq!(path.parent(), Some(NodePath::from([2, 1])));
        assert_eq!(NodePath::from([2]).parent(), None);
        assert_eq!(NodePath::from([2]).depth(), 0);
    }

    #[test]
    fn test_child_and_ancestry() {
        let group = NodePath::from([1]);
        let item = group.child(2);
        assert_eq!(item, NodePath::from([1, 2]));
        assert!(group.is_ancestor_of(&item));
        assert!(!item.is_ancestor_of(&group));
        assert!(!group.is_ancestor_of(&group));
        assert!(!NodePath::from([1]).is_ancestor_of(&NodePath::from([10, 1])));
        assert!(NodePath::root().is_ancestor_of(&group));
    }

    #[test]
    fn test_level_string() {
        let path: NodePath = "1.4.3".parse().unwrap();
        assert_eq!(path.indices(), &[1, 4, 3]);
        assert_eq!(path.to_string(), "1.4.3");
        assert!("0".parse::<NodePath>().unwrap().is_check_all());
    }

    #[test]
    fn test_malformed_level_string() {
        for raw in [
            "", " ", "1..2", "1.a", "-1", "1.2.", "4294967296", " 1 . 02 ", "01.1", "1.\t2", "1.0",
            "0.1", "00", "+1", " 0",
        ] {
            let err = raw.parse::<NodePath>().unwrap_err();
            assert!(
                matches!(err, ChecklistError::InvalidNodeReference { .. }),
                "{raw:?} should be rejected"
            );
        }
    }
}
