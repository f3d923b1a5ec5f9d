//! Check-state model for hierarchical multi-select checklists.
//!
//! This crate is the presentation-free core of a dropdown group checklist:
//!
//! - **Input specification**: a nested list of leaves and groups, decided
//!   once into [`EntrySpec`] values
//! - **Tree builder**: materializes the specification into a flat, pre-order
//!   [`ChecklistTree`] of [`Node`]s addressed by [`NodePath`]
//! - **Propagator**: applies a toggle and keeps group headers, descendants
//!   and the optional check-all item consistent
//! - **Selection**: reports the values of the checked leaves
//!
//! # Example
//!
//! ```
//! use group_checklist_core::{
//!     CheckState, ChecklistConfig, ChecklistSpec, ChecklistTree, EntrySpec, NodePath,
//! };
//!
//! let spec = ChecklistSpec::new([
//!     EntrySpec::group("Fruit", ["Apple".into(), "Banana".into()]),
//!     EntrySpec::leaf("Carrot"),
//! ]);
//! let mut tree = ChecklistTree::build(&spec, &ChecklistConfig::default());
//!
//! // Unchecking one fruit unchecks the group (indeterminate is disabled)
//! let changed = tree.toggle(&NodePath::from([1, 1]), false)?;
//! assert_eq!(changed.len(), 2);
//! assert_eq!(tree.state(&NodePath::from([1]))?, CheckState::Unchecked);
//! assert_eq!(tree.state(&NodePath::from([2]))?, CheckState::Checked);
//!
//! assert_eq!(tree.selected_labels(), ["Banana", "Carrot"]);
//! # Ok::<(), group_checklist_core::ChecklistError>(())
//! ```

pub mod builder;
pub mod config;
mod error;
pub mod logging;
mod node;
pub mod path;
pub mod propagate;
pub mod spec;
mod state;
mod tree;

pub use builder::build;
pub use config::{CheckAllItem, ChecklistConfig};
pub use error::{ChecklistError, Result};
pub use logging::{ChecklistTreeDebug, TreeFormatOptions, TreeStyle};
pub use node::Node;
pub use path::NodePath;
pub use propagate::aggregate;
pub use spec::{ChecklistSpec, EntrySpec, GroupSpec, LeafSpec};
pub use state::{CheckState, NodeRole};
pub use tree::{ChecklistTree, selected_values};

/// Opaque payload type carried by items.
pub use serde_json::Value;
