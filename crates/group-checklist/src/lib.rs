//! Dropdown group checklist widget.
//!
//! A closed, select-like control that opens a dropdown holding a nested
//! checklist of groups and items. Check states are kept consistent by
//! [`group_checklist_core`]; this crate adds what a widget needs on top:
//!
//! - **Signals**: `states_changed`, `selection_changed`, `opened`, `closed`
//! - **Presentation options**: placeholder, maximum drop height, indent and
//!   open/close effect, read leniently from the same option object
//! - **Layout**: dropdown sizing through an injected [`TextMeasure`] and
//!   below/above placement
//! - **Row sync**: a [`RowSink`] adapter that applies changed nodes to the
//!   rendered rows

mod layout;
pub mod logging;
pub mod options;
mod signal;
pub mod sync;
mod widget;

pub use layout::{
    DropdownGeometry, Placement, Rect, RowMetrics, TextMeasure, dropdown_geometry, place_dropdown,
};
pub use options::{DropdownEffect, DropdownOptions, EffectKind, EffectSpeed};
pub use signal::{ConnectionId, Signal};
pub use sync::{RowSink, apply_changes, connect_sink};
pub use widget::{DropdownPosition, GroupChecklist, RowView};

pub use group_checklist_core::{
    CheckAllItem, CheckState, ChecklistConfig, ChecklistError, ChecklistSpec, ChecklistTree,
    EntrySpec, Node, NodePath, NodeRole, Result, Value,
};
