//! Forwarding state changes to the rendered rows.
//!
//! The presentation layer implements [`RowSink`] for whatever holds its
//! visual rows. [`apply_changes`] pushes a mutated-node list into a sink,
//! and [`connect_sink`] keeps a shared sink updated from a widget's
//! `states_changed` signal.

use std::sync::Arc;

use group_checklist_core::{CheckState, Node, NodePath};
use parking_lot::Mutex;

use crate::signal::{ConnectionId, Signal};

/// Receives row state updates.
pub trait RowSink {
    /// Show `state` on the row for `path`.
    fn set_state(&mut self, path: &NodePath, state: CheckState);
}

/// Push every changed node's state into `sink`, in order.
pub fn apply_changes<S: RowSink + ?Sized>(sink: &mut S, changed: &[Node]) {
    for node in changed {
        sink.set_state(node.path(), node.state());
    }
}

/// Keep `sink` updated from `signal` until the returned connection is
/// disconnected.
pub fn connect_sink<S>(signal: &Signal<Vec<Node>>, sink: Arc<Mutex<S>>) -> ConnectionId
where
    S: RowSink + Send + 'static,
{
    signal.connect(move |changed| apply_changes(&mut *sink.lock(), changed))
}
