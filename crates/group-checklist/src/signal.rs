//! Signals for widget notifications.
//!
//! A [`Signal`] holds any number of connected slots (closures) and invokes
//! each of them, in connection order, when the signal is emitted. Slots run
//! directly on the emitting thread.
//!
//! # Example
//!
//! ```
//! use group_checklist::Signal;
//!
//! let opened = Signal::<bool>::new();
//! let id = opened.connect(|open| println!("open: {open}"));
//! opened.emit(true);
//! opened.disconnect(id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// Slots are collected before any of them runs, so a slot may connect or
    /// disconnect on this same signal without deadlocking.
    pub fn emit(&self, args: Args) {
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_connect_emit_disconnect() {
        let signal = Signal::<usize>::new();
        let total = Arc::new(AtomicUsize::new(0));

        let sink = total.clone();
        let id = signal.connect(move |n| {
            sink.fetch_add(*n, Ordering::SeqCst);
        });
        assert_eq!(signal.connection_count(), 1);

        signal.emit(3);
        signal.emit(4);
        assert_eq!(total.load(Ordering::SeqCst), 7);

        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(10);
        assert_eq!(total.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));
        for _ in 0..2 {
            let sink = count.clone();
            signal.connect(move |_| {
                sink.fetch_add(1, Ordering::SeqCst);
            });
        }

        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 2);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reentrant_disconnect() {
        let signal = Arc::new(Signal::<()>::new());
        let weak = Arc::downgrade(&signal);
        signal.connect(move |_| {
            if let Some(signal) = weak.upgrade() {
                signal.disconnect_all();
            }
        });
        signal.emit(());
        assert_eq!(signal.connection_count(), 0);
    }
}
