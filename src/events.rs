//! Change notification shared by the registry and the drag operation store.
//!
//! Listeners are plain callbacks. Identity is the `Arc` itself: the same
//! `Arc` passed to [`ChangeEmitter::add`] must be passed to
//! [`ChangeEmitter::remove`]. Dispatch iterates over a snapshot, so a listener
//! may subscribe or unsubscribe while it is being notified.

use parking_lot::Mutex;
use std::sync::Arc;

/// Callback invoked on every change.
pub type ChangeListener = Arc<dyn Fn() + Send + Sync>;

/// Wrap a closure as a [`ChangeListener`].
pub fn listener(f: impl Fn() + Send + Sync + 'static) -> ChangeListener {
    Arc::new(f)
}

#[derive(Default)]
pub struct ChangeEmitter {
    listeners: Mutex<Vec<ChangeListener>>,
}

impl ChangeEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `listener`. Adding the same listener twice notifies it twice.
    pub fn add(&self, listener: &ChangeListener) {
        self.listeners.lock().push(Arc::clone(listener));
    }

    /// Unsubscribe every registration of `listener`. Unknown listeners are ignored.
    pub fn remove(&self, listener: &ChangeListener) {
        self.listeners
            .lock()
            .retain(|existing| !Arc::ptr_eq(existing, listener));
    }

    /// Notify all listeners synchronously, in subscription order.
    pub fn emit(&self) {
        let snapshot = self.listeners.lock().clone();
        tracing::trace!(listeners = snapshot.len(), "Emitting change");
        for listener in snapshot {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }
}

impl std::fmt::Debug for ChangeEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeEmitter")
            .field("listeners", &self.len())
            .finish()
    }
}
