//! Capability traits implemented by application widgets.
//!
//! A widget that can be dragged implements [`DragSource`]; a widget that can
//! accept drops implements [`DropTarget`]. Neither knows about the other: the
//! [`Coordinator`] passed to every callback is the only shared view.
//!
//! Callbacks take `&self`, so implementations that keep per-drag state use
//! interior mutability (atomics or a `parking_lot::Mutex`).

use crate::coordinator::Coordinator;
use crate::types::Item;

/// A draggable widget.
pub trait DragSource: Send + Sync {
    /// Whether this source is willing to start a drag right now.
    fn can_drag(&self, _coordinator: &Coordinator) -> bool {
        true
    }

    /// Whether this source considers itself the one being dragged.
    ///
    /// The default answers by identity against the pinned source.
    fn is_dragging(&self, coordinator: &Coordinator) -> bool {
        coordinator.is_dragged_source(self)
    }

    /// Produce the dragged item. Must be a JSON object or array.
    fn begin_drag(&self, coordinator: &Coordinator) -> Item;

    /// Cleanup hook run when the drag ends, dropped or not.
    fn end_drag(&self, _coordinator: &Coordinator) {}
}

/// A widget that accepts drops.
pub trait DropTarget: Send + Sync {
    /// Whether this target accepts the current drag. Only consulted when the
    /// dragged item type matches the target's type.
    fn can_drop(&self, _coordinator: &Coordinator) -> bool {
        true
    }

    /// Perform the drop. `None` means "dropped, nothing to report"; `Some`
    /// must carry a JSON object or array.
    fn drop(&self, _coordinator: &Coordinator) -> Option<Item> {
        None
    }
}
