//! Coordinator - read-side arbiter of what drag actions are legal right now.
//!
//! The coordinator owns no state. It answers permission queries by combining
//! the [`HandleRegistry`] (who is registered, who is pinned) with the
//! [`DragOperationStore`] (what is being dragged, has it been dropped), and it
//! is the view handed to every [`DragSource`]/[`DropTarget`](crate::handler::DropTarget) callback.
//!
//! Permission checks return `Ok(false)` for ordinary refusals. An `Err` means
//! the caller passed a handle the registry has never seen.

use crate::error::{DragDropError, DragDropResult};
use crate::events::ChangeListener;
use crate::handler::DragSource;
use crate::operation::DragOperationStore;
use crate::profile_scope;
use crate::registry::HandleRegistry;
use crate::types::{DropResult, Item, ItemType, SourceHandle, TargetHandle};
use std::sync::Arc;

pub struct Coordinator {
    registry: Arc<HandleRegistry>,
    store: Arc<DragOperationStore>,
}

impl Coordinator {
    pub fn new(registry: Arc<HandleRegistry>, store: Arc<DragOperationStore>) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &Arc<HandleRegistry> {
        &self.registry
    }

    pub fn store(&self) -> &Arc<DragOperationStore> {
        &self.store
    }

    // ========================================================================
    // Change Notification
    // ========================================================================

    /// Subscribe to changes of both the drag operation and the registry.
    pub fn add_change_listener(&self, listener: &ChangeListener) {
        self.store.add_change_listener(listener);
        self.registry.add_change_listener(listener);
    }

    pub fn remove_change_listener(&self, listener: &ChangeListener) {
        self.store.remove_change_listener(listener);
        self.registry.remove_change_listener(listener);
    }

    // ========================================================================
    // Permissions
    // ========================================================================

    /// Whether `handle` may start a drag. Only one drag may be in flight, so
    /// this is false while any drag is in progress, whatever the source says.
    pub fn can_drag(&self, handle: &SourceHandle) -> DragDropResult<bool> {
        profile_scope!("can_drag");

        let source = self
            .registry
            .get_source(handle, false)
            .ok_or_else(|| DragDropError::UnknownSource(handle.clone()))?;

        if self.is_dragging() {
            tracing::trace!(handle = %handle, "Drag refused: another drag is in progress");
            return Ok(false);
        }

        Ok(source.can_drag(self))
    }

    /// Whether the current drag may be dropped on `handle`.
    ///
    /// Requires a drag in progress that has not been dropped yet, a matching
    /// item type, and the target's consent. The target is not asked when the
    /// types differ.
    pub fn can_drop(&self, handle: &TargetHandle) -> DragDropResult<bool> {
        profile_scope!("can_drop");

        let target = self
            .registry
            .get_target(handle)
            .ok_or_else(|| DragDropError::UnknownTarget(handle.clone()))?;

        if !self.is_dragging() || self.did_drop() {
            return Ok(false);
        }

        let type_matches = self
            .dragged_item_type()
            .is_some_and(|dragged| &dragged == handle.item_type());
        if !type_matches {
            tracing::trace!(handle = %handle, "Drop refused: item type mismatch");
            return Ok(false);
        }

        Ok(target.can_drop(self))
    }

    pub fn can_end_drag(&self) -> bool {
        self.is_dragging()
    }

    // ========================================================================
    // Drag State
    // ========================================================================

    /// Whether any drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.store.is_dragging()
    }

    /// Whether the source behind `handle` is being dragged.
    ///
    /// Never fails: handles of another type answer false without a lookup,
    /// and a handle that resolves to nothing (even through the pinned slot)
    /// answers false as well.
    pub fn is_dragging_source(&self, handle: &SourceHandle) -> bool {
        if !self.is_dragging() {
            return false;
        }

        let type_matches = self
            .dragged_item_type()
            .is_some_and(|dragged| &dragged == handle.item_type());
        if !type_matches {
            return false;
        }

        match self.registry.get_source(handle, true) {
            Some(source) => source.is_dragging(self),
            None => false,
        }
    }

    /// Whether `source` is the very object pinned for the current drag.
    pub fn is_dragged_source<S: DragSource + ?Sized>(&self, source: &S) -> bool {
        self.registry
            .pinned_source()
            .is_some_and(|pinned| std::ptr::addr_eq(Arc::as_ptr(&pinned), source as *const S))
    }

    pub fn dragged_item_type(&self) -> Option<ItemType> {
        self.store.dragged_item_type()
    }

    pub fn dragged_item(&self) -> Option<Item> {
        self.store.dragged_item()
    }

    pub fn drop_result(&self) -> Option<DropResult> {
        self.store.drop_result()
    }

    pub fn did_drop(&self) -> bool {
        self.store.did_drop()
    }

    pub fn source_handle(&self) -> Option<SourceHandle> {
        self.store.source_handle()
    }
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("registry", &self.registry)
            .field("store", &self.store)
            .finish()
    }
}
