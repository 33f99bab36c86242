//! Handle registry - maps handles to registered sources and targets and owns
//! the single pinned-source slot.
//!
//! ## Pinning
//!
//! `begin_drag` pins the dragged source; `end_drag` unpins it. The pinned
//! slot keeps its own reference to the source object, so a widget that
//! unregisters mid-drag (e.g. because it was unmounted) is still reachable
//! through [`HandleRegistry::get_source`] with `include_pinned = true` until
//! the drag ends. That is the permissive lookup used by
//! [`Coordinator::is_dragging_source`](crate::coordinator::Coordinator::is_dragging_source).

use crate::error::{DragDropError, DragDropResult};
use crate::events::{ChangeEmitter, ChangeListener};
use crate::handler::{DragSource, DropTarget};
use crate::types::{ItemType, SourceHandle, TargetHandle};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

struct Pinned {
    handle: SourceHandle,
    source: Arc<dyn DragSource>,
}

#[derive(Default)]
struct RegistryInner {
    sources: HashMap<SourceHandle, Arc<dyn DragSource>>,
    targets: HashMap<TargetHandle, Arc<dyn DropTarget>>,
    pinned: Option<Pinned>,
}

pub struct HandleRegistry {
    inner: RwLock<RegistryInner>,
    next_id: AtomicU64,
    notify: AtomicBool,
    changes: ChangeEmitter,
}

impl Default for HandleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner::default()),
            next_id: AtomicU64::new(1),
            notify: AtomicBool::new(true),
            changes: ChangeEmitter::new(),
        }
    }

    /// Enable or disable change notifications for registry mutations.
    pub fn set_notify_changes(&self, enabled: bool) {
        self.notify.store(enabled, Ordering::Relaxed);
    }

    fn emit_change(&self) {
        if self.notify.load(Ordering::Relaxed) {
            self.changes.emit();
        }
    }

    fn mint_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    // ========================================================================
    // Registration
    // ========================================================================

    pub fn add_source(
        &self,
        item_type: impl Into<ItemType>,
        source: Arc<dyn DragSource>,
    ) -> DragDropResult<SourceHandle> {
        let item_type = item_type.into();
        if item_type.is_empty() {
            return Err(DragDropError::EmptyItemType);
        }

        let handle = SourceHandle::new(self.mint_id(), item_type);
        self.inner.write().sources.insert(handle.clone(), source);
        tracing::debug!(handle = %handle, "Registered source");

        self.emit_change();
        Ok(handle)
    }

    pub fn add_target(
        &self,
        item_type: impl Into<ItemType>,
        target: Arc<dyn DropTarget>,
    ) -> DragDropResult<TargetHandle> {
        let item_type = item_type.into();
        if item_type.is_empty() {
            return Err(DragDropError::EmptyItemType);
        }

        let handle = TargetHandle::new(self.mint_id(), item_type);
        self.inner.write().targets.insert(handle.clone(), target);
        tracing::debug!(handle = %handle, "Registered target");

        self.emit_change();
        Ok(handle)
    }

    /// Remove a source. A pinned source stays reachable through the pinned
    /// slot until it is unpinned. Returns whether the handle was registered.
    pub fn remove_source(&self, handle: &SourceHandle) -> bool {
        let removed = self.inner.write().sources.remove(handle).is_some();
        if removed {
            tracing::debug!(handle = %handle, "Removed source");
            self.emit_change();
        }
        removed
    }

    /// Remove a target. Returns whether the handle was registered.
    pub fn remove_target(&self, handle: &TargetHandle) -> bool {
        let removed = self.inner.write().targets.remove(handle).is_some();
        if removed {
            tracing::debug!(handle = %handle, "Removed target");
            self.emit_change();
        }
        removed
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Resolve a source. With `include_pinned`, the pinned handle resolves to
    /// the pinned object even after it was removed from the registry.
    pub fn get_source(
        &self,
        handle: &SourceHandle,
        include_pinned: bool,
    ) -> Option<Arc<dyn DragSource>> {
        let inner = self.inner.read();
        if include_pinned {
            if let Some(pinned) = inner.pinned.as_ref().filter(|p| &p.handle == handle) {
                return Some(Arc::clone(&pinned.source));
            }
        }
        inner.sources.get(handle).cloned()
    }

    pub fn get_target(&self, handle: &TargetHandle) -> Option<Arc<dyn DropTarget>> {
        self.inner.read().targets.get(handle).cloned()
    }

    pub fn contains_source(&self, handle: &SourceHandle) -> bool {
        self.inner.read().sources.contains_key(handle)
    }

    pub fn contains_target(&self, handle: &TargetHandle) -> bool {
        self.inner.read().targets.contains_key(handle)
    }

    pub fn source_count(&self) -> usize {
        self.inner.read().sources.len()
    }

    pub fn target_count(&self) -> usize {
        self.inner.read().targets.len()
    }

    // ========================================================================
    // Pinned Source
    // ========================================================================

    pub fn pin_source(&self, handle: &SourceHandle) -> DragDropResult<()> {
        {
            let mut inner = self.inner.write();
            let source = inner
                .sources
                .get(handle)
                .cloned()
                .ok_or_else(|| DragDropError::UnknownSource(handle.clone()))?;
            inner.pinned = Some(Pinned {
                handle: handle.clone(),
                source,
            });
        }
        tracing::debug!(handle = %handle, "Pinned source");
        self.emit_change();
        Ok(())
    }

    pub fn unpin_source(&self) -> DragDropResult<()> {
        let unpinned = self
            .inner
            .write()
            .pinned
            .take()
            .ok_or(DragDropError::NothingPinned)?;
        tracing::debug!(handle = %unpinned.handle, "Unpinned source");
        self.emit_change();
        Ok(())
    }

    pub fn pinned_source(&self) -> Option<Arc<dyn DragSource>> {
        self.inner
            .read()
            .pinned
            .as_ref()
            .map(|p| Arc::clone(&p.source))
    }

    pub fn pinned_source_handle(&self) -> Option<SourceHandle> {
        self.inner.read().pinned.as_ref().map(|p| p.handle.clone())
    }

    // ========================================================================
    // Change Notification
    // ========================================================================

    pub fn add_change_listener(&self, listener: &ChangeListener) {
        self.changes.add(listener);
    }

    pub fn remove_change_listener(&self, listener: &ChangeListener) {
        self.changes.remove(listener);
    }
}

impl std::fmt::Debug for HandleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandleRegistry")
            .field("sources", &self.source_count())
            .field("targets", &self.target_count())
            .field("pinned", &self.pinned_source_handle())
            .finish()
    }
}
