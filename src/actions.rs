//! Drag actions - the only way drag state changes.
//!
//! Every action re-checks its permission through the [`Coordinator`] before
//! touching anything, even though callers are expected to have asked first:
//! state may have moved between the caller's check and the call. An action
//! either returns its payload with the transition fully applied to the
//! registry, or returns a [`DragDropError`] having changed nothing.
//!
//! Payloads are not applied to the store here; the
//! [`DragDropManager`](crate::manager::DragDropManager) dispatches them.

use crate::coordinator::Coordinator;
use crate::error::{DragDropError, DragDropResult};
use crate::handler::DropTarget;
use crate::operation::{BeginDragPayload, DropPayload, EndDragPayload};
use crate::profile_scope;
use crate::registry::HandleRegistry;
use crate::types::{SourceHandle, TargetHandle, implicit_drop_result, is_structured, value_kind};
use std::sync::Arc;

pub struct DragDropActions {
    coordinator: Arc<Coordinator>,
    registry: Arc<HandleRegistry>,
}

impl DragDropActions {
    pub fn new(coordinator: Arc<Coordinator>, registry: Arc<HandleRegistry>) -> Self {
        Self {
            coordinator,
            registry,
        }
    }

    /// Start dragging the source behind `handle` and pin it.
    pub fn begin_drag(&self, handle: &SourceHandle) -> DragDropResult<BeginDragPayload> {
        profile_scope!("begin_drag");

        if !self.coordinator.can_drag(handle)? {
            return Err(DragDropError::CannotBeginDrag);
        }

        let source = self
            .registry
            .get_source(handle, false)
            .ok_or_else(|| DragDropError::UnknownSource(handle.clone()))?;

        let item = source.begin_drag(&self.coordinator);
        if !is_structured(&item) {
            return Err(DragDropError::InvalidItem {
                found: value_kind(&item),
            });
        }

        self.registry.pin_source(handle)?;
        tracing::debug!(handle = %handle, "Drag started");

        Ok(BeginDragPayload {
            item_type: handle.item_type().clone(),
            item,
            source_handle: handle.clone(),
        })
    }

    /// Drop the current drag on the target behind `handle`.
    ///
    /// A target that returns nothing still produces a drop result (`true`),
    /// so "dropped without payload" stays distinguishable from "not dropped".
    pub fn drop(&self, handle: &TargetHandle) -> DragDropResult<DropPayload> {
        profile_scope!("drop");

        if !self.coordinator.can_drop(handle)? {
            return Err(DragDropError::CannotDrop);
        }

        let target = self
            .registry
            .get_target(handle)
            .ok_or_else(|| DragDropError::UnknownTarget(handle.clone()))?;

        // Qualified: `target.drop(..)` would resolve to `Drop::drop` on the Arc
        let drop_result = match DropTarget::drop(target.as_ref(), &self.coordinator) {
            None => implicit_drop_result(),
            Some(result) if is_structured(&result) => result,
            Some(result) => {
                return Err(DragDropError::InvalidDropResult {
                    found: value_kind(&result),
                });
            }
        };
        tracing::debug!(handle = %handle, "Dropped");

        Ok(DropPayload { drop_result })
    }

    /// End the current drag, dropped or not, and unpin its source.
    pub fn end_drag(&self) -> DragDropResult<EndDragPayload> {
        profile_scope!("end_drag");

        if !self.coordinator.can_end_drag() {
            return Err(DragDropError::CannotEndDrag);
        }

        let source = self
            .registry
            .pinned_source()
            .ok_or(DragDropError::NothingPinned)?;

        source.end_drag(&self.coordinator);
        self.registry.unpin_source()?;
        tracing::debug!("Drag ended");

        Ok(EndDragPayload {})
    }
}
