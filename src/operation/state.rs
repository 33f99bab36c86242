//! Drag operation state machine.
//!
//! A single explicit enum replaces the loose `is_dragging`/`did_drop`/item
//! fields, so an item without a drag (or a drop result without an item) is
//! unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging        (begin_drag)
//! Dragging -> Dragging+drop   (drop, at most once)
//! Any      -> Idle            (end_drag)
//! ```

use super::action::{BeginDragPayload, DropPayload};
use crate::types::{DropResult, Item, ItemType, SourceHandle};
use serde::Serialize;

/// The in-flight drag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragOperation {
    /// Type of the dragged item, equal to the pinned source's type
    pub item_type: ItemType,
    /// Item produced by the source at drag start
    pub item: Item,
    /// Handle of the dragged source
    pub source_handle: SourceHandle,
    /// Result recorded by a successful drop
    pub drop_result: Option<DropResult>,
}

impl DragOperation {
    pub fn did_drop(&self) -> bool {
        self.drop_result.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DragOperationState {
    /// No drag in progress
    #[default]
    Idle,

    /// A drag is in progress (possibly already dropped)
    Dragging(DragOperation),
}

impl DragOperationState {
    /// Returns true if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if the current drag has been dropped
    pub fn did_drop(&self) -> bool {
        self.operation().is_some_and(DragOperation::did_drop)
    }

    pub fn operation(&self) -> Option<&DragOperation> {
        match self {
            Self::Dragging(op) => Some(op),
            Self::Idle => None,
        }
    }

    pub fn item_type(&self) -> Option<&ItemType> {
        self.operation().map(|op| &op.item_type)
    }

    pub fn item(&self) -> Option<&Item> {
        self.operation().map(|op| &op.item)
    }

    pub fn source_handle(&self) -> Option<&SourceHandle> {
        self.operation().map(|op| &op.source_handle)
    }

    pub fn drop_result(&self) -> Option<&DropResult> {
        self.operation().and_then(|op| op.drop_result.as_ref())
    }

    /// Open a new drag from a begin-drag payload
    pub fn begin(&mut self, payload: BeginDragPayload) {
        *self = Self::Dragging(DragOperation {
            item_type: payload.item_type,
            item: payload.item,
            source_handle: payload.source_handle,
            drop_result: None,
        });
    }

    /// Record a drop. Returns false (and changes nothing) when idle.
    pub fn record_drop(&mut self, payload: DropPayload) -> bool {
        match self {
            Self::Dragging(op) => {
                op.drop_result = Some(payload.drop_result);
                true
            }
            Self::Idle => false,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
