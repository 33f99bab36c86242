//! Payloads produced by [`DragDropActions`](crate::actions::DragDropActions)
//! and applied by the [`DragOperationStore`](super::DragOperationStore).

use crate::types::{DropResult, Item, ItemType, SourceHandle};
use serde::{Deserialize, Serialize};

/// Everything the store needs to open a new drag operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeginDragPayload {
    pub item_type: ItemType,
    pub item: Item,
    pub source_handle: SourceHandle,
}

/// The normalized result of a successful drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPayload {
    pub drop_result: DropResult,
}

/// Signals the store to tear the operation down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndDragPayload {}

/// A state transition for the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum DragAction {
    BeginDrag(BeginDragPayload),
    Drop(DropPayload),
    EndDrag(EndDragPayload),
}

impl DragAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BeginDrag(_) => "begin_drag",
            Self::Drop(_) => "drop",
            Self::EndDrag(_) => "end_drag",
        }
    }
}

impl From<BeginDragPayload> for DragAction {
    fn from(payload: BeginDragPayload) -> Self {
        Self::BeginDrag(payload)
    }
}

impl From<DropPayload> for DragAction {
    fn from(payload: DropPayload) -> Self {
        Self::Drop(payload)
    }
}

impl From<EndDragPayload> for DragAction {
    fn from(payload: EndDragPayload) -> Self {
        Self::EndDrag(payload)
    }
}
