//! Error types for drag-and-drop contract violations.
//!
//! Every variant here is a programming error on the caller's or the
//! application's side: an unregistered handle, an action invoked without its
//! permission check, or a source/target returning a value of the wrong shape.
//! Ordinary "no" answers (a target refusing a drop, a lookup that finds
//! nothing) are plain `bool`/`Option` results and never appear here.

use crate::types::{SourceHandle, TargetHandle};
use thiserror::Error;

/// Contract violations raised by the coordinator, the actions and the registry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DragDropError {
    /// A source handle that the registry does not know about
    #[error("Expected to find a valid source for {0}")]
    UnknownSource(SourceHandle),

    /// A target handle that the registry does not know about
    #[error("Expected to find a valid target for {0}")]
    UnknownTarget(TargetHandle),

    /// Handles must carry a non-empty type tag
    #[error("Item type must not be empty")]
    EmptyItemType,

    /// `begin_drag` invoked while `can_drag` is false
    #[error("Cannot call begin_drag now. Check can_drag(source_handle) first.")]
    CannotBeginDrag,

    /// `drop` invoked while `can_drop` is false
    #[error("Cannot call drop now. Check can_drop(target_handle) first.")]
    CannotDrop,

    /// `end_drag` invoked while `can_end_drag` is false
    #[error("Cannot call end_drag now. Check can_end_drag() first.")]
    CannotEndDrag,

    /// A source produced a primitive instead of a structured item
    #[error("Item must be an object or an array, got {found}")]
    InvalidItem { found: &'static str },

    /// A target produced a primitive drop result
    #[error("Drop result must either be an object, an array or absent, got {found}")]
    InvalidDropResult { found: &'static str },

    /// `unpin_source` with an empty pinned slot
    #[error("There is no pinned source")]
    NothingPinned,
}

/// Result type alias for drag-and-drop operations
pub type DragDropResult<T> = Result<T, DragDropError>;
