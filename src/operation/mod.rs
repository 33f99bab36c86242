//! Drag operation record and the store that owns it.
//!
//! ## Modules
//!
//! - `state` - Drag operation state machine enum and accessors
//! - `action` - Payloads produced by the actions and applied by the store
//! - `store` - Lock-protected state plus change notification

mod action;
mod state;
mod store;

pub use action::{BeginDragPayload, DragAction, DropPayload, EndDragPayload};
pub use state::{DragOperation, DragOperationState};
pub use store::DragOperationStore;
