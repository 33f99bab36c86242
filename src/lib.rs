//! Drag-and-drop coordination core.
//!
//! Widgets register draggable [`DragSource`]s and droppable [`DropTarget`]s
//! with a [`HandleRegistry`] and receive opaque handles. The [`Coordinator`]
//! answers whether a drag, drop or end-of-drag is legal right now; the
//! [`DragDropActions`] perform those transitions after re-checking; the
//! [`DragOperationStore`] records the single in-flight drag and notifies
//! listeners. [`DragDropManager`] wires the pieces together.
//!
//! ```ignore
//! let manager = DragDropManager::new();
//! let card = manager.registry().add_source("card", Arc::new(CardSource))?;
//! let column = manager.registry().add_target("card", Arc::new(ColumnTarget))?;
//!
//! if manager.coordinator().can_drag(&card)? {
//!     manager.begin_drag(&card)?;
//! }
//! if manager.coordinator().can_drop(&column)? {
//!     manager.drop(&column)?;
//! }
//! manager.end_drag()?;
//! ```

pub mod actions;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod handler;
pub mod logging;
pub mod manager;
pub mod operation;
pub mod perf;
pub mod registry;
pub mod types;

pub use actions::DragDropActions;
pub use config::DragDropConfig;
pub use coordinator::Coordinator;
pub use error::{DragDropError, DragDropResult};
pub use events::{ChangeEmitter, ChangeListener, listener};
pub use handler::{DragSource, DropTarget};
pub use manager::DragDropManager;
pub use operation::{
    BeginDragPayload, DragAction, DragOperation, DragOperationState, DragOperationStore,
    DropPayload, EndDragPayload,
};
pub use registry::HandleRegistry;
pub use types::{DropResult, Item, ItemType, SourceHandle, TargetHandle};
