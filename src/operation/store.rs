use super::action::DragAction;
use super::state::DragOperationState;
use crate::events::{ChangeEmitter, ChangeListener};
use crate::types::{DropResult, Item, ItemType, SourceHandle};
use parking_lot::RwLock;

/// Holds the in-flight drag and notifies listeners when it changes.
///
/// The store trusts its payloads: legality is decided by the coordinator and
/// enforced by the actions before anything reaches [`DragOperationStore::dispatch`].
#[derive(Debug, Default)]
pub struct DragOperationStore {
    state: RwLock<DragOperationState>,
    changes: ChangeEmitter,
}

impl DragOperationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action payload. Returns whether the state changed; listeners
    /// are notified only in that case.
    pub fn dispatch(&self, action: impl Into<DragAction>) -> bool {
        let action = action.into();
        let name = action.name();

        let changed = {
            let mut state = self.state.write();
            match action {
                DragAction::BeginDrag(payload) => {
                    if state.is_dragging() {
                        tracing::warn!("Begin drag replaces an operation that never ended");
                    }
                    state.begin(payload);
                    true
                }
                DragAction::Drop(payload) => state.record_drop(payload),
                DragAction::EndDrag(_) => {
                    let was_dragging = state.is_dragging();
                    state.reset();
                    was_dragging
                }
            }
        };

        if changed {
            tracing::debug!(action = name, "Drag operation updated");
            self.changes.emit();
        } else {
            tracing::debug!(action = name, "Action left drag operation unchanged");
        }
        changed
    }

    /// Return to idle regardless of the current state.
    pub fn reset(&self) {
        self.dispatch(DragAction::EndDrag(Default::default()));
    }

    pub fn is_dragging(&self) -> bool {
        self.state.read().is_dragging()
    }

    pub fn did_drop(&self) -> bool {
        self.state.read().did_drop()
    }

    pub fn dragged_item_type(&self) -> Option<ItemType> {
        self.state.read().item_type().cloned()
    }

    pub fn dragged_item(&self) -> Option<Item> {
        self.state.read().item().cloned()
    }

    pub fn drop_result(&self) -> Option<DropResult> {
        self.state.read().drop_result().cloned()
    }

    pub fn source_handle(&self) -> Option<SourceHandle> {
        self.state.read().source_handle().cloned()
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> DragOperationState {
        self.state.read().clone()
    }

    pub fn add_change_listener(&self, listener: &ChangeListener) {
        self.changes.add(listener);
    }

    pub fn remove_change_listener(&self, listener: &ChangeListener) {
        self.changes.remove(listener);
    }
}
