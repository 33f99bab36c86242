//! Drag-and-drop manager - wires the registry, the store, the coordinator and
//! the actions together.
//!
//! Backends (mouse, touch, keyboard adapters) talk to the manager: they ask
//! the [`Coordinator`] whether an action is allowed, then call the matching
//! manager method, which runs the action and applies its payload to the
//! [`DragOperationStore`].

use crate::actions::DragDropActions;
use crate::config::DragDropConfig;
use crate::coordinator::Coordinator;
use crate::error::DragDropResult;
use crate::operation::{BeginDragPayload, DragAction, DragOperationStore, DropPayload};
use crate::perf::ActionProfiler;
use crate::registry::HandleRegistry;
use crate::types::{SourceHandle, TargetHandle};
use std::sync::Arc;

pub struct DragDropManager {
    config: DragDropConfig,
    registry: Arc<HandleRegistry>,
    store: Arc<DragOperationStore>,
    coordinator: Arc<Coordinator>,
    actions: DragDropActions,
    profiler: ActionProfiler,
}

impl Default for DragDropManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DragDropManager {
    pub fn new() -> Self {
        Self::with_config(DragDropConfig::default())
    }

    pub fn with_config(config: DragDropConfig) -> Self {
        let registry = Arc::new(HandleRegistry::new());
        registry.set_notify_changes(config.notify_registry_changes);
        let store = Arc::new(DragOperationStore::new());
        let coordinator = Arc::new(Coordinator::new(Arc::clone(&registry), Arc::clone(&store)));
        let actions = DragDropActions::new(Arc::clone(&coordinator), Arc::clone(&registry));
        let profiler = ActionProfiler::new(config.slow_operation_ms);

        Self {
            config,
            registry,
            store,
            coordinator,
            actions,
            profiler,
        }
    }

    pub fn config(&self) -> &DragDropConfig {
        &self.config
    }

    pub fn coordinator(&self) -> &Arc<Coordinator> {
        &self.coordinator
    }

    pub fn registry(&self) -> &Arc<HandleRegistry> {
        &self.registry
    }

    pub fn store(&self) -> &Arc<DragOperationStore> {
        &self.store
    }

    pub fn actions(&self) -> &DragDropActions {
        &self.actions
    }

    pub fn profiler(&self) -> &ActionProfiler {
        &self.profiler
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Begin dragging `handle`. Check [`Coordinator::can_drag`] first.
    pub fn begin_drag(&self, handle: &SourceHandle) -> DragDropResult<BeginDragPayload> {
        let payload = self.run("begin_drag", || self.actions.begin_drag(handle))?;
        self.store.dispatch(DragAction::BeginDrag(payload.clone()));
        Ok(payload)
    }

    /// Drop the current drag on `handle`. Check [`Coordinator::can_drop`] first.
    pub fn drop(&self, handle: &TargetHandle) -> DragDropResult<DropPayload> {
        let payload = self.run("drop", || self.actions.drop(handle))?;
        self.store.dispatch(DragAction::Drop(payload.clone()));
        Ok(payload)
    }

    /// End the current drag. Check [`Coordinator::can_end_drag`] first.
    pub fn end_drag(&self) -> DragDropResult<()> {
        let payload = self.run("end_drag", || self.actions.end_drag())?;
        self.store.dispatch(payload);
        Ok(())
    }

    fn run<T>(&self, name: &'static str, action: impl FnOnce() -> DragDropResult<T>) -> DragDropResult<T> {
        self.profiler.time(name, action).inspect_err(|err| {
            tracing::error!(action = name, error = %err, "Drag contract violation");
        })
    }
}

impl std::fmt::Debug for DragDropManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragDropManager")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
