//! Unit tests for coordinator permission checks and drag state queries.

use crate::helpers::{TestSetup, TestSource, TestTarget, calls};
use dragnet::{DragDropError, DragDropManager, ItemType};
use serde_json::json;
use std::sync::Arc;

// ============================================================================
// can_drag
// ============================================================================

#[test]
fn test_can_drag_delegates_to_source_when_idle() {
    let setup = TestSetup::new();
    assert!(setup.coordinator().can_drag(&setup.source_handle).unwrap());
    assert_eq!(calls(&setup.source.can_drag_calls), 1);
}

#[test]
fn test_can_drag_respects_refusing_source() {
    let setup = TestSetup::with(TestSource::new().refusing(), TestTarget::new());
    assert!(!setup.coordinator().can_drag(&setup.source_handle).unwrap());
}

#[test]
fn test_can_drag_false_for_every_source_while_dragging() {
    let setup = TestSetup::new();
    let other = TestSource::new().arc();
    let other_handle = setup
        .manager
        .registry()
        .add_source("photo", other.clone())
        .unwrap();

    setup.start_drag();

    assert!(!setup.coordinator().can_drag(&setup.source_handle).unwrap());
    assert!(!setup.coordinator().can_drag(&other_handle).unwrap());
    // The source predicate is never consulted once a drag is in flight
    assert_eq!(calls(&other.can_drag_calls), 0);
}

#[test]
fn test_can_drag_unknown_handle_is_contract_violation() {
    let setup = TestSetup::new();
    setup.manager.registry().remove_source(&setup.source_handle);

    let err = setup.coordinator().can_drag(&setup.source_handle).unwrap_err();
    assert_eq!(err, DragDropError::UnknownSource(setup.source_handle.clone()));
    assert_eq!(calls(&setup.source.can_drag_calls), 0);
}

#[test]
fn test_can_drag_handle_from_another_manager_is_unknown() {
    let setup = TestSetup::new();
    let other = DragDropManager::new();
    other
        .registry()
        .add_target("card", TestTarget::new().arc())
        .unwrap();
    let foreign = other
        .registry()
        .add_source("card", TestSource::new().arc())
        .unwrap();

    // id 2 is the target in our registry, never a source
    assert_eq!(foreign.id, 2);
    assert!(matches!(
        setup.coordinator().can_drag(&foreign),
        Err(DragDropError::UnknownSource(_))
    ));
}

// ============================================================================
// can_drop
// ============================================================================

#[test]
fn test_can_drop_false_when_idle() {
    let setup = TestSetup::new();
    assert!(!setup.coordinator().can_drop(&setup.target_handle).unwrap());
    assert_eq!(calls(&setup.target.can_drop_calls), 0);
}

#[test]
fn test_can_drop_matching_type_asks_target() {
    let setup = TestSetup::new();
    setup.start_drag();

    assert!(setup.coordinator().can_drop(&setup.target_handle).unwrap());
    assert_eq!(calls(&setup.target.can_drop_calls), 1);
}

#[test]
fn test_can_drop_respects_refusing_target() {
    let setup = TestSetup::with(TestSource::new(), TestTarget::new().refusing());
    setup.start_drag();

    assert!(!setup.coordinator().can_drop(&setup.target_handle).unwrap());
}

#[test]
fn test_can_drop_type_mismatch_skips_target_predicate() {
    let setup = TestSetup::new();
    let photo_target = TestTarget::new().arc();
    let photo_handle = setup
        .manager
        .registry()
        .add_target("photo", photo_target.clone())
        .unwrap();
    setup.start_drag();

    assert!(!setup.coordinator().can_drop(&photo_handle).unwrap());
    assert_eq!(calls(&photo_target.can_drop_calls), 0);
}

#[test]
fn test_can_drop_false_after_drop() {
    let setup = TestSetup::new();
    setup.start_drag();
    setup.manager.drop(&setup.target_handle).unwrap();

    assert!(setup.coordinator().did_drop());
    assert!(!setup.coordinator().can_drop(&setup.target_handle).unwrap());
}

#[test]
fn test_can_drop_unknown_handle_is_contract_violation() {
    let setup = TestSetup::new();
    setup.manager.registry().remove_target(&setup.target_handle);

    assert_eq!(
        setup.coordinator().can_drop(&setup.target_handle),
        Err(DragDropError::UnknownTarget(setup.target_handle.clone()))
    );
}

// ============================================================================
// can_end_drag / is_dragging
// ============================================================================

#[test]
fn test_can_end_drag_tracks_drag_state() {
    let setup = TestSetup::new();
    assert!(!setup.coordinator().can_end_drag());

    setup.start_drag();
    assert!(setup.coordinator().can_end_drag());

    setup.manager.end_drag().unwrap();
    assert!(!setup.coordinator().can_end_drag());
}

#[test]
fn test_is_dragging_source_false_when_idle() {
    let setup = TestSetup::new();
    assert!(!setup.coordinator().is_dragging());
    assert!(!setup.coordinator().is_dragging_source(&setup.source_handle));
    assert_eq!(calls(&setup.source.is_dragging_calls), 0);
}

#[test]
fn test_is_dragging_source_delegates_for_matching_type() {
    let setup = TestSetup::new();
    let sibling = TestSource::new().arc();
    let sibling_handle = setup
        .manager
        .registry()
        .add_source("card", sibling.clone())
        .unwrap();
    setup.start_drag();

    assert!(setup.coordinator().is_dragging_source(&setup.source_handle));
    assert!(!setup.coordinator().is_dragging_source(&sibling_handle));
    assert_eq!(calls(&setup.source.is_dragging_calls), 1);
    assert_eq!(calls(&sibling.is_dragging_calls), 1);
}

#[test]
fn test_is_dragging_source_type_mismatch_skips_lookup() {
    let setup = TestSetup::new();
    let photo = TestSource::new().arc();
    let photo_handle = setup
        .manager
        .registry()
        .add_source("photo", photo.clone())
        .unwrap();
    setup.start_drag();

    assert!(!setup.coordinator().is_dragging_source(&photo_handle));
    assert_eq!(calls(&photo.is_dragging_calls), 0);
}

#[test]
fn test_is_dragging_source_resolves_removed_pinned_source() {
    let setup = TestSetup::new();
    setup.start_drag();

    assert!(setup.manager.registry().remove_source(&setup.source_handle));
    assert!(setup.coordinator().is_dragging_source(&setup.source_handle));
}

#[test]
fn test_is_dragging_source_unresolvable_handle_is_false() {
    let setup = TestSetup::new();
    let sibling_handle = setup
        .manager
        .registry()
        .add_source("card", TestSource::new().arc())
        .unwrap();
    setup.start_drag();
    setup.manager.registry().remove_source(&sibling_handle);

    assert!(!setup.coordinator().is_dragging_source(&sibling_handle));
}

#[test]
fn test_is_dragged_source_uses_identity() {
    let setup = TestSetup::new();
    let twin = TestSource::new();

    assert!(!setup.coordinator().is_dragged_source(setup.source.as_ref()));

    setup.start_drag();
    assert!(setup.coordinator().is_dragged_source(setup.source.as_ref()));
    assert!(!setup.coordinator().is_dragged_source(&twin));
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_accessors_are_neutral_when_idle() {
    let setup = TestSetup::new();
    let coordinator = setup.coordinator();

    assert_eq!(coordinator.dragged_item_type(), None);
    assert_eq!(coordinator.dragged_item(), None);
    assert_eq!(coordinator.drop_result(), None);
    assert_eq!(coordinator.source_handle(), None);
    assert!(!coordinator.did_drop());
}

#[test]
fn test_accessors_follow_the_drag() {
    let setup = TestSetup::with(
        TestSource::new().with_item(json!({ "id": 42 })),
        TestTarget::new().with_result(json!({ "column": "done" })),
    );
    setup.start_drag();

    let coordinator = setup.coordinator();
    assert_eq!(coordinator.dragged_item_type(), Some(ItemType::from("card")));
    assert_eq!(coordinator.dragged_item(), Some(json!({ "id": 42 })));
    assert_eq!(coordinator.source_handle(), Some(setup.source_handle.clone()));
    assert_eq!(coordinator.drop_result(), None);

    setup.manager.drop(&setup.target_handle).unwrap();
    assert_eq!(coordinator.drop_result(), Some(json!({ "column": "done" })));
}

#[test]
fn test_coordinator_shares_manager_collaborators() {
    let setup = TestSetup::new();
    assert!(Arc::ptr_eq(setup.coordinator().registry(), setup.manager.registry()));
    assert!(Arc::ptr_eq(setup.coordinator().store(), setup.manager.store()));
}
