//! Change notification as seen through the coordinator.

use crate::helpers::{ChangeCounter, TestSetup, TestSource};
use dragnet::{Coordinator, listener};
use parking_lot::Mutex;
use std::sync::Arc;

#[test]
fn test_listener_hears_store_and_registry() {
    let setup = TestSetup::new();
    let counter = ChangeCounter::new();
    setup.coordinator().add_change_listener(&counter.listener);

    // Registry only
    setup
        .manager
        .registry()
        .add_source("card", TestSource::new().arc())
        .unwrap();
    assert_eq!(counter.count(), 1);

    // begin_drag: pin (registry) + begin (store)
    setup.manager.begin_drag(&setup.source_handle).unwrap();
    assert_eq!(counter.count(), 3);

    // drop: store only
    setup.manager.drop(&setup.target_handle).unwrap();
    assert_eq!(counter.count(), 4);

    // end_drag: unpin (registry) + reset (store)
    setup.manager.end_drag().unwrap();
    assert_eq!(counter.count(), 6);
}

#[test]
fn test_remove_listener_detaches_from_both_streams() {
    let setup = TestSetup::new();
    let counter = ChangeCounter::new();
    let coordinator = setup.coordinator();
    coordinator.add_change_listener(&counter.listener);
    coordinator.remove_change_listener(&counter.listener);

    setup.start_drag();
    setup.manager.end_drag().unwrap();
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_removing_unknown_listener_is_noop() {
    let setup = TestSetup::new();
    let registered = ChangeCounter::new();
    let stranger = ChangeCounter::new();
    setup.coordinator().add_change_listener(&registered.listener);

    setup.coordinator().remove_change_listener(&stranger.listener);
    setup.start_drag();

    assert!(registered.count() > 0);
    assert_eq!(stranger.count(), 0);
}

#[test]
fn test_failed_action_notifies_nobody() {
    let setup = TestSetup::new();
    let counter = ChangeCounter::new();
    setup.coordinator().add_change_listener(&counter.listener);

    assert!(setup.manager.end_drag().is_err());
    assert!(setup.manager.drop(&setup.target_handle).is_err());
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_listener_observes_committed_state() {
    let setup = TestSetup::new();
    let observed: Arc<Mutex<Vec<bool>>> = Arc::new(Mutex::new(Vec::new()));
    let coordinator: Arc<Coordinator> = Arc::clone(setup.manager.coordinator());

    let on_change = {
        let observed = Arc::clone(&observed);
        let coordinator = Arc::clone(&coordinator);
        listener(move || observed.lock().push(coordinator.is_dragging()))
    };
    setup.manager.store().add_change_listener(&on_change);

    setup.start_drag();
    setup.manager.end_drag().unwrap();

    assert_eq!(*observed.lock(), vec![true, false]);
}
