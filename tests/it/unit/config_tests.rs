//! Unit tests for configuration loading and its effect on the manager.

use crate::helpers::{ChangeCounter, TestSource};
use dragnet::{DragDropConfig, DragDropManager};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "log_filter": "dragnet=debug", "slow_operation_ms": 12.5 }}"#
    )
    .unwrap();

    let config = DragDropConfig::load(file.path()).unwrap();
    assert_eq!(config.log_filter, "dragnet=debug");
    assert_eq!(config.slow_operation_ms, 12.5);
    assert!(config.notify_registry_changes);
}

#[test]
fn test_load_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = DragDropConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn test_load_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    assert!(DragDropConfig::load(file.path()).is_err());
}

#[test]
fn test_manager_applies_config() {
    let config = DragDropConfig {
        notify_registry_changes: false,
        slow_operation_ms: 25.0,
        ..Default::default()
    };
    let manager = DragDropManager::with_config(config.clone());
    assert_eq!(manager.config(), &config);
    assert_eq!(manager.profiler().threshold_ms(), 25.0);

    let counter = ChangeCounter::new();
    manager.coordinator().add_change_listener(&counter.listener);
    manager
        .registry()
        .add_source("card", TestSource::new().arc())
        .unwrap();
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_init_logging_is_idempotent() {
    dragnet::logging::init_logging("debug");
    dragnet::logging::init_logging("trace");
}
