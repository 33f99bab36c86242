//! Unit tests for the drag-and-drop core.

mod config_tests;
mod coordinator_tests;
