//! Core types for the drag-and-drop core.
//!
//! Handles are minted by the [`HandleRegistry`](crate::registry::HandleRegistry)
//! and consumed everywhere else as lookup keys plus a type tag. Items and drop
//! results are opaque JSON values whose only enforced property is that they
//! are structured.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Item Types
// ============================================================================

/// Type tag shared by sources and targets. A target only accepts drags whose
/// item type is equal to its own.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemType(Arc<str>);

impl ItemType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemType {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl PartialEq<str> for ItemType {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for ItemType {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

// ============================================================================
// Handles
// ============================================================================

/// Handle for a registered drag source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceHandle {
    pub id: u64,
    pub item_type: ItemType,
}

/// Handle for a registered drop target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetHandle {
    pub id: u64,
    pub item_type: ItemType,
}

impl SourceHandle {
    pub(crate) fn new(id: u64, item_type: ItemType) -> Self {
        Self { id, item_type }
    }

    pub fn item_type(&self) -> &ItemType {
        &self.item_type
    }
}

impl TargetHandle {
    pub(crate) fn new(id: u64, item_type: ItemType) -> Self {
        Self { id, item_type }
    }

    pub fn item_type(&self) -> &ItemType {
        &self.item_type
    }
}

impl fmt::Display for SourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source #{} ({})", self.id, self.item_type)
    }
}

impl fmt::Display for TargetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target #{} ({})", self.id, self.item_type)
    }
}

// ============================================================================
// Items and Drop Results
// ============================================================================

/// Opaque record produced by a source when a drag begins.
pub type Item = Value;

/// What a completed drop left behind: either the target's structured result
/// or `true` when the target had nothing to report.
pub type DropResult = Value;

/// The drop result recorded when a target's `drop` returns nothing.
pub fn implicit_drop_result() -> DropResult {
    Value::Bool(true)
}

/// True for objects and arrays, the only shapes accepted as items and
/// explicit drop results.
#[inline]
pub fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Short name of a JSON value's kind, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
