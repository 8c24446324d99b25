//! Shallow manipulation of resource documents.
//!
//! Documents are plain [`serde_json::Value`]s: an object for object-shaped
//! resources, an array of objects for sequence-shaped ones. These helpers
//! keep the merge/lookup rules in one place so the service layer stays
//! declarative.

use serde_json::{Map, Value};

use crate::id::ItemId;

/// Build a new item from `body` with the server-assigned `id`.
///
/// Non-object bodies contribute no fields; the result is then just
/// `{"id": …}`. A caller-supplied `id` field is overwritten.
#[must_use]
pub fn new_item(id: ItemId, body: Value) -> Value {
    let mut fields = match body {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    fields.insert("id".to_string(), Value::from(id.as_i64()));
    Value::Object(fields)
}

/// Shallow-merge `patch` fields into `item`; patch fields win.
///
/// Mirrors a JS object spread, so a patch carrying `id` replaces the
/// stored id. No-op when either side is not an object.
pub fn merge_item(item: &mut Value, patch: &Value) {
    if let (Value::Object(target), Value::Object(fields)) = (item, patch) {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// Position of the first item whose integer `id` field equals `id`.
#[must_use]
pub fn position_of(items: &[Value], id: ItemId) -> Option<usize> {
    items
        .iter()
        .position(|item| item.get("id").and_then(Value::as_i64) == Some(id.as_i64()))
}
