//! Read-only path traversal.

use ftools_path::{to_path, IntoPath, PathStep};
use serde_json::Value;

/// Walk `container` along `path`.
///
/// Any miss (absent key, index out of range, a key step against a sequence,
/// or a step into a scalar) stops the walk.
pub(crate) fn get_at<'a>(container: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = container;
    for step in path {
        current = match (current, step) {
            (Value::Array(arr), PathStep::Index(idx)) => arr.get(*idx)?,
            (Value::Object(map), PathStep::Key(key)) => map.get(key)?,
            (Value::Object(map), PathStep::Index(idx)) => map.get(&idx.to_string())?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get the value at `path` of `container`.
///
/// Returns `None` when the path does not resolve. A key that explicitly holds
/// `null` resolves to `Some(&Value::Null)`.
///
/// # Example
///
/// ```
/// use ftools_collection::getitem;
/// use serde_json::json;
///
/// let doc = json!({"key": [{"subkey": "item"}]});
/// assert_eq!(getitem(("key", 0usize, "subkey"), &doc), Some(&json!("item")));
/// assert_eq!(getitem(("key", 1usize), &doc), None);
/// ```
pub fn getitem<'a>(path: impl IntoPath, container: &'a Value) -> Option<&'a Value> {
    get_at(container, &to_path(path))
}

/// Check whether `path` exists in `container`.
pub fn hasitem(path: impl IntoPath, container: &Value) -> bool {
    get_at(container, &to_path(path)).is_some()
}
