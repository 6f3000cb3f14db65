//! Copy-on-write structural updates.
//!
//! Every operation here borrows its input and returns a freshly built
//! container. Containers along the written path are rebuilt one level at a
//! time; the caller's value is never touched, so a failed write leaves
//! nothing half-done.

use ftools_path::{to_path, IntoPath, PathStep};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::access::get_at;
use crate::error::{CollectionError, ValueKind};

/// Empty container to create for a missing segment, chosen by the step that
/// will be written into it.
fn vivify(next: &PathStep) -> Value {
    match next {
        PathStep::Index(_) => Value::Array(Vec::new()),
        PathStep::Key(_) => Value::Object(Map::new()),
    }
}

fn mismatch(path: &[PathStep], depth: usize, container: &Value) -> CollectionError {
    CollectionError::TypeMismatch {
        path: path[..depth].to_vec(),
        step: path[depth].clone(),
        kind: ValueKind::of(container),
    }
}

/// Resolve the child to write at `path[depth]`, recursing into the existing
/// child or into a vivified one.
fn child_at(
    existing: Option<&Value>,
    path: &[PathStep],
    depth: usize,
    value: Value,
) -> Result<Value, CollectionError> {
    if depth + 1 == path.len() {
        return Ok(value);
    }
    match existing {
        Some(sub) => set_at(sub, path, depth + 1, value),
        None => {
            let fresh = vivify(&path[depth + 1]);
            trace!(
                step = %path[depth],
                kind = %ValueKind::of(&fresh),
                "vivifying missing container"
            );
            set_at(&fresh, path, depth + 1, value)
        }
    }
}

fn set_at(
    container: &Value,
    path: &[PathStep],
    depth: usize,
    value: Value,
) -> Result<Value, CollectionError> {
    let Some(step) = path.get(depth) else {
        return Ok(value);
    };

    match (container, step) {
        (Value::Object(map), step) => {
            let key = step.to_key();
            let child = child_at(map.get(&key), path, depth, value)?;
            let mut clone = map.clone();
            clone.insert(key, child);
            Ok(Value::Object(clone))
        }
        (Value::Array(arr), PathStep::Index(idx)) => {
            let idx = *idx;
            let len = idx
                .checked_add(1)
                .ok_or_else(|| CollectionError::IndexOverflow {
                    path: path[..=depth].to_vec(),
                })?;
            let child = child_at(arr.get(idx), path, depth, value)?;
            let mut clone = arr.clone();
            if len > clone.len() {
                trace!(from = clone.len(), to = len, "growing sequence");
                clone.resize(len, Value::Null);
            }
            clone[idx] = child;
            Ok(Value::Array(clone))
        }
        _ => Err(mismatch(path, depth, container)),
    }
}

fn delete_at(container: &Value, path: &[PathStep], depth: usize) -> Result<Value, CollectionError> {
    let step = &path[depth];
    let is_last = depth + 1 == path.len();
    let missing = || CollectionError::MissingKey {
        path: path[..=depth].to_vec(),
    };

    match (container, step) {
        (Value::Object(map), step) => {
            let key = step.to_key();
            let sub = map.get(&key).ok_or_else(missing)?;
            if is_last {
                let clone: Map<String, Value> = map
                    .iter()
                    .filter(|(k, _)| **k != key)
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                return Ok(Value::Object(clone));
            }
            let child = delete_at(sub, path, depth + 1)?;
            let mut clone = map.clone();
            clone.insert(key, child);
            Ok(Value::Object(clone))
        }
        (Value::Array(arr), PathStep::Index(idx)) => {
            let idx = *idx;
            let sub = arr.get(idx).ok_or_else(missing)?;
            let mut clone = arr.clone();
            if is_last {
                clone.remove(idx);
            } else {
                clone[idx] = delete_at(sub, path, depth + 1)?;
            }
            Ok(Value::Array(clone))
        }
        _ => Err(mismatch(path, depth, container)),
    }
}

/// Set the value at `path` of `container`, creating missing segments.
///
/// A missing intermediate segment becomes a sequence when the following step
/// is an index and a mapping otherwise. Writing past the end of a sequence
/// pads it with `null`. The empty path replaces the whole container.
///
/// # Errors
///
/// - [`CollectionError::TypeMismatch`] when a step meets a scalar (including
///   an existing `null`) or a key step meets a sequence.
/// - [`CollectionError::IndexOverflow`] when a sequence index cannot be padded
///   up to.
///
/// # Example
///
/// ```
/// use ftools_collection::setitem;
/// use serde_json::json;
///
/// let doc = json!({"k": ["y"]});
/// let next = setitem(("k", 2usize), json!("x"), &doc).unwrap();
/// assert_eq!(next, json!({"k": ["y", null, "x"]}));
/// assert_eq!(doc, json!({"k": ["y"]}));
/// ```
pub fn setitem(
    path: impl IntoPath,
    value: Value,
    container: &Value,
) -> Result<Value, CollectionError> {
    let path = to_path(path);
    set_at(container, &path, 0, value)
        .inspect_err(|err| debug!(error = %err, "setitem failed"))
}

/// Delete `path` from `container`.
///
/// Removing a sequence element shifts the following elements down.
///
/// # Errors
///
/// - [`CollectionError::MissingKey`] if any segment of `path` is absent.
/// - [`CollectionError::TypeMismatch`] if a segment cannot be addressed.
/// - [`CollectionError::EmptyPath`] for the root path.
pub fn delitem(path: impl IntoPath, container: &Value) -> Result<Value, CollectionError> {
    let path = to_path(path);
    if path.is_empty() {
        return Err(CollectionError::EmptyPath);
    }
    delete_at(container, &path, 0)
        .inspect_err(|err| debug!(error = %err, "delitem failed"))
}

/// Like [`setitem`], but computes the new value from the current one.
///
/// `modifier` receives `None` when the path does not resolve.
///
/// # Example
///
/// ```
/// use ftools_collection::update;
/// use serde_json::{json, Value};
///
/// let doc = json!({"key": {"subkey": 4}});
/// let double = |v: Option<&Value>| json!(v.and_then(Value::as_i64).unwrap_or(0) * 2);
/// assert_eq!(update(("key", "subkey"), double, &doc).unwrap(), json!({"key": {"subkey": 8}}));
/// ```
pub fn update<F>(
    path: impl IntoPath,
    modifier: F,
    container: &Value,
) -> Result<Value, CollectionError>
where
    F: FnOnce(Option<&Value>) -> Value,
{
    let path = to_path(path);
    let value = modifier(get_at(container, &path));
    set_at(container, &path, 0, value)
        .inspect_err(|err| debug!(error = %err, "update failed"))
}
