//! Flat helpers for mappings.

use std::collections::HashSet;

use ftools_path::{to_path, IntoPath, PathStep};
use serde_json::{Map, Value};

use crate::access::get_at;

fn lookup<'a>(mapping: &'a Map<String, Value>, path: &[PathStep]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    get_at(mapping.get(&first.to_key())?, rest)
}

/// Copy the entries of `mapping` whose key is in `keys`.
///
/// Keys absent from `mapping` are skipped.
///
/// # Example
///
/// ```
/// use ftools_collection::mapping;
/// use serde_json::{json, Value};
///
/// let doc = json!({"foo": 4, "bar": 2, "yo": 3});
/// let picked = mapping::pick(["foo", "bar"], doc.as_object().unwrap());
/// assert_eq!(Value::Object(picked), json!({"foo": 4, "bar": 2}));
/// ```
pub fn pick<K: AsRef<str>>(
    keys: impl IntoIterator<Item = K>,
    mapping: &Map<String, Value>,
) -> Map<String, Value> {
    keys.into_iter()
        .filter_map(|key| {
            let key = key.as_ref();
            mapping.get(key).map(|value| (key.to_string(), value.clone()))
        })
        .collect()
}

/// Copy `mapping` without the entries whose key is in `keys`.
pub fn omit<K: AsRef<str>>(
    keys: impl IntoIterator<Item = K>,
    mapping: &Map<String, Value>,
) -> Map<String, Value> {
    let keys: HashSet<String> = keys.into_iter().map(|k| k.as_ref().to_string()).collect();
    mapping
        .iter()
        .filter(|(key, _)| !keys.contains(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Same keys, values produced by `modifier`.
pub fn map_values<F>(mut modifier: F, mapping: &Map<String, Value>) -> Map<String, Value>
where
    F: FnMut(&Value) -> Value,
{
    mapping
        .iter()
        .map(|(key, value)| (key.clone(), modifier(value)))
        .collect()
}

/// Same values, keys produced by `modifier`.
///
/// When two keys map to the same new key, the one iterated last wins.
pub fn map_keys<F>(mut modifier: F, mapping: &Map<String, Value>) -> Map<String, Value>
where
    F: FnMut(&str) -> String,
{
    mapping
        .iter()
        .map(|(key, value)| (modifier(key), value.clone()))
        .collect()
}

/// Build a mapping from picked keys plus renamed lookups.
///
/// Each alias is a `(name, path)` pair: `name` receives the value at `path`
/// of `mapping`, or `null` when the path does not resolve. Picked keys win
/// over aliases with the same name.
///
/// # Example
///
/// ```
/// use ftools_collection::mapping;
/// use serde_json::{json, Value};
///
/// let base = json!({"a": 1, "b": {"c": 2}});
/// let out = mapping::extract(["a"], [("c", ("b", "c"))], base.as_object().unwrap());
/// assert_eq!(Value::Object(out), json!({"a": 1, "c": 2}));
/// ```
pub fn extract<K, N, P>(
    keys: impl IntoIterator<Item = K>,
    aliases: impl IntoIterator<Item = (N, P)>,
    mapping: &Map<String, Value>,
) -> Map<String, Value>
where
    K: AsRef<str>,
    N: Into<String>,
    P: IntoPath,
{
    let mut out: Map<String, Value> = aliases
        .into_iter()
        .map(|(name, path)| {
            let value = lookup(mapping, &to_path(path))
                .cloned()
                .unwrap_or(Value::Null);
            (name.into(), value)
        })
        .collect();
    out.extend(pick(keys, mapping));
    out
}
