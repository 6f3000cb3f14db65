//! Structural projection: keep or drop parts of a collection.

use ftools_path::{to_path, IntoPath, Path, PathStep};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{CollectionError, ValueKind};
use crate::sequence;

/// Selected paths grouped by shared prefix.
#[derive(Debug, Clone, PartialEq)]
enum PathTree {
    /// Everything below this node is kept.
    Selected,
    Branch(IndexMap<PathStep, PathTree>),
}

impl PathTree {
    fn branch() -> Self {
        PathTree::Branch(IndexMap::new())
    }

    fn from_paths(paths: impl IntoIterator<Item = Path>) -> Self {
        let mut tree = PathTree::branch();
        for path in paths {
            tree.select(&path);
        }
        tree
    }

    /// Mark `path` as selected.
    ///
    /// A selected node swallows anything selected below it later, and
    /// selecting a node replaces any partial selection under it.
    fn select(&mut self, path: &[PathStep]) {
        match path.split_first() {
            None => *self = PathTree::Selected,
            Some((step, rest)) => {
                if let PathTree::Branch(children) = self {
                    children
                        .entry(step.clone())
                        .or_insert_with(PathTree::branch)
                        .select(rest);
                }
            }
        }
    }

    /// Fold `other` into `self` under the same rules as [`PathTree::select`].
    fn merge(&mut self, other: &PathTree) {
        match (self, other) {
            (PathTree::Selected, _) => {}
            (this, PathTree::Selected) => *this = PathTree::Selected,
            (PathTree::Branch(mine), PathTree::Branch(theirs)) => {
                for (step, subtree) in theirs {
                    match mine.entry(step.clone()) {
                        Entry::Occupied(mut entry) => entry.get_mut().merge(subtree),
                        Entry::Vacant(entry) => {
                            entry.insert(subtree.clone());
                        }
                    }
                }
            }
        }
    }
}

fn rebuild(
    tree: &PathTree,
    container: &Value,
    prefix: &mut Path,
) -> Result<Value, CollectionError> {
    let children = match tree {
        PathTree::Selected => return Ok(container.clone()),
        PathTree::Branch(children) => children,
    };

    match container {
        Value::Object(map) => {
            // `0` and `"0"` name the same mapping key
            let mut by_key: IndexMap<String, PathTree> = IndexMap::new();
            for (step, subtree) in children {
                match by_key.entry(step.to_key()) {
                    Entry::Occupied(mut entry) => entry.get_mut().merge(subtree),
                    Entry::Vacant(entry) => {
                        entry.insert(subtree.clone());
                    }
                }
            }

            let mut out = Map::new();
            for (key, subtree) in &by_key {
                let Some(value) = map.get(key) else {
                    trace!(key = %key, "pick skipped missing key");
                    continue;
                };
                prefix.push(PathStep::Key(key.clone()));
                let picked = rebuild(subtree, value, prefix)?;
                prefix.pop();
                out.insert(key.clone(), picked);
            }
            Ok(Value::Object(out))
        }
        Value::Array(arr) => {
            let mut selected = Vec::with_capacity(children.len());
            for (step, subtree) in children {
                match step {
                    PathStep::Index(idx) => selected.push((*idx, subtree)),
                    PathStep::Key(_) => {
                        return Err(CollectionError::TypeMismatch {
                            path: prefix.clone(),
                            step: step.clone(),
                            kind: ValueKind::Sequence,
                        })
                    }
                }
            }
            selected.sort_by_key(|(idx, _)| *idx);

            let mut out = Vec::with_capacity(selected.len());
            for (idx, subtree) in selected {
                let Some(value) = arr.get(idx) else {
                    trace!(index = idx, len = arr.len(), "pick skipped missing index");
                    continue;
                };
                prefix.push(PathStep::Index(idx));
                out.push(rebuild(subtree, value, prefix)?);
                prefix.pop();
            }
            Ok(Value::Array(out))
        }
        other => Err(CollectionError::Unsupported {
            path: prefix.clone(),
            kind: ValueKind::of(other),
        }),
    }
}

/// Build a collection of the same kind as `container` holding only `paths`.
///
/// Intermediate structure is preserved, so picking `("a", "b")` from
/// `{"a": {"b": 1, "c": 2}}` gives `{"a": {"b": 1}}`. Sequences keep the
/// selected indices in ascending order; mappings keep selected keys in the
/// order they were first selected. Paths that do not resolve are skipped.
///
/// Selecting a path also selects everything below it: when both `("a",)` and
/// `("a", "b")` are given, all of `"a"` is kept whatever the order.
///
/// # Errors
///
/// - [`CollectionError::Unsupported`] if a path continues through a scalar.
/// - [`CollectionError::TypeMismatch`] if a key step addresses a sequence.
///
/// # Example
///
/// ```
/// use ftools_collection::pick;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1, "c": 2}, "d": [10, 20, 30]});
/// let out = pick([vec!["a", "b"], vec!["e"]], &doc).unwrap();
/// assert_eq!(out, json!({"a": {"b": 1}}));
/// ```
pub fn pick<P: IntoPath>(
    paths: impl IntoIterator<Item = P>,
    container: &Value,
) -> Result<Value, CollectionError> {
    let tree = PathTree::from_paths(paths.into_iter().map(to_path));
    rebuild(&tree, container, &mut Path::new())
        .inspect_err(|err| debug!(error = %err, "pick failed"))
}

/// Copy `container` without the given top-level keys or indices.
///
/// Entries that do not exist are ignored. Only the first level is affected.
///
/// # Errors
///
/// - [`CollectionError::Unsupported`] if `container` is a scalar.
/// - [`CollectionError::TypeMismatch`] if a key step addresses a sequence.
///
/// # Example
///
/// ```
/// use ftools_collection::omit;
/// use serde_json::json;
///
/// let doc = json!({"foo": 4, "bar": 2, "yo": 3});
/// assert_eq!(omit(["foo", "bar", "non_existing"], &doc).unwrap(), json!({"yo": 3}));
/// assert_eq!(omit([1usize, 2], &json!([1, 2, 3])).unwrap(), json!([1]));
/// ```
pub fn omit<S: Into<PathStep>>(
    keys: impl IntoIterator<Item = S>,
    container: &Value,
) -> Result<Value, CollectionError> {
    match container {
        Value::Object(map) => {
            let keys = keys
                .into_iter()
                .map(Into::<PathStep>::into)
                .map(|step| step.to_key());
            Ok(Value::Object(crate::mapping::omit(keys, map)))
        }
        Value::Array(arr) => {
            let indices = keys
                .into_iter()
                .map(Into::<PathStep>::into)
                .map(|step| match step {
                    PathStep::Index(idx) => Ok(idx),
                    step => Err(CollectionError::TypeMismatch {
                        path: Path::new(),
                        step,
                        kind: ValueKind::Sequence,
                    }),
                })
                .collect::<Result<Vec<usize>, _>>()?;
            Ok(Value::Array(sequence::omit(indices, arr)))
        }
        other => Err(CollectionError::Unsupported {
            path: Path::new(),
            kind: ValueKind::of(other),
        }),
    }
}
