//! Depth-first enumeration of nested collections.
//!
//! Traversal keeps an explicit stack of child iterators instead of recursing,
//! so arbitrarily deep inputs do not grow the call stack.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use ftools_path::{Path, PathStep};
use serde_json::{map, Value};

/// Whether `value` is a sequence or mapping. Text is not a container.
pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

enum Children<'a> {
    Sequence(Enumerate<slice::Iter<'a, Value>>),
    Mapping(map::Iter<'a>),
}

impl<'a> Children<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(arr) => Some(Children::Sequence(arr.iter().enumerate())),
            Value::Object(map) => Some(Children::Mapping(map.iter())),
            _ => None,
        }
    }

    fn next(&mut self) -> Option<(PathStep, &'a Value)> {
        match self {
            Children::Sequence(iter) => iter.next().map(|(idx, v)| (PathStep::Index(idx), v)),
            Children::Mapping(iter) => iter.next().map(|(k, v)| (PathStep::Key(k.clone()), v)),
        }
    }
}

struct Frame<'a> {
    prefix: Path,
    children: Children<'a>,
}

/// Iterator over every `(path, value)` pair of a collection, created by
/// [`branches`].
///
/// Nodes are yielded before their descendants (pre-order). Inside a node,
/// sequence elements come in index order and mapping entries in the map's
/// iteration order.
pub struct Branches<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Branches<'a> {
    fn new(container: &'a Value) -> Self {
        let stack = Children::of(container)
            .map(|children| {
                vec![Frame {
                    prefix: Path::new(),
                    children,
                }]
            })
            .unwrap_or_default();
        Self { stack }
    }
}

impl<'a> Iterator for Branches<'a> {
    type Item = (Path, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some((step, value)) = frame.children.next() else {
                self.stack.pop();
                continue;
            };
            let mut path = Vec::with_capacity(frame.prefix.len() + 1);
            path.extend_from_slice(&frame.prefix);
            path.push(step);
            if let Some(children) = Children::of(value) {
                self.stack.push(Frame {
                    prefix: path.clone(),
                    children,
                });
            }
            return Some((path, value));
        }
    }
}

impl FusedIterator for Branches<'_> {}

/// Iterator over the non-container `(path, value)` pairs of a collection,
/// created by [`leaves`].
pub struct Leaves<'a> {
    inner: Branches<'a>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (Path, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|(_, value)| !is_container(value))
    }
}

impl FusedIterator for Leaves<'_> {}

/// Enumerate every path and value of `container` and its descendants,
/// intermediate containers included.
///
/// A scalar container yields nothing. Each call starts a fresh traversal.
///
/// # Example
///
/// ```
/// use ftools_collection::branches;
/// use ftools_path::to_path;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1}});
/// let all: Vec<_> = branches(&doc).collect();
/// assert_eq!(all, vec![
///     (to_path("a"), &json!({"b": 1})),
///     (to_path(("a", "b")), &json!(1)),
/// ]);
/// ```
pub fn branches(container: &Value) -> Branches<'_> {
    Branches::new(container)
}

/// Like [`branches`], but only yields values that are not containers.
pub fn leaves(container: &Value) -> Leaves<'_> {
    Leaves {
        inner: branches(container),
    }
}
