//! Path-based access and copy-on-write updates for nested collections.
//!
//! A collection is a [`serde_json::Value`]: arrays are sequences, objects are
//! mappings and everything else (text included) is an atomic value. Paths are
//! built with [`to_path`] from a single key or index, or from an ordered
//! sequence of them.
//!
//! Nothing here mutates its input. Writes return a new container and leave
//! the caller's value as it was.
//!
//! # Example
//!
//! ```
//! use ftools_collection::{delitem, getitem, hasitem, leaves, pick, setitem};
//! use ftools_path::to_path;
//! use serde_json::json;
//!
//! let doc = json!({});
//!
//! // Missing segments are created; an index step creates a sequence
//! let doc = setitem(("a", 0usize), json!("x"), &doc).unwrap();
//! assert_eq!(doc, json!({"a": ["x"]}));
//!
//! // Reads never fail
//! assert_eq!(getitem(("a", 0usize), &doc), Some(&json!("x")));
//! assert_eq!(getitem(("a", 5usize), &doc), None);
//!
//! // Deletes return a new container
//! let emptied = delitem(("a", 0usize), &doc).unwrap();
//! assert!(!hasitem(("a", 0usize), &emptied));
//! assert!(hasitem(("a", 0usize), &doc));
//!
//! // Traversal and projection
//! let doc = json!({"a": {"b": 1, "c": 2}});
//! let found: Vec<_> = leaves(&doc).map(|(path, _)| path).collect();
//! assert_eq!(found, vec![to_path(("a", "b")), to_path(("a", "c"))]);
//! assert_eq!(pick([("a", "b")], &doc).unwrap(), json!({"a": {"b": 1}}));
//! ```

pub mod access;
pub mod error;
pub mod mapping;
pub mod mutate;
pub mod project;
pub mod sequence;
pub mod walk;

pub use access::{getitem, hasitem};
pub use error::{CollectionError, ValueKind};
pub use mutate::{delitem, setitem, update};
pub use project::{omit, pick};
pub use walk::{branches, is_container, leaves, Branches, Leaves};

pub use ftools_path::{format_path, to_path, IntoPath, Path, PathStep};
