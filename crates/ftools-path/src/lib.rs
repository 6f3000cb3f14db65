//! Collection path utilities.
//!
//! A path addresses a location inside a nested collection of sequences and
//! mappings. Each step is either a mapping key or a sequence index.
//!
//! # Example
//!
//! ```
//! use ftools_path::{to_path, format_path, PathStep};
//!
//! // A single key normalizes to a one-step path
//! assert_eq!(to_path("key"), vec![PathStep::from("key")]);
//!
//! // Tuples mix keys and indices
//! let path = to_path(("key", 0usize, "subkey"));
//! assert_eq!(format_path(&path), "/key/0/subkey");
//!
//! // Normalizing a path again is a no-op
//! assert_eq!(to_path(path.clone()), path);
//! ```

use thiserror::Error;

pub mod types;
pub use types::{IntoPath, Path, PathStep};

pub mod util;
pub use util::{escape_component, format_path, is_child, is_root, parent};

pub mod value;
pub use value::{path_from_value, path_to_value};

/// Convert a raw path into its canonical form.
///
/// Accepts a single key or index, or an ordered sequence of them. Text is
/// always treated as one key.
///
/// # Example
///
/// ```
/// use ftools_path::{to_path, PathStep};
///
/// assert_eq!(to_path(0usize), vec![PathStep::Index(0)]);
/// assert_eq!(to_path(vec!["a", "b"]), vec![PathStep::from("a"), PathStep::from("b")]);
/// ```
pub fn to_path(raw: impl IntoPath) -> Path {
    raw.into_path()
}

/// Errors from path helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The root path has no parent.
    #[error("NO_PARENT")]
    NoParent,
    /// A JSON value is neither a string nor a non-negative integer.
    #[error("Invalid path step")]
    InvalidPathStep,
}
