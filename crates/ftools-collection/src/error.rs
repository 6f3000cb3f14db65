//! Error types for collection operations.

use std::fmt;

use ftools_path::{format_path, Path, PathStep};
use serde_json::Value;
use thiserror::Error;

/// The shape of a value, as reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
        }
    }

    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::Sequence | ValueKind::Mapping)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        })
    }
}

fn describe(path: &Path) -> String {
    if path.is_empty() {
        "root".to_string()
    } else {
        format_path(path)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A delete addressed a key or index that does not exist.
    #[error("missing key at {}", describe(.path))]
    MissingKey { path: Path },
    /// A write tried to step into something that cannot hold `step`.
    ///
    /// `path` is the location of the offending value.
    #[error("cannot address `{step}` in {kind} at {}", describe(.path))]
    TypeMismatch {
        path: Path,
        step: PathStep,
        kind: ValueKind,
    },
    /// A projection met a value that is neither a sequence nor a mapping.
    #[error("cannot rebuild {kind} at {}", describe(.path))]
    Unsupported { path: Path, kind: ValueKind },
    /// A write addressed a sequence index too large to pad up to.
    #[error("index overflows sequence at {}", describe(.path))]
    IndexOverflow { path: Path },
    /// `delitem` was given the root path.
    #[error("path is empty")]
    EmptyPath,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftools_path::to_path;
    use serde_json::json;

    #[test]
    fn test_value_kind() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
        assert_eq!(ValueKind::of(&json!("text")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!([])), ValueKind::Sequence);
        assert_eq!(ValueKind::of(&json!({})), ValueKind::Mapping);
        assert!(!ValueKind::String.is_container());
        assert!(ValueKind::Mapping.is_container());
    }

    #[test]
    fn test_error_display() {
        let err = CollectionError::MissingKey {
            path: to_path(("a", 1usize)),
        };
        assert_eq!(err.to_string(), "missing key at /a/1");

        let err = CollectionError::TypeMismatch {
            path: to_path("a"),
            step: PathStep::from("b"),
            kind: ValueKind::Sequence,
        };
        assert_eq!(err.to_string(), "cannot address `b` in sequence at /a");

        let err = CollectionError::Unsupported {
            path: Path::new(),
            kind: ValueKind::Number,
        };
        assert_eq!(err.to_string(), "cannot rebuild number at root");

        let err = CollectionError::IndexOverflow {
            path: to_path(("a", usize::MAX)),
        };
        assert_eq!(
            err.to_string(),
            format!("index overflows sequence at /a/{}", usize::MAX)
        );
    }
}
