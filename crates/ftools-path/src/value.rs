//! Conversion between JSON values and paths.

use serde_json::Value;

use crate::types::{Path, PathStep};
use crate::PathError;

impl TryFrom<&Value> for PathStep {
    type Error = PathError;

    /// Strings become keys and non-negative integers become indices.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(key) => Ok(PathStep::Key(key.clone())),
            Value::Number(num) => num
                .as_u64()
                .and_then(|idx| usize::try_from(idx).ok())
                .map(PathStep::Index)
                .ok_or(PathError::InvalidPathStep),
            _ => Err(PathError::InvalidPathStep),
        }
    }
}

impl From<&PathStep> for Value {
    fn from(step: &PathStep) -> Self {
        match step {
            PathStep::Index(idx) => Value::from(*idx),
            PathStep::Key(key) => Value::String(key.clone()),
        }
    }
}

/// Read a path out of a JSON value.
///
/// An array is an ordered sequence of steps; any other value is a single
/// step.
///
/// # Example
///
/// ```
/// use ftools_path::{path_from_value, to_path};
/// use serde_json::json;
///
/// assert_eq!(path_from_value(&json!(["a", 0])).unwrap(), to_path(("a", 0usize)));
/// assert_eq!(path_from_value(&json!("a")).unwrap(), to_path("a"));
/// assert!(path_from_value(&json!([-1])).is_err());
/// ```
pub fn path_from_value(value: &Value) -> Result<Path, PathError> {
    match value {
        Value::Array(steps) => steps.iter().map(PathStep::try_from).collect(),
        step => Ok(vec![PathStep::try_from(step)?]),
    }
}

/// Render a path as a JSON array of keys and indices.
pub fn path_to_value(path: &[PathStep]) -> Value {
    Value::Array(path.iter().map(Value::from).collect())
}
