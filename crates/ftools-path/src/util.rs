use crate::types::{Path, PathStep};
use crate::PathError;

/// Escapes a path component for display.
///
/// Paths render in JSON Pointer form (RFC 6901) so a key holding `/` cannot
/// be mistaken for two steps: `~` becomes `~0` and `/` becomes `~1`.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Render a path as a slash separated string.
///
/// Returns an empty string for the root path.
///
/// # Example
///
/// ```
/// use ftools_path::{format_path, to_path};
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&to_path(("a", 0usize, "b/c"))), "/a/0/b~1c");
/// ```
pub fn format_path(path: &[PathStep]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        match step {
            PathStep::Index(idx) => out.push_str(&idx.to_string()),
            PathStep::Key(key) => out.push_str(&escape_component(key)),
        }
    }
    out
}

/// Check if a path points to the container itself.
pub fn is_root(path: &[PathStep]) -> bool {
    path.is_empty()
}

/// Check if `parent` path strictly contains the `child` path.
///
/// # Example
///
/// ```
/// use ftools_path::{is_child, to_path};
///
/// let parent = to_path("a");
/// let child = to_path(("a", 0usize));
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// ```
pub fn is_child(parent: &[PathStep], child: &[PathStep]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`PathError::NoParent`] for the root path.
pub fn parent(path: &[PathStep]) -> Result<Path, PathError> {
    match path.split_last() {
        Some((_, init)) => Ok(init.to_vec()),
        None => Err(PathError::NoParent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_path;

    #[test]
    fn test_escape_component() {
        assert_eq!(escape_component("foo"), "foo");
        assert_eq!(escape_component("a~b"), "a~0b");
        assert_eq!(escape_component("c/d"), "c~1d");
        assert_eq!(escape_component("a~b/c"), "a~0b~1c");
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[]), "");
        assert_eq!(format_path(&to_path("foo")), "/foo");
        assert_eq!(format_path(&to_path(("foo", 1usize))), "/foo/1");
        assert_eq!(format_path(&to_path("")), "/");
    }

    #[test]
    fn test_is_root() {
        assert!(is_root(&[]));
        assert!(!is_root(&to_path("foo")));
    }

    #[test]
    fn test_is_child() {
        let parent = to_path("foo");
        let child = to_path(("foo", "bar"));
        let sibling = to_path("baz");

        assert!(is_child(&parent, &child));
        assert!(!is_child(&child, &parent));
        assert!(!is_child(&parent, &sibling));
        assert!(!is_child(&parent, &parent));
        assert!(is_child(&[], &parent));
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent(&to_path(("foo", "bar"))).unwrap(), to_path("foo"));
        assert_eq!(parent(&to_path("foo")).unwrap(), Path::new());
        assert_eq!(parent(&[]), Err(PathError::NoParent));
    }
}
