//! Type definitions for collection paths.

use std::fmt;

/// A step in a collection path.
///
/// Either a mapping key or a non-negative sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathStep {
    /// Sequence index (0-based).
    Index(usize),
    /// Mapping key.
    Key(String),
}

/// A canonical collection path.
pub type Path = Vec<PathStep>;

impl PathStep {
    pub fn is_index(&self) -> bool {
        matches!(self, PathStep::Index(_))
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Index(idx) => Some(*idx),
            PathStep::Key(_) => None,
        }
    }

    /// The key this step addresses inside a mapping.
    ///
    /// Mapping keys are strings, so an index step addresses its decimal form.
    pub fn to_key(&self) -> String {
        match self {
            PathStep::Index(idx) => idx.to_string(),
            PathStep::Key(key) => key.clone(),
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Index(idx) => write!(f, "{idx}"),
            PathStep::Key(key) => f.write_str(key),
        }
    }
}

impl From<usize> for PathStep {
    fn from(idx: usize) -> Self {
        PathStep::Index(idx)
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<&String> for PathStep {
    fn from(key: &String) -> Self {
        PathStep::Key(key.clone())
    }
}

/// Anything that can be normalized into a [`Path`].
///
/// A single step becomes a one-element path. Ordered sequences of steps
/// (vectors, slices, arrays and tuples) keep their order. Text is always a
/// single key and is never split into characters.
pub trait IntoPath {
    fn into_path(self) -> Path;
}

impl IntoPath for PathStep {
    fn into_path(self) -> Path {
        vec![self]
    }
}

impl IntoPath for usize {
    fn into_path(self) -> Path {
        vec![PathStep::Index(self)]
    }
}

impl IntoPath for &str {
    fn into_path(self) -> Path {
        vec![PathStep::from(self)]
    }
}

impl IntoPath for String {
    fn into_path(self) -> Path {
        vec![PathStep::Key(self)]
    }
}

impl IntoPath for &String {
    fn into_path(self) -> Path {
        vec![PathStep::from(self)]
    }
}

impl<T: Into<PathStep>> IntoPath for Vec<T> {
    fn into_path(self) -> Path {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<PathStep> + Clone> IntoPath for &Vec<T> {
    fn into_path(self) -> Path {
        self.as_slice().into_path()
    }
}

impl<T: Into<PathStep> + Clone> IntoPath for &[T] {
    fn into_path(self) -> Path {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl<T: Into<PathStep>, const N: usize> IntoPath for [T; N] {
    fn into_path(self) -> Path {
        self.into_iter().map(Into::into).collect()
    }
}

macro_rules! tuple_into_path {
    ($($name:ident),+) => {
        impl<$($name: Into<PathStep>),+> IntoPath for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_path(self) -> Path {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

tuple_into_path!(A);
tuple_into_path!(A, B);
tuple_into_path!(A, B, C);
tuple_into_path!(A, B, C, D);
tuple_into_path!(A, B, C, D, E);
tuple_into_path!(A, B, C, D, E, F);
tuple_into_path!(A, B, C, D, E, F, G);
tuple_into_path!(A, B, C, D, E, F, G, H);
