use thiserror::Error;

use crate::parser::ParseError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A non-terminal field of the path does not exist.
    #[error("Invalid path: `{segment}` is not a field of {type_name}")]
    InvalidPath {
        segment: String,
        type_name: &'static str,
    },

    /// The terminal field of the path does not exist.
    #[error("Property `{field}` not found on {type_name}")]
    PropertyNotFound {
        field: String,
        type_name: &'static str,
    },

    #[error("{type_name} does not support keyed indexing")]
    UnsupportedIndex { type_name: &'static str },

    #[error("Key `{key}` not found in {type_name}")]
    KeyNotFound {
        key: String,
        type_name: &'static str,
    },

    #[error("{type_name} is not a sequence and cannot be filtered")]
    UnsupportedFilter { type_name: &'static str },

    #[error("Malformed path: {0}")]
    Malformed(#[from] ParseError),
}

/// Coarse classification of [`PathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidPath,
    PropertyNotFound,
    UnsupportedIndex,
    KeyNotFound,
    UnsupportedFilter,
    MalformedClause,
}

impl PathError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::InvalidPath { .. } => ErrorKind::InvalidPath,
            PathError::PropertyNotFound { .. } => ErrorKind::PropertyNotFound,
            PathError::UnsupportedIndex { .. } => ErrorKind::UnsupportedIndex,
            PathError::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            PathError::UnsupportedFilter { .. } => ErrorKind::UnsupportedFilter,
            PathError::Malformed(_) => ErrorKind::MalformedClause,
        }
    }

    /// Whether the path named something that does not exist, as opposed to
    /// something that exists but lacks a capability or a malformed path.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::PropertyNotFound | ErrorKind::KeyNotFound
        )
    }
}
