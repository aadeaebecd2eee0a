//! Error types for tree building
//!
//! Lenient builds never produce these; they come from strict ordering
//! checks and from configuration loading.

use domtree_path::PathError;

/// Errors raised while building a menu forest
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Record has a blank display name
    #[error("record #{index} at '{path}' has an empty name")]
    EmptyName {
        /// Position in the input sequence
        index: usize,
        /// Record path
        path: String,
    },

    /// Record path does not parse
    #[error("record #{index} has an invalid path: {source}")]
    InvalidPath {
        /// Position in the input sequence
        index: usize,
        /// Parse failure
        #[source]
        source: PathError,
    },

    /// Sibling repeats the previous sibling's path
    #[error("record #{index} duplicates path '{path}'")]
    DuplicatePath {
        /// Position in the input sequence
        index: usize,
        /// Repeated path
        path: String,
    },

    /// Sibling does not sort after the previous sibling
    #[error("record #{index} at '{path}' is out of order after sibling '{previous}'")]
    OutOfOrder {
        /// Position in the input sequence
        index: usize,
        /// Offending path
        path: String,
        /// Path of the sibling listed before it
        previous: String,
    },

    /// Nested record is not an immediate child of the enclosing record
    #[error("record #{index} at '{path}' is nested under '{parent}' without its intermediate ancestors")]
    MissingAncestor {
        /// Position in the input sequence
        index: usize,
        /// Offending path
        path: String,
        /// Path of the enclosing record
        parent: String,
    },
}

impl BuildError {
    /// Position of the offending record in the input sequence
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::EmptyName { index, .. }
            | Self::InvalidPath { index, .. }
            | Self::DuplicatePath { index, .. }
            | Self::OutOfOrder { index, .. }
            | Self::MissingAncestor { index, .. } => *index,
        }
    }
}

/// Errors raised while loading or checking builder configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// File that failed
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Separator cannot delimit path segments
    #[error("invalid separator {0:?} (must not be alphanumeric or whitespace)")]
    InvalidSeparator(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_reports_index() {
        let err = BuildError::OutOfOrder {
            index: 4,
            path: "/a".into(),
            previous: "/b".into(),
        };
        assert_eq!(err.index(), 4);
        assert_eq!(
            err.to_string(),
            "record #4 at '/a' is out of order after sibling '/b'"
        );
    }

    #[test]
    fn invalid_path_keeps_source() {
        let err = BuildError::InvalidPath {
            index: 0,
            source: PathError::EmptySegment { path: "/a//b".into() },
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
