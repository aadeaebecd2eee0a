//! Builder configuration
//!
//! Defaults reproduce the lookup listing conventions: `/` separator,
//! separator-bounded matching, no ordering checks.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the descent and continuation predicates compare paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMatch {
    /// Candidate must continue with the separator after the ancestor path
    #[default]
    Boundary,
    /// Plain string prefix; `/a-extra` counts as a child of `/a`
    Raw,
}

/// Whether the builder verifies the pre-order precondition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingMode {
    /// Malformed listings degrade silently into some forest
    #[default]
    Lenient,
    /// Fail fast on the first ordering violation
    Strict,
}

/// Tree builder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Hierarchy separator
    pub separator: char,
    /// Prefix test used by the predicates
    pub prefix_match: PrefixMatch,
    /// Ordering verification
    pub ordering: OrderingMode,
}

impl BuilderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With separator
    #[inline]
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// With prefix matching mode
    #[inline]
    #[must_use]
    pub fn with_prefix_match(mut self, prefix_match: PrefixMatch) -> Self {
        self.prefix_match = prefix_match;
        self
    }

    /// With ordering mode
    #[inline]
    #[must_use]
    pub fn with_ordering(mut self, ordering: OrderingMode) -> Self {
        self.ordering = ordering;
        self
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidSeparator`] for alphanumeric or
    /// whitespace separators.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_alphanumeric() || self.separator.is_whitespace() {
            return Err(ConfigError::InvalidSeparator(self.separator));
        }
        Ok(())
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// Returns error on malformed TOML or an invalid separator.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            separator: domtree_path::SEPARATOR,
            prefix_match: PrefixMatch::Boundary,
            ordering: OrderingMode::Lenient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = BuilderConfig::new();
        assert_eq!(config.separator, '/');
        assert_eq!(config.prefix_match, PrefixMatch::Boundary);
        assert_eq!(config.ordering, OrderingMode::Lenient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = BuilderConfig::new()
            .with_separator('.')
            .with_prefix_match(PrefixMatch::Raw)
            .with_ordering(OrderingMode::Strict);
        assert_eq!(config.separator, '.');
        assert_eq!(config.prefix_match, PrefixMatch::Raw);
        assert_eq!(config.ordering, OrderingMode::Strict);
    }

    #[test]
    fn parses_partial_toml() {
        let config = BuilderConfig::from_toml_str("ordering = \"strict\"").unwrap();
        assert_eq!(config.ordering, OrderingMode::Strict);
        assert_eq!(config.separator, '/');
    }

    #[test]
    fn rejects_alphanumeric_separator() {
        let err = BuilderConfig::from_toml_str("separator = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeparator('x')));
        assert!(BuilderConfig::new().with_separator(' ').validate().is_err());
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = BuilderConfig::from_toml_str("prefix_match = \"fuzzy\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "separator = \":\"\nprefix_match = \"raw\"").unwrap();
        let config = BuilderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.separator, ':');
        assert_eq!(config.prefix_match, PrefixMatch::Raw);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = BuilderConfig::from_file("/nonexistent/domtree.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
