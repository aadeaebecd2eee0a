//! Fetch-then-build service
//!
//! Drains the provider completely before building, so a forest is never
//! built from a partial listing.

use std::path::Path;

use domtree_core::{BuilderConfig, ConfigError, MenuForest, TreeBuilder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ProviderError;
use crate::provider::{collect_sequence, PathSequenceProvider, DEFAULT_BATCH_SIZE};

/// Service configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Rows requested per page
    pub batch_size: usize,
    /// Treat an empty listing as an error instead of an empty forest
    pub reject_empty: bool,
    /// Tree builder settings
    pub builder: BuilderConfig,
}

impl ServiceConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With batch size
    #[inline]
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// With empty-listing rejection
    #[inline]
    #[must_use]
    pub fn with_reject_empty(mut self, reject_empty: bool) -> Self {
        self.reject_empty = reject_empty;
        self
    }

    /// With builder settings
    #[inline]
    #[must_use]
    pub fn with_builder(mut self, builder: BuilderConfig) -> Self {
        self.builder = builder;
        self
    }

    /// Parse TOML, with builder settings under `[builder]`
    ///
    /// # Errors
    /// Returns error on malformed TOML or invalid builder settings.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.builder.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
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

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            reject_empty: false,
            builder: BuilderConfig::default(),
        }
    }
}

/// Loads listings from a provider and builds menu forests from them
#[derive(Debug)]
pub struct DomainTreeService<P> {
    provider: P,
    builder: TreeBuilder,
    config: ServiceConfig,
}

impl<P: PathSequenceProvider> DomainTreeService<P> {
    /// Create service over a provider
    ///
    /// # Errors
    /// Returns error if the builder settings are invalid.
    pub fn new(provider: P, config: ServiceConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            provider,
            builder: TreeBuilder::new(config.builder)?,
            config,
        })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Underlying provider
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetch the complete listing below `root` and build its forest
    ///
    /// # Errors
    /// Returns provider errors, [`ProviderError::EmptyResult`] when empty
    /// listings are rejected, or strict-mode build errors.
    pub async fn load_tree(&self, root: &str) -> Result<MenuForest, ProviderError> {
        info!(root, batch_size = self.config.batch_size, "loading domain listing");
        let records = collect_sequence(&self.provider, root, self.config.batch_size).await?;

        if records.is_empty() && self.config.reject_empty {
            warn!(root, "empty domain listing");
            return Err(ProviderError::EmptyResult {
                root: root.to_string(),
            });
        }

        let forest = self.builder.build(&records)?;
        info!(
            root,
            records = records.len(),
            roots = forest.len(),
            "domain tree built"
        );
        Ok(forest)
    }
}
