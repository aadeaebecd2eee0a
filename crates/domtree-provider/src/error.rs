//! Error types for providers and the tree service

use domtree_core::{BuildError, ConfigError};

/// Errors raised while fetching a listing or building from it
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Page size of zero would never make progress
    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    /// Provider returned nothing under the root
    #[error("no paths found under '{root}'")]
    EmptyResult {
        /// Requested root
        root: String,
    },

    /// Provider stopped returning rows before the advertised total
    #[error("listing under '{root}' incomplete: expected {expected} rows, received {received}")]
    Incomplete {
        /// Requested root
        root: String,
        /// Advertised total
        expected: usize,
        /// Rows actually received
        received: usize,
    },

    /// Listing file could not be read
    #[error("failed to read listing '{path}': {source}")]
    Io {
        /// File that failed
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Listing is not valid JSON for this schema
    #[error("invalid listing: {0}")]
    Json(#[from] serde_json::Error),

    /// Service configuration rejected
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Strict build rejected the listing
    #[error("build failed: {0}")]
    Build(#[from] BuildError),
}
