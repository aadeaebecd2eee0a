//! Domain Tree Providers
//!
//! Sources of pre-ordered path listings and the service that turns a
//! complete listing into a menu forest.
//!
//! # Overview
//!
//! - **PathSequenceProvider**: async, paged listing source
//! - **InMemoryProvider** / **JsonFileProvider**: ready-made sources
//! - **DomainTreeService**: drains a provider, then builds
//!
//! # Example
//!
//! ```rust
//! use domtree_core::PathRecord;
//! use domtree_provider::{DomainTreeService, InMemoryProvider, ServiceConfig};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let provider = InMemoryProvider::new(
//!     ["/a", "/a/x", "/b"].into_iter().map(PathRecord::from_path).collect(),
//! );
//! let service = DomainTreeService::new(provider, ServiceConfig::new()).unwrap();
//! let forest = service.load_tree("/").await.unwrap();
//! assert_eq!(forest.len(), 2);
//! # });
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod memory;
pub mod provider;
pub mod service;

// Re-exports
pub use error::ProviderError;
pub use memory::{InMemoryProvider, JsonFileProvider};
pub use provider::{collect_sequence, PagedResult, PathSequenceProvider, DEFAULT_BATCH_SIZE};
pub use service::{DomainTreeService, ServiceConfig};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
