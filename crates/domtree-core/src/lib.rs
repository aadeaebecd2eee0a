//! Domain Tree Core
//!
//! Rebuilds nested navigation menus from flat path listings.
//!
//! # Overview
//!
//! A lookup service lists every path under a root in pre-order depth-first
//! order. The core provides:
//! - **PathRecord**: one listed entry with its opaque payload
//! - **TreeBuilder**: single-pass reconstruction of the nesting
//! - **MenuForest** / **MenuNode**: the resulting immutable tree
//! - **OrderingValidator**: optional fail-fast check of the listing order
//!
//! # Example
//!
//! ```rust
//! use domtree_core::{build_tree, PathRecord};
//!
//! let listing: Vec<PathRecord> = ["/a", "/a/x", "/a/y", "/b"]
//!     .into_iter()
//!     .map(PathRecord::from_path)
//!     .collect();
//!
//! let forest = build_tree(&listing);
//! assert_eq!(forest.len(), 2);
//! assert_eq!(forest.roots()[0].children().len(), 2);
//! assert!(forest.roots()[0].is_folder());
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod cursor;
pub mod error;
pub mod forest;
pub mod node;
pub mod predicate;
pub mod record;
pub mod validation;

// Re-exports
pub use builder::{build_tree, TreeBuilder};
pub use config::{BuilderConfig, OrderingMode, PrefixMatch};
pub use cursor::Cursor;
pub use error::{BuildError, ConfigError};
pub use forest::{MenuForest, PreOrder};
pub use node::{MenuNode, NodeIcon};
pub use predicate::Predicates;
pub use record::{PathKind, PathRecord, RecordPayload};
pub use validation::{OrderingValidator, ValidationSummary};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for tree building
    pub use crate::{
        build_tree, BuildError, BuilderConfig, MenuForest, MenuNode, NodeIcon, OrderingMode,
        PathKind, PathRecord, PrefixMatch, TreeBuilder,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
