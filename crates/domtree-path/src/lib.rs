//! Domain Tree Paths
//!
//! Hierarchical domain paths with separator-bounded ancestry.
//!
//! # Overview
//!
//! - **DomainPath**: parsed, segment-wise path value
//! - **is_descendant**: the string-level ancestry test used while walking
//!   pre-ordered listings
//!
//! # Example
//!
//! ```rust
//! use domtree_path::{is_descendant, DomainPath};
//!
//! let parent: DomainPath = "/desc".parse().unwrap();
//! let child: DomainPath = "/desc/Script".parse().unwrap();
//! assert!(parent.is_parent_of(&child));
//!
//! assert!(is_descendant("/desc", "/desc/Script", '/'));
//! assert!(!is_descendant("/desc", "/descriptions", '/'));
//! ```

#![warn(missing_docs)]

pub mod path;

// Re-exports
pub use path::{is_descendant, DomainPath, PathError, SEPARATOR};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
