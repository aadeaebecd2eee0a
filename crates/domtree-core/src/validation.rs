//! Ordering validation for pre-ordered listings
//!
//! The builder only guarantees a faithful forest when its input is listed
//! depth-first with ascending siblings. [`OrderingValidator`] checks that
//! precondition record by record while the listing is consumed.

use std::cmp::Ordering;

use domtree_path::DomainPath;

use crate::builder::TreeBuilder;
use crate::config::{BuilderConfig, OrderingMode, PrefixMatch};
use crate::error::BuildError;
use crate::record::PathRecord;

/// Checks the pre-order, ascending-sibling precondition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingValidator {
    separator: char,
}

impl OrderingValidator {
    /// Create validator for a separator
    #[inline]
    #[must_use]
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    /// Check one record against its enclosing record and previous sibling
    ///
    /// Returns the parsed path so the caller can pass it down as the next
    /// level's parent and along as the next sibling's predecessor.
    ///
    /// # Errors
    /// Returns the first violated rule for this record.
    pub fn check(
        &self,
        index: usize,
        record: &PathRecord,
        parent: Option<&DomainPath>,
        previous: Option<&DomainPath>,
    ) -> Result<DomainPath, BuildError> {
        if record.name.trim().is_empty() {
            return Err(BuildError::EmptyName {
                index,
                path: record.path.clone(),
            });
        }

        let path = DomainPath::parse_with(&record.path, self.separator)
            .map_err(|source| BuildError::InvalidPath { index, source })?;

        if let Some(parent) = parent {
            if !parent.is_parent_of(&path) {
                return Err(BuildError::MissingAncestor {
                    index,
                    path: record.path.clone(),
                    parent: parent.to_string_with(self.separator),
                });
            }
        }

        if let Some(previous) = previous {
            match previous.listing_order(&path) {
                Ordering::Less => {}
                Ordering::Equal => {
                    return Err(BuildError::DuplicatePath {
                        index,
                        path: record.path.clone(),
                    });
                }
                Ordering::Greater => {
                    return Err(BuildError::OutOfOrder {
                        index,
                        path: record.path.clone(),
                        previous: previous.to_string_with(self.separator),
                    });
                }
            }
        }

        Ok(path)
    }

    /// Validate a whole listing without keeping the forest
    ///
    /// # Errors
    /// Returns the first violation in listing order.
    pub fn validate(&self, records: &[PathRecord]) -> Result<ValidationSummary, BuildError> {
        let config = BuilderConfig::new()
            .with_separator(self.separator)
            .with_prefix_match(PrefixMatch::Boundary)
            .with_ordering(OrderingMode::Strict);
        let forest = TreeBuilder::from_config_unchecked(config).build(records)?;

        Ok(ValidationSummary {
            records: records.len(),
            roots: forest.len(),
            max_depth: forest.max_depth().unwrap_or(0),
        })
    }
}

impl Default for OrderingValidator {
    fn default() -> Self {
        Self::new(domtree_path::SEPARATOR)
    }
}

/// Shape of a listing that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Records checked
    pub records: usize,
    /// Top-level records
    pub roots: usize,
    /// Deepest nesting level (roots are depth 0)
    pub max_depth: usize,
}
