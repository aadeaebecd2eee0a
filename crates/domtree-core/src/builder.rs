//! Single-pass tree builder
//!
//! Turns a flat listing of path records, given in pre-order depth-first
//! order, into a nested [`MenuForest`].
//!
//! # Traversal
//!
//! One [`Cursor`] is lent by `&mut` to every level. Each level:
//! 1. consumes the next record and builds its node
//! 2. recurses into the node's children if the following record descends
//!    from it (descent predicate)
//! 3. keeps going while the following record still descends from the
//!    level's enclosing record (continuation predicate); the top level
//!    keeps going until the listing runs out
//!
//! Every record is visited once, so a build is `O(n)` records plus `O(n)`
//! prefix tests, with recursion as deep as the deepest nesting.

use domtree_path::DomainPath;
use tracing::{debug, trace, warn};

use crate::config::{BuilderConfig, OrderingMode};
use crate::cursor::Cursor;
use crate::error::{BuildError, ConfigError};
use crate::forest::MenuForest;
use crate::node::MenuNode;
use crate::predicate::Predicates;
use crate::record::PathRecord;
use crate::validation::OrderingValidator;

/// Builds menu forests from pre-ordered path listings
///
/// Holds no state between builds; one builder can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeBuilder {
    config: BuilderConfig,
    predicates: Predicates,
}

/// Record whose children a level is building
struct Enclosing<'a> {
    record: &'a PathRecord,
    /// Parsed path, only in strict mode
    parsed: Option<DomainPath>,
}

impl TreeBuilder {
    /// Create builder from configuration
    ///
    /// # Errors
    /// Returns error if the configuration is invalid
    pub fn new(config: BuilderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config_unchecked(config))
    }

    pub(crate) fn from_config_unchecked(config: BuilderConfig) -> Self {
        Self {
            config,
            predicates: Predicates::new(config.separator, config.prefix_match),
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build the forest for `records`
    ///
    /// An empty listing yields an empty forest. In lenient mode a listing
    /// that breaks the ordering precondition still yields a forest, just not
    /// a faithful one, and this never fails.
    ///
    /// # Errors
    /// In strict mode, returns the first ordering violation.
    pub fn build(&self, records: &[PathRecord]) -> Result<MenuForest, BuildError> {
        debug!(
            records = records.len(),
            ordering = ?self.config.ordering,
            prefix_match = ?self.config.prefix_match,
            "building menu forest"
        );

        let validator = match self.config.ordering {
            OrderingMode::Strict => Some(OrderingValidator::new(self.config.separator)),
            OrderingMode::Lenient => None,
        };

        let mut cursor = Cursor::new(records);
        let roots = self
            .build_level(&mut cursor, None, validator.as_ref())
            .map_err(|e| {
                warn!(error = %e, index = e.index(), "listing rejected");
                e
            })?;
        let forest = MenuForest::new(roots);

        debug!(
            roots = forest.len(),
            nodes = forest.node_count(),
            "menu forest built"
        );
        Ok(forest)
    }

    fn build_level<'a>(
        &self,
        cursor: &mut Cursor<'a>,
        parent: Option<&Enclosing<'a>>,
        validator: Option<&OrderingValidator>,
    ) -> Result<Vec<MenuNode>, BuildError> {
        let mut level = Vec::new();
        let mut previous: Option<DomainPath> = None;

        while let Some((index, current)) = cursor.advance() {
            let parsed = match validator {
                Some(v) => Some(v.check(
                    index,
                    current,
                    parent.and_then(|p| p.parsed.as_ref()),
                    previous.as_ref(),
                )?),
                None => None,
            };
            let enclosing = Enclosing {
                record: current,
                parsed,
            };

            let children = if self.predicates.should_descend(current, cursor) {
                trace!(index, path = %current.path, "descending");
                self.build_level(cursor, Some(&enclosing), validator)?
            } else {
                Vec::new()
            };
            level.push(MenuNode::from_record(current, children));
            previous = enclosing.parsed;

            if !self
                .predicates
                .should_continue(parent.map(|p| p.record), cursor)
            {
                break;
            }
        }

        Ok(level)
    }
}

/// Build with the default lenient configuration
#[must_use]
pub fn build_tree(records: &[PathRecord]) -> MenuForest {
    // Lenient builds have no failure path.
    TreeBuilder::default().build(records).unwrap_or_default()
}
