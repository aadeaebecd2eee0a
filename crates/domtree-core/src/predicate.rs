//! Descent and continuation predicates

use domtree_path::is_descendant;

use crate::config::PrefixMatch;
use crate::cursor::Cursor;
use crate::record::PathRecord;

/// Prefix tests used while walking a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicates {
    separator: char,
    prefix_match: PrefixMatch,
}

impl Predicates {
    /// Create predicates for a separator and matching mode
    #[inline]
    #[must_use]
    pub fn new(separator: char, prefix_match: PrefixMatch) -> Self {
        Self {
            separator,
            prefix_match,
        }
    }

    /// Check if `candidate` lies below `ancestor`
    #[inline]
    #[must_use]
    pub fn descends(&self, ancestor: &str, candidate: &str) -> bool {
        match self.prefix_match {
            PrefixMatch::Boundary => is_descendant(ancestor, candidate, self.separator),
            PrefixMatch::Raw => candidate.starts_with(ancestor),
        }
    }

    /// Does the next unconsumed record belong under `current`?
    ///
    /// False when the cursor is exhausted.
    #[inline]
    #[must_use]
    pub fn should_descend(&self, current: &PathRecord, cursor: &Cursor<'_>) -> bool {
        cursor
            .peek()
            .is_some_and(|next| self.descends(&current.path, &next.path))
    }

    /// Does the level enclosed by `parent` have another member?
    ///
    /// False when the cursor is exhausted. The top level (`parent` is
    /// `None`) continues until the listing runs out.
    #[inline]
    #[must_use]
    pub fn should_continue(&self, parent: Option<&PathRecord>, cursor: &Cursor<'_>) -> bool {
        let Some(next) = cursor.peek() else {
            return false;
        };
        match parent {
            Some(parent) => self.descends(&parent.path, &next.path),
            None => true,
        }
    }
}

impl Default for Predicates {
    fn default() -> Self {
        Self::new(domtree_path::SEPARATOR, PrefixMatch::Boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(paths: &[&str]) -> Vec<PathRecord> {
        paths.iter().map(|p| PathRecord::from_path(*p)).collect()
    }

    #[test]
    fn boundary_match_rejects_shared_text_prefix() {
        let predicates = Predicates::default();
        assert!(predicates.descends("/a", "/a/x"));
        assert!(!predicates.descends("/a", "/a-extra"));
        assert!(!predicates.descends("/a", "/a"));
    }

    #[test]
    fn raw_match_accepts_shared_text_prefix() {
        let predicates = Predicates::new('/', PrefixMatch::Raw);
        assert!(predicates.descends("/a", "/a/x"));
        assert!(predicates.descends("/a", "/a-extra"));
    }

    #[test]
    fn descend_checks_next_record() {
        let listing = records(&["/a", "/a/x", "/b"]);
        let predicates = Predicates::default();
        let mut cursor = Cursor::new(&listing);

        let (_, a) = cursor.advance().unwrap();
        assert!(predicates.should_descend(a, &cursor));
        let (_, x) = cursor.advance().unwrap();
        assert!(!predicates.should_descend(x, &cursor));
        let (_, b) = cursor.advance().unwrap();
        assert!(!predicates.should_descend(b, &cursor));
    }

    #[test]
    fn continue_against_enclosing_parent() {
        let listing = records(&["/a", "/a/x", "/a/y", "/b"]);
        let predicates = Predicates::default();
        let mut cursor = Cursor::new(&listing);

        let (_, a) = cursor.advance().unwrap();
        let _ = cursor.advance();
        assert!(predicates.should_continue(Some(a), &cursor));
        let _ = cursor.advance();
        assert!(!predicates.should_continue(Some(a), &cursor));
        assert!(predicates.should_continue(None, &cursor));
        let _ = cursor.advance();
        assert!(!predicates.should_continue(None, &cursor));
        assert!(!predicates.should_continue(Some(a), &cursor));
    }

    #[test]
    fn custom_separator() {
        let predicates = Predicates::new('.', PrefixMatch::Boundary);
        assert!(predicates.descends(".a", ".a.b"));
        assert!(!predicates.descends(".a", ".ab"));
        assert!(!predicates.descends("/a", "/a/b"));
    }
}
