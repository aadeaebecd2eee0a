//! Position state shared by every level of one build

use crate::record::PathRecord;

/// Monotonic read position over a record sequence
///
/// One cursor is created per build and lent by `&mut` to each recursive
/// level, so the sequence is consumed exactly once, left to right.
#[derive(Debug)]
pub struct Cursor<'a> {
    records: &'a [PathRecord],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor at the start of `records`
    #[inline]
    #[must_use]
    pub fn new(records: &'a [PathRecord]) -> Self {
        Self {
            records,
            position: 0,
        }
    }

    /// Index of the next unconsumed record
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of unconsumed records
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.records.len() - self.position
    }

    /// Check if every record has been consumed
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.records.len()
    }

    /// Next unconsumed record, without consuming it
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&'a PathRecord> {
        self.records.get(self.position)
    }

    /// Consume the next record, returning it with its index
    #[inline]
    pub fn advance(&mut self) -> Option<(usize, &'a PathRecord)> {
        let record = self.records.get(self.position)?;
        let index = self.position;
        self.position += 1;
        Some((index, record))
    }
}
