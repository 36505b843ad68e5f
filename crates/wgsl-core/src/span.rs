//! Char-offset spans.
//!
//! A [`Span`] can only be obtained from a [`DocumentSnapshot`](crate::DocumentSnapshot), which
//! checks it against the snapshot length first. Code holding a `Span` can therefore rely on:
//!
//! - `length >= 1`
//! - `start + length <= snapshot.len_chars()` for the snapshot that produced it

use std::ops::Range;

/// A non-empty half-open character-offset range (`start..start + length`) in one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    start: usize,
    length: usize,
}

impl Span {
    /// Only the snapshot constructs spans; see [`DocumentSnapshot::try_span`](crate::DocumentSnapshot::try_span).
    pub(crate) fn new(start: usize, length: usize) -> Self {
        debug_assert!(length >= 1);
        Self { start, length }
    }

    /// Start offset (inclusive), in Unicode scalar values (`char`).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length in Unicode scalar values (`char`). Always at least 1.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Spans are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// End offset (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// The span as a `start..end` range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Returns `true` if `offset` falls inside this span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end()
    }

    /// Returns `true` if the two spans share at least one character.
    pub fn intersects(&self, other: &Span) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Returns `true` if `other` lies entirely within this span.
    pub fn covers(&self, other: &Span) -> bool {
        self.start <= other.start && other.end() <= self.end()
    }
}
