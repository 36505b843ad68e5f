//! Document and snapshot model.
//!
//! The host owns a [`Document`]. Every edit produces a new immutable [`DocumentSnapshot`]
//! (version + 1) and synchronously notifies subscribers with a [`DocumentChange`]. Scanners only
//! ever see a snapshot, so an in-flight scan always observes one consistent text.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use wgsl_core::Document;
//!
//! let mut document = Document::new("let a = 1;\n");
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let seen_clone = Arc::clone(&seen);
//! document.subscribe(move |change| {
//!     seen_clone.lock().unwrap().push(change.after.version());
//! });
//!
//! document.apply_edit(4, 1, "b").unwrap();
//! assert_eq!(document.snapshot().text(), "let b = 1;\n");
//! assert_eq!(*seen.lock().unwrap(), vec![1]);
//! ```

use crate::error::WgslError;
use crate::span::Span;
use ropey::Rope;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// An immutable version of a document's text.
///
/// Cloning is cheap: the text and the rope are both reference-counted.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    version: u64,
    text: Arc<str>,
    rope: Rope,
}

impl DocumentSnapshot {
    /// Create a standalone snapshot (version 0) from text.
    pub fn new(text: &str) -> Self {
        Self::with_version(Arc::from(text), 0)
    }

    fn with_version(text: Arc<str>, version: u64) -> Self {
        let rope = Rope::from_str(&text);
        Self {
            version,
            text,
            rope,
        }
    }

    /// Version number of this snapshot (0 for the initial text, +1 per edit).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Full text of the snapshot.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in Unicode scalar values (`char`).
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns `true` if the snapshot holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Build a span if `start..start + length` is a non-empty range inside this snapshot.
    pub fn try_span(&self, start: usize, length: usize) -> Option<Span> {
        let len = self.len_chars();
        if length == 0 || start >= len {
            return None;
        }
        let end = start.checked_add(length)?;
        if end > len {
            return None;
        }
        Some(Span::new(start, length))
    }

    /// A span covering the whole snapshot, or `None` when the snapshot is empty.
    pub fn full_span(&self) -> Option<Span> {
        self.try_span(0, self.len_chars())
    }

    /// Convert a UTF-8 byte range of [`text`](Self::text) into a char-offset span.
    ///
    /// Returns `None` for empty ranges, ranges past the end of the text and ranges that do not
    /// fall on char boundaries.
    pub fn span_from_byte_range(&self, range: Range<usize>) -> Option<Span> {
        if range.start >= range.end || range.end > self.text.len() {
            return None;
        }
        if !self.text.is_char_boundary(range.start) || !self.text.is_char_boundary(range.end) {
            return None;
        }
        let start = self.rope.byte_to_char(range.start);
        let end = self.rope.byte_to_char(range.end);
        self.try_span(start, end - start)
    }

    /// UTF-8 byte range of a span, or `None` if the span does not fit this snapshot.
    pub fn byte_range(&self, span: Span) -> Option<Range<usize>> {
        if span.end() > self.len_chars() {
            return None;
        }
        Some(self.rope.char_to_byte(span.start())..self.rope.char_to_byte(span.end()))
    }

    /// Text covered by a span, or `None` if the span does not fit this snapshot.
    pub fn span_text(&self, span: Span) -> Option<&str> {
        let range = self.byte_range(span)?;
        self.text.get(range)
    }

    /// Zero-based `(line, column)` of a char offset (column counted in chars).
    ///
    /// `offset == len_chars()` is accepted and maps to the end of the last line.
    pub fn line_column(&self, offset: usize) -> Option<(usize, usize)> {
        if offset > self.len_chars() {
            return None;
        }
        let line = self.rope.char_to_line(offset);
        Some((line, offset - self.rope.line_to_char(line)))
    }
}

/// Process-unique document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(pub u64);

impl DocumentId {
    fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Change record delivered to document subscribers.
#[derive(Debug, Clone)]
pub struct DocumentChange {
    /// Document that changed.
    pub document: DocumentId,
    /// Snapshot before the edit.
    pub before: DocumentSnapshot,
    /// Snapshot after the edit (the new current snapshot).
    pub after: DocumentSnapshot,
    /// Char range of the inserted text in `after`.
    pub affected_region: Range<usize>,
}

/// Handle returned by [`Document::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Document change callback function type.
pub type DocumentChangeCallback = Box<dyn FnMut(&DocumentChange) + Send>;

/// A document shared between the host and the providers attached to it.
pub type SharedDocument = Arc<Mutex<Document>>;

/// Host-side document: the current snapshot plus change subscribers.
///
/// Callbacks run synchronously inside [`replace_text`](Self::replace_text) /
/// [`apply_edit`](Self::apply_edit). When the document is shared as a [`SharedDocument`], the
/// document lock is held while they run, so a callback must not lock the same document again.
pub struct Document {
    id: DocumentId,
    current: DocumentSnapshot,
    callbacks: Vec<(SubscriptionId, DocumentChangeCallback)>,
    next_subscription: u64,
}

impl Document {
    /// Create a new document with the given initial text.
    pub fn new(text: &str) -> Self {
        Self {
            id: DocumentId::next(),
            current: DocumentSnapshot::new(text),
            callbacks: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Wrap the document for sharing with providers.
    pub fn into_shared(self) -> SharedDocument {
        Arc::new(Mutex::new(self))
    }

    /// Identifier of this document.
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> DocumentSnapshot {
        self.current.clone()
    }

    /// Current version number.
    pub fn version(&self) -> u64 {
        self.current.version()
    }

    /// Current length in chars.
    pub fn len_chars(&self) -> usize {
        self.current.len_chars()
    }

    /// Subscribe to change notifications.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&DocumentChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(subscription, _)| *subscription != id);
        self.callbacks.len() != before
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Replace the whole text.
    pub fn replace_text(&mut self, text: &str) {
        let after = DocumentSnapshot::with_version(Arc::from(text), self.current.version() + 1);
        let affected = 0..after.len_chars();
        self.commit(after, affected);
    }

    /// Delete `delete_len` chars at `start` and insert `insert` in their place.
    pub fn apply_edit(
        &mut self,
        start: usize,
        delete_len: usize,
        insert: &str,
    ) -> Result<(), WgslError> {
        let len = self.current.len_chars();
        let end = start.saturating_add(delete_len);
        if start > len || end > len {
            return Err(WgslError::EditOutOfBounds { start, end, len });
        }

        let mut rope = self.current.rope.clone();
        rope.remove(start..end);
        rope.insert(start, insert);

        let text: Arc<str> = Arc::from(rope.to_string());
        let after = DocumentSnapshot {
            version: self.current.version() + 1,
            text,
            rope,
        };
        let affected = start..start + insert.chars().count();
        self.commit(after, affected);
        Ok(())
    }

    fn commit(&mut self, after: DocumentSnapshot, affected_region: Range<usize>) {
        let before = std::mem::replace(&mut self.current, after);
        let change = DocumentChange {
            document: self.id,
            before,
            after: self.current.clone(),
            affected_region,
        };
        tracing::trace!(
            document = self.id.0,
            version = change.after.version(),
            subscribers = self.callbacks.len(),
            "document changed"
        );
        for (_, callback) in &mut self.callbacks {
            callback(&change);
        }
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("id", &self.id)
            .field("version", &self.current.version())
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_span_rejects_out_of_range() {
        let snapshot = DocumentSnapshot::new("abc");
        assert!(snapshot.try_span(0, 3).is_some());
        assert!(snapshot.try_span(2, 1).is_some());
        assert!(snapshot.try_span(3, 1).is_none());
        assert!(snapshot.try_span(2, 2).is_none());
        assert!(snapshot.try_span(0, 0).is_none());
        assert!(snapshot.try_span(1, usize::MAX).is_none());
    }

    #[test]
    fn test_empty_snapshot_has_no_spans() {
        let snapshot = DocumentSnapshot::new("");
        assert!(snapshot.is_empty());
        assert!(snapshot.full_span().is_none());
        assert!(snapshot.try_span(0, 1).is_none());
    }

    #[test]
    fn test_byte_range_conversion_uses_char_offsets() {
        // 'é' is two bytes, '👋' is four.
        let snapshot = DocumentSnapshot::new("é👋x");
        let span = snapshot.span_from_byte_range(6..7).unwrap();
        assert_eq!((span.start(), span.len()), (2, 1));
        assert_eq!(snapshot.span_text(span), Some("x"));
        assert_eq!(snapshot.byte_range(span), Some(6..7));

        // Not a char boundary.
        assert!(snapshot.span_from_byte_range(1..3).is_none());
        // Past the end.
        assert!(snapshot.span_from_byte_range(6..8).is_none());
        // Empty.
        assert!(snapshot.span_from_byte_range(2..2).is_none());
    }

    #[test]
    fn test_line_column() {
        let snapshot = DocumentSnapshot::new("ab\ncd");
        assert_eq!(snapshot.line_column(0), Some((0, 0)));
        assert_eq!(snapshot.line_column(4), Some((1, 1)));
        assert_eq!(snapshot.line_column(5), Some((1, 2)));
        assert_eq!(snapshot.line_column(6), None);
    }

    #[test]
    fn test_edit_produces_new_snapshot() {
        let mut document = Document::new("var x: i32");
        let before = document.snapshot();
        document.apply_edit(10, 0, ";").unwrap();

        assert_eq!(before.text(), "var x: i32");
        assert_eq!(before.version(), 0);
        assert_eq!(document.snapshot().text(), "var x: i32;");
        assert_eq!(document.version(), 1);
    }

    #[test]
    fn test_edit_out_of_bounds_is_rejected() {
        let mut document = Document::new("abc");
        let err = document.apply_edit(2, 5, "").unwrap_err();
        assert_eq!(
            err,
            WgslError::EditOutOfBounds {
                start: 2,
                end: 7,
                len: 3
            }
        );
        assert_eq!(document.version(), 0);
    }

    #[test]
    fn test_unsubscribe_removes_only_that_callback() {
        let mut document = Document::new("a");
        let first = document.subscribe(|_| {});
        let second = document.subscribe(|_| {});
        assert_ne!(first, second);
        assert_eq!(document.subscriber_count(), 2);

        assert!(document.unsubscribe(first));
        assert!(!document.unsubscribe(first));
        assert_eq!(document.subscriber_count(), 1);

        assert!(document.unsubscribe(second));
        document.replace_text("b");
        assert_eq!(document.subscriber_count(), 0);
    }

    #[test]
    fn test_document_ids_are_unique() {
        let a = Document::new("");
        let b = Document::new("");
        assert_ne!(a.id(), b.id());
    }
}
