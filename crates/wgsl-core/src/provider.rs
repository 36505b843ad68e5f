//! Provider interfaces exposed to the host.
//!
//! Both providers are pure functions of a snapshot. Change notification lives on the concrete
//! provider types (they subscribe to a [`Document`](crate::Document) and re-publish an
//! [`InvalidationEvent`] after each edit).

use crate::classification::ClassificationSpan;
use crate::diagnostics::Diagnostic;
use crate::document::DocumentSnapshot;
use crate::span::Span;

/// Produces diagnostics for a whole snapshot.
pub trait DiagnosticProvider {
    /// Run every check over `snapshot` and return the diagnostics in report order.
    fn diagnostics(&self, snapshot: &DocumentSnapshot) -> Vec<Diagnostic>;
}

/// Produces classification spans for part of a snapshot.
pub trait ClassificationProvider {
    /// Classify the text of `span` in `snapshot`.
    ///
    /// Every returned span lies within `span`.
    fn classifications(&self, snapshot: &DocumentSnapshot, span: Span)
    -> Vec<ClassificationSpan>;
}

/// "Content changed" notification published by a provider after a document edit.
#[derive(Debug, Clone)]
pub struct InvalidationEvent {
    /// The snapshot the provider now considers current.
    pub snapshot: DocumentSnapshot,
    /// Invalidated range. Providers report the whole document; `None` when it is empty.
    pub span: Option<Span>,
}

impl InvalidationEvent {
    /// An event invalidating the whole of `snapshot`.
    pub fn whole_document(snapshot: DocumentSnapshot) -> Self {
        let span = snapshot.full_span();
        Self { snapshot, span }
    }
}

/// Invalidation callback function type.
pub type InvalidationCallback = Box<dyn FnMut(&InvalidationEvent) + Send>;
