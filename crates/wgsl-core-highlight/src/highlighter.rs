use crate::classifier::WgslClassifier;
use crate::theme::{StyleId, style_id};
use wgsl_core::{
    ClassificationProvider, ClassificationSpan, DocumentId, DocumentSnapshot, InvalidationEvent,
    SharedDocument, SnapshotTracker, Span, WgslError,
};

/// A styled char range produced by [`WgslHighlighter::style_intervals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleInterval {
    /// Start offset (chars, inclusive).
    pub start: usize,
    /// End offset (chars, exclusive).
    pub end: usize,
    /// Style of the range.
    pub style_id: StyleId,
}

/// Highlighting processor bound to one document.
///
/// Classification itself is stateless; the highlighter adds the document binding: it follows
/// the document's edits and tells [`on_changed`](Self::on_changed) listeners when to re-render.
#[derive(Debug)]
pub struct WgslHighlighter {
    classifier: WgslClassifier,
    tracker: SnapshotTracker,
}

impl WgslHighlighter {
    /// Attach a highlighter to `document`.
    ///
    /// Fails with [`WgslError::InvalidArgument`] when no document is given.
    pub fn attach(document: Option<&SharedDocument>) -> Result<Self, WgslError> {
        let tracker = SnapshotTracker::attach(document)?;
        tracing::debug!(document = tracker.document_id().0, "attached highlighter");
        Ok(Self {
            classifier: WgslClassifier::new(),
            tracker,
        })
    }

    /// Identifier of the document this highlighter follows.
    pub fn document_id(&self) -> DocumentId {
        self.tracker.document_id()
    }

    /// The latest document snapshot seen by this highlighter.
    pub fn current_snapshot(&self) -> DocumentSnapshot {
        self.tracker.current()
    }

    /// Classifications of the whole latest snapshot.
    pub fn current_classifications(&self) -> Vec<ClassificationSpan> {
        self.classifier.classify_all(&self.current_snapshot())
    }

    /// Style intervals of the whole latest snapshot, in classifier order.
    pub fn style_intervals(&self) -> Vec<StyleInterval> {
        self.current_classifications()
            .into_iter()
            .map(|c| StyleInterval {
                start: c.span.start(),
                end: c.span.end(),
                style_id: style_id(c.category),
            })
            .collect()
    }

    /// Register a listener fired after each document change.
    pub fn on_changed<F>(&self, callback: F)
    where
        F: FnMut(&InvalidationEvent) + Send + 'static,
    {
        self.tracker.on_changed(callback);
    }
}

impl ClassificationProvider for WgslHighlighter {
    fn classifications(&self, snapshot: &DocumentSnapshot, span: Span) -> Vec<ClassificationSpan> {
        self.classifier.classifications(snapshot, span)
    }
}
