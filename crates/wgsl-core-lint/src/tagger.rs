use crate::analyze::analyze;
use crate::config::LintConfig;
use wgsl_core::{
    Diagnostic, DiagnosticProvider, DocumentId, DocumentSnapshot, InvalidationEvent,
    SharedDocument, SnapshotTracker, Span, WgslError,
};

/// Diagnostic provider bound to one document.
///
/// The tagger follows the document's edits and fires [`on_changed`](Self::on_changed) listeners
/// after each one, invalidating the whole new document. Diagnostics are recomputed on every
/// request; nothing is cached between calls.
#[derive(Debug)]
pub struct DiagnosticTagger {
    config: LintConfig,
    tracker: SnapshotTracker,
}

impl DiagnosticTagger {
    /// Attach a tagger to `document`.
    ///
    /// Fails with [`WgslError::InvalidArgument`] when no document is given.
    pub fn attach(document: Option<&SharedDocument>, config: LintConfig) -> Result<Self, WgslError> {
        let tracker = SnapshotTracker::attach(document)?;
        tracing::debug!(document = tracker.document_id().0, "attached diagnostic tagger");
        Ok(Self { config, tracker })
    }

    /// Identifier of the document this tagger follows.
    pub fn document_id(&self) -> DocumentId {
        self.tracker.document_id()
    }

    /// Lint configuration used for every analysis.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// The latest document snapshot seen by this tagger.
    pub fn current_snapshot(&self) -> DocumentSnapshot {
        self.tracker.current()
    }

    /// Diagnostics for the latest snapshot.
    pub fn current_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics(&self.current_snapshot())
    }

    /// Diagnostics for a request covering `requested` spans of `snapshot`.
    ///
    /// An empty request yields nothing. Otherwise the whole snapshot is analyzed, regardless of
    /// which spans were asked for.
    pub fn tags(&self, snapshot: &DocumentSnapshot, requested: &[Span]) -> Vec<Diagnostic> {
        if requested.is_empty() {
            return Vec::new();
        }
        self.diagnostics(snapshot)
    }

    /// Register a listener fired after each document change.
    pub fn on_changed<F>(&self, callback: F)
    where
        F: FnMut(&InvalidationEvent) + Send + 'static,
    {
        self.tracker.on_changed(callback);
    }
}

impl DiagnosticProvider for DiagnosticTagger {
    fn diagnostics(&self, snapshot: &DocumentSnapshot) -> Vec<Diagnostic> {
        analyze(snapshot, &self.config)
    }
}
