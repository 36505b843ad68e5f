use crate::highlighter::WgslHighlighter;
use std::collections::HashMap;
use std::sync::Arc;
use wgsl_core::{DocumentId, SharedDocument, lock_recover};

/// Hands out one [`WgslHighlighter`] per document.
///
/// Repeated requests for the same document return the same instance, so a document never has
/// more than one highlighting subscription through this registry.
#[derive(Debug, Default)]
pub struct HighlighterRegistry {
    highlighters: HashMap<DocumentId, Arc<WgslHighlighter>>,
}

impl HighlighterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The highlighter for `document`, attached on first request.
    ///
    /// Returns `None` when no document is given.
    pub fn create_highlighter(
        &mut self,
        document: Option<&SharedDocument>,
    ) -> Option<Arc<WgslHighlighter>> {
        let document = document?;
        let id = lock_recover(document).id();
        if let Some(highlighter) = self.highlighters.get(&id) {
            return Some(Arc::clone(highlighter));
        }

        let highlighter = match WgslHighlighter::attach(Some(document)) {
            Ok(highlighter) => Arc::new(highlighter),
            Err(err) => {
                tracing::debug!(%err, "cannot attach highlighter");
                return None;
            }
        };
        self.highlighters.insert(id, Arc::clone(&highlighter));
        Some(highlighter)
    }

    /// Forget the highlighter of `document`. Returns `true` if one was registered.
    ///
    /// The document subscription goes away once the last clone of the highlighter is dropped.
    pub fn remove(&mut self, document: DocumentId) -> bool {
        self.highlighters.remove(&document).is_some()
    }

    /// Number of documents with a highlighter.
    pub fn len(&self) -> usize {
        self.highlighters.len()
    }

    /// Returns `true` if no highlighter has been created.
    pub fn is_empty(&self) -> bool {
        self.highlighters.is_empty()
    }
}
