use crate::config::LintConfig;
use crate::tagger::DiagnosticTagger;
use std::collections::HashMap;
use std::sync::Arc;
use wgsl_core::{DocumentId, SharedDocument, lock_recover};

/// Hands out one [`DiagnosticTagger`] per document.
///
/// Repeated requests for the same document return the same instance; every tagger created here
/// shares the registry's [`LintConfig`].
#[derive(Debug, Default)]
pub struct TaggerRegistry {
    config: LintConfig,
    taggers: HashMap<DocumentId, Arc<DiagnosticTagger>>,
}

impl TaggerRegistry {
    /// Create an empty registry whose taggers use `config`.
    pub fn new(config: LintConfig) -> Self {
        Self {
            config,
            taggers: HashMap::new(),
        }
    }

    /// The tagger for `document`, created on first request.
    ///
    /// Returns `None` when no document is given.
    pub fn create_tagger(
        &mut self,
        document: Option<&SharedDocument>,
    ) -> Option<Arc<DiagnosticTagger>> {
        let document = document?;
        let id = lock_recover(document).id();
        if let Some(tagger) = self.taggers.get(&id) {
            return Some(Arc::clone(tagger));
        }

        let tagger = match DiagnosticTagger::attach(Some(document), self.config.clone()) {
            Ok(tagger) => Arc::new(tagger),
            Err(err) => {
                tracing::debug!(%err, "cannot attach diagnostic tagger");
                return None;
            }
        };
        self.taggers.insert(id, Arc::clone(&tagger));
        Some(tagger)
    }

    /// Forget the tagger of `document`. Returns `true` if one was registered.
    pub fn remove(&mut self, document: DocumentId) -> bool {
        self.taggers.remove(&document).is_some()
    }

    /// Number of documents with a tagger.
    pub fn len(&self) -> usize {
        self.taggers.len()
    }

    /// Returns `true` if no tagger has been created.
    pub fn is_empty(&self) -> bool {
        self.taggers.is_empty()
    }
}
