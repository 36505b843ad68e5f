use crate::rule::Rule;
use std::ops::Range;
use wgsl_core::{Diagnostic, DocumentSnapshot, Span};
use wgsl_core_lang::LexicalContext;

/// Shared input of every rule: one snapshot plus its precomputed comment context.
///
/// Rules scan [`text`](Self::text) with byte offsets and report byte ranges; the context converts
/// them into snapshot spans and silently drops any range that does not fit.
#[derive(Debug)]
pub struct LintContext<'a> {
    snapshot: &'a DocumentSnapshot,
    comments: LexicalContext,
}

impl<'a> LintContext<'a> {
    /// Prepare `snapshot` for linting.
    pub fn new(snapshot: &'a DocumentSnapshot) -> Self {
        Self {
            snapshot,
            comments: LexicalContext::new(snapshot.text()),
        }
    }

    /// The snapshot being linted.
    pub fn snapshot(&self) -> &'a DocumentSnapshot {
        self.snapshot
    }

    /// Full text of the snapshot.
    pub fn text(&self) -> &'a str {
        self.snapshot.text()
    }

    /// Returns `true` if the byte offset `position` lies inside a comment.
    pub fn is_inside_comment(&self, position: usize) -> bool {
        self.comments.is_inside_comment(position)
    }

    /// Build an error diagnostic for a byte range.
    pub fn error(
        &self,
        rule: Rule,
        range: Range<usize>,
        message: impl Into<String>,
    ) -> Option<Diagnostic> {
        let span = self.span(rule, range)?;
        Some(Diagnostic::error(span, rule.code(), message))
    }

    /// Build a warning diagnostic for a byte range.
    pub fn warning(
        &self,
        rule: Rule,
        range: Range<usize>,
        message: impl Into<String>,
    ) -> Option<Diagnostic> {
        let span = self.span(rule, range)?;
        Some(Diagnostic::warning(span, rule.code(), message))
    }

    fn span(&self, rule: Rule, range: Range<usize>) -> Option<Span> {
        let span = self.snapshot.span_from_byte_range(range.clone());
        if span.is_none() {
            tracing::trace!(rule = rule.code(), ?range, "dropping diagnostic with invalid span");
        }
        span
    }
}
