//! First-class diagnostics data model.
//!
//! A scan produces a fresh `Vec<Diagnostic>` each time; diagnostics carry no identity across
//! scans. Hosts can use them for:
//! - problems panels / gutter markers
//! - hover tooltips / inline messages
//! - squiggle underlines over [`Diagnostic::span`]

use crate::span::Span;
use std::fmt;

/// Diagnostic severity levels.
///
/// This is a closed set: the WGSL checks only ever report errors or style warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticSeverity {
    /// Error diagnostics.
    Error,
    /// Warning diagnostics.
    Warning,
}

impl DiagnosticSeverity {
    /// Lowercase label used by command-line output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        }
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic item for one document snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic range in character offsets.
    pub span: Span,
    /// Diagnostic severity.
    pub severity: DiagnosticSeverity,
    /// Stable code of the check that produced this diagnostic (e.g. `"missing-semicolon"`).
    pub code: &'static str,
    /// Diagnostic message.
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(span: Span, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            span,
            severity: DiagnosticSeverity::Error,
            code,
            message: message.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(span: Span, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            span,
            severity: DiagnosticSeverity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Returns `true` for [`DiagnosticSeverity::Error`].
    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}
