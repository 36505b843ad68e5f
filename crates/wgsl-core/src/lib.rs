#![warn(missing_docs)]
//! WGSL Core - headless analysis model for WGSL editor tooling
//!
//! # Overview
//!
//! `wgsl-core` holds the data model shared by the WGSL lint and highlight crates. It does not
//! scan text itself; it defines what a scan consumes and what it produces:
//!
//! - **Documents**: a host-owned [`Document`] whose edits replace an immutable
//!   [`DocumentSnapshot`] wholesale and notify subscribers synchronously
//! - **Spans**: char-offset ranges that can only be built through a snapshot, so an out-of-range
//!   span never exists
//! - **Diagnostics**: [`Diagnostic`] values with a closed two-level [`DiagnosticSeverity`]
//! - **Classifications**: [`ClassificationSpan`] values tagged with a [`ClassificationCategory`]
//! - **Providers**: [`DiagnosticProvider`] / [`ClassificationProvider`] seams the host calls into
//! - **Tracking**: [`SnapshotTracker`] follows a shared document and re-publishes its edits as
//!   [`InvalidationEvent`]s
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Providers (diagnostics / classification)   │  ← Host API
//! ├─────────────────────────────────────────────┤
//! │  Diagnostics & Classification model         │  ← Scan results
//! ├─────────────────────────────────────────────┤
//! │  Spans (validated against a snapshot)       │  ← Addressing
//! ├─────────────────────────────────────────────┤
//! │  Document + immutable snapshots (Rope)      │  ← Text storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use wgsl_core::Document;
//!
//! let mut document = Document::new("var x: i32;");
//! document.subscribe(|change| {
//!     println!("version {} -> {}", change.before.version(), change.after.version());
//! });
//!
//! document.replace_text("var y: f32;");
//! let snapshot = document.snapshot();
//! assert_eq!(snapshot.version(), 1);
//! assert_eq!(snapshot.text(), "var y: f32;");
//! ```
//!
//! # Offsets
//!
//! Every public offset is measured in Unicode scalar values (`char`) from the start of the
//! document. Scanners work on UTF-8 byte offsets internally and convert through
//! [`DocumentSnapshot::span_from_byte_range`].

pub mod classification;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod provider;
pub mod span;
pub mod tracker;

pub use classification::{ClassificationCategory, ClassificationSpan};
pub use diagnostics::{Diagnostic, DiagnosticSeverity};
pub use document::{
    Document, DocumentChange, DocumentChangeCallback, DocumentId, DocumentSnapshot,
    SharedDocument, SubscriptionId,
};
pub use error::WgslError;
pub use provider::{
    ClassificationProvider, DiagnosticProvider, InvalidationCallback, InvalidationEvent,
};
pub use span::Span;
pub use tracker::SnapshotTracker;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering the guard if a previous holder panicked.
///
/// All state guarded in this workspace is replaced wholesale (snapshots, listener lists), so a
/// poisoned guard never exposes a half-written value.
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
