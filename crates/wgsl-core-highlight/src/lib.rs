#![warn(missing_docs)]
//! `wgsl-core-highlight` - regex-based WGSL syntax classification for `wgsl-core`.
//!
//! This is a lexical highlighter, not a parser: comments, attributes, numbers, call-position
//! identifiers, keywords and built-in types are found with a handful of regexes and the shared
//! comment context from `wgsl-core-lang`.
//!
//! - [`WgslClassifier`]: stateless [`ClassificationProvider`](wgsl_core::ClassificationProvider)
//! - [`WgslHighlighter`]: classifier bound to a document, with change notification
//! - [`HighlighterRegistry`]: one highlighter per document
//! - [`theme`]: default formats (display name, color, [`StyleId`](theme::StyleId)) per category
//!
//! # Example
//!
//! ```rust
//! use wgsl_core::{ClassificationCategory, DocumentSnapshot};
//! use wgsl_core_highlight::WgslClassifier;
//!
//! let snapshot = DocumentSnapshot::new("let x: f32 = 1.0; // one");
//! let spans = WgslClassifier::new().classify_all(&snapshot);
//!
//! assert_eq!(spans[0].category, ClassificationCategory::Comment);
//! assert_eq!(spans[0].span.range(), 18..24);
//! assert!(spans.iter().any(|s| s.category == ClassificationCategory::Type));
//! ```

mod classifier;
mod highlighter;
mod registry;
pub mod theme;

pub use classifier::WgslClassifier;
pub use highlighter::{StyleInterval, WgslHighlighter};
pub use registry::HighlighterRegistry;
