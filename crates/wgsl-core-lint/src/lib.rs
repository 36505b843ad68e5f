#![warn(missing_docs)]
//! `wgsl-core-lint` - heuristic WGSL diagnostics for `wgsl-core` documents.
//!
//! The checks are independent scans over flat text; there is no parser and no AST. Each check
//! is a [`Rule`] and can be disabled through [`LintConfig`]:
//!
//! | rule | reports |
//! |---|---|
//! | `missing-semicolon` | statements (`var`, `let`, `return`, ...) without a trailing `;` |
//! | `delimiters` | unmatched, mismatched and unclosed `{}`, `()`, `[]` |
//! | `unknown-attribute` | `@name` that is not a WGSL attribute |
//! | `stage-function` | vertex/fragment entry points with an unexpected return type |
//! | `undefined-type` | `var x: T` where `T` is neither built-in nor a declared struct |
//! | `duplicate-binding` | repeated `@binding(n) @group(m)` pairs |
//! | `workgroup-size` | `@workgroup_size` dimensions out of range or too many invocations |
//! | `incomplete-declaration` | `var x;` without a type or initializer |
//!
//! # Example
//!
//! ```rust
//! use wgsl_core::DocumentSnapshot;
//! use wgsl_core_lint::{LintConfig, analyze};
//!
//! let snapshot = DocumentSnapshot::new("var x: i32");
//! let diagnostics = analyze(&snapshot, &LintConfig::default());
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "Missing semicolon at end of statement");
//! assert_eq!(diagnostics[0].span.range(), 9..10);
//! ```

mod analyze;
mod config;
mod context;
pub mod delimiters;
mod error;
mod registry;
mod rule;
pub mod rules;
mod tagger;

pub use analyze::analyze;
pub use config::LintConfig;
pub use context::LintContext;
pub use error::LintConfigError;
pub use registry::TaggerRegistry;
pub use rule::Rule;
pub use tagger::DiagnosticTagger;
