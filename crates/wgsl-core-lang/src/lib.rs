#![warn(missing_docs)]
//! `wgsl-core-lang` - WGSL language configuration for the `wgsl-core` tooling.
//!
//! This crate stays lightweight and does **not** depend on `wgsl-core`. It provides:
//!
//! - [`LanguageDefinition`] / [`WGSL_LANGUAGE`]: content type, file extension and comment tokens
//! - [`vocab`]: the reserved-word sets (keywords, built-in types, attributes)
//! - [`context`]: comment / struct-body context queries shared by linting and highlighting

pub mod context;
pub mod vocab;

pub use context::{LexicalContext, is_inside_comment, is_inside_struct};

use std::path::Path;

/// Comment tokens for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`).
    pub line: &'static str,
    /// Block comment start token (e.g. `/*`).
    pub block_start: &'static str,
    /// Block comment end token (e.g. `*/`).
    pub block_end: &'static str,
}

/// Static description of a language as registered with a host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDefinition {
    /// Content type name.
    pub content_type: &'static str,
    /// Content type this one derives from.
    pub base_content_type: &'static str,
    /// File extensions (with leading dot) associated with the content type.
    pub file_extensions: &'static [&'static str],
    /// Comment tokens.
    pub comments: CommentConfig,
}

impl LanguageDefinition {
    /// Returns `true` if `path` has one of this language's file extensions (ASCII
    /// case-insensitive).
    pub fn matches_path(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        self.file_extensions.iter().any(|known| {
            known
                .strip_prefix('.')
                .is_some_and(|known| known.eq_ignore_ascii_case(ext))
        })
    }
}

/// The WGSL language definition.
pub const WGSL_LANGUAGE: LanguageDefinition = LanguageDefinition {
    content_type: "wgsl",
    base_content_type: "code",
    file_extensions: &[".wgsl"],
    comments: CommentConfig {
        line: "//",
        block_start: "/*",
        block_end: "*/",
    },
};
