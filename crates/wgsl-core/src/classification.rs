//! Classification (syntax highlighting) data model.
//!
//! Classifications are derived presentation state: the host maps each
//! [`ClassificationCategory`] to a color/format. Spans of different categories may overlap;
//! nothing here merges them, and the order in which a classifier emits them is the only
//! precedence a host should assume.

use crate::span::Span;

/// Lexical category assigned to a span of WGSL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClassificationCategory {
    /// Reserved words (`fn`, `var`, `return`, ...).
    Keyword,
    /// Built-in types (`f32`, `vec4f`, `texture_2d`, ...).
    Type,
    /// Attributes (`@vertex`, `@location(0)`, ...).
    Attribute,
    /// Line and block comments.
    Comment,
    /// Numeric literals.
    Number,
    /// Identifiers in call position.
    Function,
}

impl ClassificationCategory {
    /// All categories, in the order a classifier emits them.
    pub const ALL: [ClassificationCategory; 6] = [
        ClassificationCategory::Comment,
        ClassificationCategory::Attribute,
        ClassificationCategory::Number,
        ClassificationCategory::Function,
        ClassificationCategory::Keyword,
        ClassificationCategory::Type,
    ];

    /// Stable classification-type name (e.g. `"wgsl.keyword"`).
    pub fn type_name(&self) -> &'static str {
        match self {
            ClassificationCategory::Keyword => "wgsl.keyword",
            ClassificationCategory::Type => "wgsl.type",
            ClassificationCategory::Attribute => "wgsl.attribute",
            ClassificationCategory::Comment => "wgsl.comment",
            ClassificationCategory::Number => "wgsl.number",
            ClassificationCategory::Function => "wgsl.function",
        }
    }
}

/// A classified span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationSpan {
    /// Category of the text.
    pub category: ClassificationCategory,
    /// Classified range in character offsets.
    pub span: Span,
}

impl ClassificationSpan {
    /// Create a new classification span.
    pub fn new(category: ClassificationCategory, span: Span) -> Self {
        Self { category, span }
    }
}
