use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use wgsl_core::{
    ClassificationCategory, ClassificationProvider, ClassificationSpan, DocumentSnapshot, Span,
};
use wgsl_core_lang::LexicalContext;
use wgsl_core_lang::vocab::{is_builtin_type, is_keyword};

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\r\n]*").expect("valid line comment regex"));
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/").expect("valid block comment regex"));
static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+(?:\([^)]*\))?").expect("valid attribute regex"));
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:0x[0-9a-fA-F]+[iu]?|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[iufh]?)\b",
    )
    .expect("valid number regex")
});
static FUNCTION_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([a-zA-Z_]\w*)\s*\(").expect("valid function call regex"));
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z_]\w*\b").expect("valid word regex"));

/// Regex-based WGSL classifier.
///
/// Five passes run over the requested text, each appending its spans:
///
/// 1. line and block comments
/// 2. attributes (`@name` with optional arguments)
/// 3. numeric literals
/// 4. identifiers in call position that are neither keywords nor built-in types
/// 5. keywords and built-in types
///
/// Passes 2-5 skip matches that start inside a comment. Spans are not merged, so a later pass
/// may overlap an earlier one (`vec4f(` is a type, never a function). Comment context is
/// computed from the requested text alone: a request starting inside a block comment does not
/// know it.
#[derive(Debug, Clone, Copy, Default)]
pub struct WgslClassifier;

impl WgslClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify the whole snapshot.
    pub fn classify_all(&self, snapshot: &DocumentSnapshot) -> Vec<ClassificationSpan> {
        match snapshot.full_span() {
            Some(span) => self.classifications(snapshot, span),
            None => Vec::new(),
        }
    }
}

impl ClassificationProvider for WgslClassifier {
    fn classifications(&self, snapshot: &DocumentSnapshot, span: Span) -> Vec<ClassificationSpan> {
        let Some(bytes) = snapshot.byte_range(span) else {
            return Vec::new();
        };
        let text = &snapshot.text()[bytes.clone()];
        let mut pass = Pass {
            snapshot,
            base: bytes.start,
            comments: LexicalContext::new(text),
            out: Vec::new(),
        };

        for m in LINE_COMMENT.find_iter(text).chain(BLOCK_COMMENT.find_iter(text)) {
            pass.push(ClassificationCategory::Comment, m.range());
        }
        for m in ATTRIBUTE.find_iter(text) {
            pass.push_code(ClassificationCategory::Attribute, m.range());
        }
        for m in NUMBER.find_iter(text) {
            pass.push_code(ClassificationCategory::Number, m.range());
        }
        for caps in FUNCTION_CALL.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if pass.in_comment(whole.start())
                || is_keyword(name.as_str())
                || is_builtin_type(name.as_str())
            {
                continue;
            }
            pass.push(ClassificationCategory::Function, name.range());
        }
        for m in WORD.find_iter(text) {
            let category = if is_keyword(m.as_str()) {
                ClassificationCategory::Keyword
            } else if is_builtin_type(m.as_str()) {
                ClassificationCategory::Type
            } else {
                continue;
            };
            pass.push_code(category, m.range());
        }

        tracing::trace!(
            version = snapshot.version(),
            requested = ?span.range(),
            spans = pass.out.len(),
            "classified"
        );
        pass.out
    }
}

/// Accumulates spans for one request, mapping request-relative byte ranges back to the snapshot.
struct Pass<'a> {
    snapshot: &'a DocumentSnapshot,
    base: usize,
    comments: LexicalContext,
    out: Vec<ClassificationSpan>,
}

impl Pass<'_> {
    fn in_comment(&self, position: usize) -> bool {
        self.comments.is_inside_comment(position)
    }

    fn push(&mut self, category: ClassificationCategory, range: Range<usize>) {
        let absolute = self.base + range.start..self.base + range.end;
        if let Some(span) = self.snapshot.span_from_byte_range(absolute) {
            self.out.push(ClassificationSpan::new(category, span));
        }
    }

    /// Like [`push`](Self::push), but only for matches that start outside comments.
    fn push_code(&mut self, category: ClassificationCategory, range: Range<usize>) {
        if !self.in_comment(range.start) {
            self.push(category, range);
        }
    }
}
