//! Lexical context queries.
//!
//! These are textual heuristics, not a tokenizer: comment tokens (from
//! [`WGSL_LANGUAGE`](crate::WGSL_LANGUAGE)) inside string literals are treated like real comment
//! openers. All positions are UTF-8 byte offsets into `text`.
//!
//! [`is_inside_comment`] rescans the whole prefix on every call. [`LexicalContext`] answers the
//! same question for every offset of one text after a single forward pass; the two must agree at
//! every offset.

use crate::WGSL_LANGUAGE;
use regex::Regex;
use std::sync::LazyLock;

static STRUCT_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bstruct\b").expect("valid struct keyword regex"));

/// Returns `true` if `position` lies inside a line comment or an unterminated block comment.
///
/// Looking only at `text[..position]`:
/// - line comment: the last `//` starts after the last `\n`
/// - block comment: there are more `/*` than `*/` occurrences
pub fn is_inside_comment(text: &str, position: usize) -> bool {
    let comments = WGSL_LANGUAGE.comments;
    let prefix = &text.as_bytes()[..position.min(text.len())];

    let line = comments.line.as_bytes();
    let last_line_comment = prefix.windows(line.len()).rposition(|w| w == line);
    let last_newline = prefix.iter().rposition(|&b| b == b'\n');
    // `None` orders below every `Some`, matching "not found" semantics.
    if last_line_comment > last_newline {
        return true;
    }

    let count = |token: &str| {
        let token = token.as_bytes();
        prefix.windows(token.len()).filter(|w| *w == token).count()
    };
    count(comments.block_start) > count(comments.block_end)
}

/// Returns `true` if `position` lies inside the body of the nearest preceding `struct`.
///
/// Finds the last whole-word `struct` before `position` and compares the `{` and `}` counts
/// between it and `position`.
pub fn is_inside_struct(text: &str, position: usize) -> bool {
    let Some(prefix) = text.get(..position.min(text.len())) else {
        return false;
    };
    let Some(last_struct) = STRUCT_KEYWORD.find_iter(prefix).last() else {
        return false;
    };

    let between = &prefix[last_struct.start()..];
    let opens = between.bytes().filter(|&b| b == b'{').count();
    let closes = between.bytes().filter(|&b| b == b'}').count();
    opens > closes
}

/// Precomputed comment context for every byte offset of one text.
#[derive(Debug, Clone)]
pub struct LexicalContext {
    // One entry per offset in `0..=text.len()`.
    inside_comment: Vec<bool>,
}

impl LexicalContext {
    /// Scan `text` once and record the comment state at each offset.
    pub fn new(text: &str) -> Self {
        let comments = WGSL_LANGUAGE.comments;
        let line = comments.line.as_bytes();
        let block_start = comments.block_start.as_bytes();
        let block_end = comments.block_end.as_bytes();
        let bytes = text.as_bytes();
        let mut inside_comment = Vec::with_capacity(bytes.len() + 1);

        let mut opens = 0usize;
        let mut closes = 0usize;
        let mut last_line_comment: Option<usize> = None;
        let mut last_newline: Option<usize> = None;

        for end in 0..=bytes.len() {
            // Fold in the tokens and byte that end exactly at `end`; the state then describes
            // `text[..end]`.
            let prefix = &bytes[..end];
            if prefix.last() == Some(&b'\n') {
                last_newline = Some(end - 1);
            }
            if prefix.ends_with(line) {
                last_line_comment = Some(end - line.len());
            }
            if prefix.ends_with(block_start) {
                opens += 1;
            }
            if prefix.ends_with(block_end) {
                closes += 1;
            }
            inside_comment.push(last_line_comment > last_newline || opens > closes);
        }

        Self { inside_comment }
    }

    /// Same answer as [`is_inside_comment`] for the text this context was built from.
    pub fn is_inside_comment(&self, position: usize) -> bool {
        let last = self.inside_comment.len() - 1;
        self.inside_comment[position.min(last)]
    }
}
