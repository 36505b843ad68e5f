//! Missing `;` after statements.
//!
//! For each statement keyword occurrence (outside comments and struct bodies), the text after
//! the keyword is scanned up to the first `;`, `{`, `}`, newline or end of text. A `;` or `{`
//! ends the check; the other three mean the statement was never terminated. The error sits on
//! the last non-whitespace char before that point.

use crate::context::LintContext;
use crate::rule::Rule;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use wgsl_core::Diagnostic;
use wgsl_core_lang::is_inside_struct;
use wgsl_core_lang::vocab::STATEMENT_KEYWORDS;

const MESSAGE: &str = "Missing semicolon at end of statement";

static KEYWORD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    STATEMENT_KEYWORDS
        .iter()
        .map(|keyword| {
            Regex::new(&format!(r"\b{keyword}\b")).expect("valid statement keyword regex")
        })
        .collect()
});

/// Report statements that are not terminated by `;`.
pub fn check(cx: &LintContext<'_>, out: &mut Vec<Diagnostic>) {
    let text = cx.text();
    for pattern in KEYWORD_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            if cx.is_inside_comment(m.start()) || is_inside_struct(text, m.start()) {
                continue;
            }
            if let Some(range) = unterminated_statement_end(text, m.end()) {
                out.extend(cx.error(Rule::MissingSemicolon, range, MESSAGE));
            }
        }
    }
}

/// Byte range of the char to flag when the statement starting at `after_keyword` is not
/// terminated by `;`.
fn unterminated_statement_end(text: &str, after_keyword: usize) -> Option<Range<usize>> {
    let rest = &text[after_keyword..];
    let content = rest.trim_start_matches(|c: char| c.is_whitespace() && c != '\n');
    let content_start = text.len() - content.len();

    let end = match content.find([';', '{', '}', '\n']) {
        Some(i) if matches!(content.as_bytes()[i], b';' | b'{') => return None,
        Some(i) => content_start + i,
        None => text.len(),
    };

    let statement = text[content_start..end].trim_end();
    let last = statement.chars().next_back()?;
    let pos = content_start + statement.len() - last.len_utf8();
    Some(pos..pos + last.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;

    fn offsets(text: &str) -> Vec<usize> {
        run(check, text).iter().map(|d| d.span.start()).collect()
    }

    #[test]
    fn test_var_without_semicolon() {
        let diagnostics = run(check, "var x: i32");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, MESSAGE);
        assert_eq!(diagnostics[0].span.range(), 9..10);
    }

    #[test]
    fn test_let_and_return() {
        assert_eq!(offsets("let x = 42"), vec![9]);
        // Flags `x`, the last non-whitespace char before `}`.
        assert_eq!(offsets("fn test() { return x }"), vec![19]);
    }

    #[test]
    fn test_terminated_statements_are_fine() {
        assert!(offsets("var x: i32;").is_empty());
        assert!(offsets("fn f() {\n    return;\n}").is_empty());
        assert!(offsets("loop {\n    break;\n}").is_empty());
    }

    #[test]
    fn test_bare_keyword_has_no_content() {
        assert!(offsets("fn f() {\n    return\n}").is_empty());
        assert!(offsets("discard").is_empty());
    }

    #[test]
    fn test_opening_brace_ends_the_check() {
        assert!(offsets("const f = fn() {").is_empty());
    }

    #[test]
    fn test_comments_are_skipped() {
        assert!(offsets("// var x: i32").is_empty());
        assert!(offsets("/*\nlet y = 2\n*/").is_empty());
    }

    #[test]
    fn test_struct_members_are_skipped() {
        let text = "struct S {\n    let_me: f32,\n    var: u32\n}";
        assert!(offsets(text).is_empty());
    }

    #[test]
    fn test_trailing_carriage_return_is_whitespace() {
        assert_eq!(offsets("let a = 1\r\nlet b = 2;"), vec![8]);
    }

    #[test]
    fn test_keywords_reported_in_keyword_order() {
        // All `var` findings come before all `let` findings.
        assert_eq!(offsets("let a = 1\nvar b = 2\n"), vec![18, 8]);
    }
}
