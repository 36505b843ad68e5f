//! Delimiter matching.
//!
//! One forward scan keeps a stack of open `{`, `(` and `[` positions. Comments and string
//! literals are skipped:
//!
//! - inside a string, only an unescaped closing `"` matters
//! - a line comment token (`//`) starts a comment that ends at the next newline
//! - block comment tokens (`/*`, `*/`) adjust a depth (never below zero), even inside a line
//!   comment
//!
//! Comment tokens come from [`WGSL_LANGUAGE`].
//!
//! Findings, all errors one char wide:
//!
//! - `Mismatched brace: expected '}' but found ')'` at a closer that does not match the top of
//!   the stack
//! - `Unmatched closing ')'` at a closer with an empty stack
//! - `Unclosed '{'` at every opener left on the stack, innermost first

use crate::context::LintContext;
use crate::rule::Rule;
use std::str::CharIndices;
use wgsl_core::Diagnostic;
use wgsl_core_lang::WGSL_LANGUAGE;

fn closing_for(opening: char) -> char {
    match opening {
        '{' => '}',
        '(' => ')',
        '[' => ']',
        _ => '\0',
    }
}

// Consume the rest of a token whose first char was already read.
fn skip_token(chars: &mut CharIndices<'_>, token: &str) {
    for _ in token.chars().skip(1) {
        chars.next();
    }
}

/// Report unmatched, mismatched and unclosed delimiters.
pub fn check(cx: &LintContext<'_>, out: &mut Vec<Diagnostic>) {
    let text = cx.text();
    let comments = WGSL_LANGUAGE.comments;
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut comment_depth = 0usize;
    let mut in_line_comment = false;
    let mut in_string = false;

    let mut chars = text.char_indices();
    while let Some((pos, ch)) = chars.next() {
        if in_string {
            match ch {
                '\\' => {
                    chars.next();
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        let rest = &text[pos..];
        if rest.starts_with(comments.line) {
            in_line_comment = true;
            skip_token(&mut chars, comments.line);
            continue;
        }
        if rest.starts_with(comments.block_start) {
            comment_depth += 1;
            skip_token(&mut chars, comments.block_start);
            continue;
        }
        if rest.starts_with(comments.block_end) {
            comment_depth = comment_depth.saturating_sub(1);
            skip_token(&mut chars, comments.block_end);
            continue;
        }
        if ch == '\n' {
            in_line_comment = false;
        }

        if comment_depth > 0 || in_line_comment {
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' | '(' | '[' => stack.push((ch, pos)),
            '}' | ')' | ']' => match stack.pop() {
                None => out.extend(cx.error(
                    Rule::Delimiters,
                    pos..pos + 1,
                    format!("Unmatched closing '{ch}'"),
                )),
                Some((opening, _)) if closing_for(opening) != ch => out.extend(cx.error(
                    Rule::Delimiters,
                    pos..pos + 1,
                    format!(
                        "Mismatched brace: expected '{}' but found '{ch}'",
                        closing_for(opening)
                    ),
                )),
                Some(_) => {}
            },
            _ => {}
        }
    }

    while let Some((opening, pos)) = stack.pop() {
        out.extend(cx.error(
            Rule::Delimiters,
            pos..pos + 1,
            format!("Unclosed '{opening}'"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wgsl_core::DocumentSnapshot;

    fn run(text: &str) -> Vec<(String, usize)> {
        let snapshot = DocumentSnapshot::new(text);
        let cx = LintContext::new(&snapshot);
        let mut out = Vec::new();
        check(&cx, &mut out);
        out.into_iter()
            .map(|d| (d.message, d.span.start()))
            .collect()
    }

    #[test]
    fn test_unclosed_brace() {
        assert_eq!(run("fn test() {"), vec![("Unclosed '{'".to_string(), 10)]);
    }

    #[test]
    fn test_unclosed_paren_and_bracket() {
        assert_eq!(run("fn test(x: i32"), vec![("Unclosed '('".to_string(), 7)]);
        assert_eq!(
            run("var arr: array<i32, 5> = [1, 2"),
            vec![("Unclosed '['".to_string(), 25)]
        );
    }

    #[test]
    fn test_unmatched_closing() {
        assert_eq!(
            run("fn test() }"),
            vec![("Unmatched closing '}'".to_string(), 10)]
        );
    }

    #[test]
    fn test_mismatched() {
        assert_eq!(
            run("fn test() { return (x] }"),
            vec![(
                "Mismatched brace: expected ')' but found ']'".to_string(),
                21
            )]
        );
    }

    #[test]
    fn test_unclosed_reported_innermost_first() {
        assert_eq!(
            run("{ ( ["),
            vec![
                ("Unclosed '['".to_string(), 4),
                ("Unclosed '('".to_string(), 2),
                ("Unclosed '{'".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_comments_and_strings_are_skipped() {
        assert!(run("// unclosed brace {").is_empty());
        assert!(run("/* unclosed brace { */").is_empty());
        assert!(run("var str = \"unclosed brace {\";").is_empty());
        assert!(run("var str = \"escaped \\\" {\";").is_empty());
        assert!(run("/* a /* b */ { */").is_empty());
    }

    #[test]
    fn test_line_comment_ends_at_newline() {
        assert_eq!(
            run("// {\n}"),
            vec![("Unmatched closing '}'".to_string(), 5)]
        );
    }

    #[test]
    fn test_offsets_are_chars() {
        assert_eq!(run("é {"), vec![("Unclosed '{'".to_string(), 2)]);
    }
}
