//! Return-type contracts of shader entry points.
//!
//! The function body is found with a plain brace count that ignores comments and strings, so a
//! `}` inside a comment in the body cuts the function text short.

use crate::context::LintContext;
use crate::rule::Rule;
use regex::Regex;
use std::sync::LazyLock;
use wgsl_core::Diagnostic;

const VERTEX_MESSAGE: &str = "Vertex shader should return a structure with @builtin(position)";
const FRAGMENT_MESSAGE: &str =
    "Fragment shader return type should have @location attribute or be void";

static STAGE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(vertex|fragment|compute)\s+fn\s+(\w+)").expect("valid stage function regex")
});
static RETURN_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"->\s*(\w+)").expect("valid return type regex"));
static LOCATION_RETURN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"->\s*@location\(\d+\)").expect("valid location regex"));
static UNIT_RETURN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"->\s*\(\s*\)").expect("valid unit return regex"));

/// Check `@vertex` and `@fragment` functions. `@compute` functions are matched but never flagged.
pub fn check(cx: &LintContext<'_>, out: &mut Vec<Diagnostic>) {
    let text = cx.text();
    for caps in STAGE_FUNCTION.captures_iter(text) {
        let (Some(whole), Some(stage)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if cx.is_inside_comment(whole.start()) {
            continue;
        }
        let Some(end) = find_matching_brace(text, whole.start()) else {
            continue;
        };
        let function = &text[whole.start()..end];

        match stage.as_str() {
            "vertex" if !vertex_returns_position(text, function) => {
                out.extend(cx.warning(Rule::StageFunction, whole.range(), VERTEX_MESSAGE));
            }
            "fragment" if !fragment_return_is_valid(function) => {
                out.extend(cx.warning(Rule::StageFunction, whole.range(), FRAGMENT_MESSAGE));
            }
            _ => {}
        }
    }
}

/// Byte offset of the `}` that closes the first `{` at or after `start`.
///
/// Stray `}` before the first `{` still count against the depth.
fn find_matching_brace(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0i64;
    let mut found_first = false;
    for (i, b) in text.bytes().enumerate().skip(start) {
        match b {
            b'{' => {
                found_first = true;
                depth += 1;
            }
            b'}' => {
                depth -= 1;
                if found_first && depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn vertex_returns_position(text: &str, function: &str) -> bool {
    if function.contains("@builtin(position)") {
        return true;
    }
    let Some(return_type) = RETURN_TYPE.captures(function).and_then(|c| c.get(1)) else {
        return false;
    };
    struct_has_position(text, return_type.as_str())
}

/// Returns `true` if `text` declares `struct name { ... }` with a `@builtin(position)` member.
fn struct_has_position(text: &str, name: &str) -> bool {
    let pattern = format!(
        r"struct\s+{}\s*\{{[^}}]*@builtin\(position\)[^}}]*\}}",
        regex::escape(name)
    );
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(text),
        Err(err) => {
            tracing::trace!(%err, name, "cannot build struct lookup pattern");
            false
        }
    }
}

fn fragment_return_is_valid(function: &str) -> bool {
    LOCATION_RETURN.is_match(function) || UNIT_RETURN.is_match(function) || !function.contains("->")
}
