//! Undefined types in variable declarations.

use crate::context::LintContext;
use crate::rule::Rule;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use wgsl_core::Diagnostic;
use wgsl_core_lang::vocab::{BUILTIN_TYPES, is_keyword};

static STRUCT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"struct\s+(\w+)").expect("valid struct name regex"));
static TYPED_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:var|let|const)\s+\w+\s*:\s*(\w+)").expect("valid typed declaration regex")
});

/// Report `var|let|const name: T` where `T` is neither built-in, a keyword, nor the name of a
/// struct declared anywhere in the document (outside comments).
///
/// Generic parameters are not inspected: `array<Foo, 4>` only checks `array`.
pub fn check(cx: &LintContext<'_>, out: &mut Vec<Diagnostic>) {
    let text = cx.text();
    let known = known_types(cx);

    for caps in TYPED_DECLARATION.captures_iter(text) {
        let (Some(whole), Some(ty)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if cx.is_inside_comment(whole.start()) {
            continue;
        }
        let name = ty.as_str();
        if known.contains(name) || is_keyword(name) {
            continue;
        }
        out.extend(cx.error(
            Rule::UndefinedType,
            ty.range(),
            format!("Undefined type '{name}'"),
        ));
    }
}

fn known_types<'a>(cx: &LintContext<'a>) -> HashSet<&'a str> {
    let mut known: HashSet<&'a str> = BUILTIN_TYPES.iter().copied().collect();
    for caps in STRUCT_NAME.captures_iter(cx.text()) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if !cx.is_inside_comment(whole.start()) {
            known.insert(name.as_str());
        }
    }
    known
}
