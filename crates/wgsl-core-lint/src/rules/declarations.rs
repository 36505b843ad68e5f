//! `var` declarations with neither a type nor an initializer.

use crate::context::LintContext;
use crate::rule::Rule;
use regex::Regex;
use std::sync::LazyLock;
use wgsl_core::Diagnostic;

static BARE_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bvar\s+(\w+)\s*;").expect("valid bare var regex"));

/// Report `var name;`. The diagnostic spans from `var` through the end of the name.
pub fn check(cx: &LintContext<'_>, out: &mut Vec<Diagnostic>) {
    let text = cx.text();
    for caps in BARE_VAR.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if cx.is_inside_comment(whole.start()) {
            continue;
        }
        if whole.as_str().contains([':', '=']) {
            continue;
        }
        out.extend(cx.error(
            Rule::IncompleteDeclaration,
            whole.start()..name.end(),
            "Variable declaration must have either a type annotation or an initializer",
        ));
    }
}
