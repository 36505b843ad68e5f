//! Duplicate resource bindings.

use crate::context::LintContext;
use crate::rule::Rule;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use wgsl_core::Diagnostic;

static BINDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@binding\((\d+)\)\s*@group\((\d+)\)").expect("valid binding regex")
});

/// Report every `@binding(n) @group(m)` whose pair was already seen earlier in the text.
///
/// Only this attribute order is recognized; `@group(m) @binding(n)` is not inspected. The
/// numbers are compared as written, so `@binding(01)` and `@binding(1)` are distinct.
pub fn check(cx: &LintContext<'_>, out: &mut Vec<Diagnostic>) {
    let text = cx.text();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for caps in BINDING.captures_iter(text) {
        let (Some(whole), Some(binding), Some(group)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if cx.is_inside_comment(whole.start()) {
            continue;
        }
        let (binding, group) = (binding.as_str(), group.as_str());
        if !seen.insert((group, binding)) {
            out.extend(cx.error(
                Rule::DuplicateBinding,
                whole.range(),
                format!("Duplicate binding: @binding({binding}) @group({group})"),
            ));
        }
    }
}
