//! Unknown `@attribute` names.

use crate::context::LintContext;
use crate::rule::Rule;
use regex::Regex;
use std::sync::LazyLock;
use wgsl_core::Diagnostic;
use wgsl_core_lang::vocab::is_known_attribute;

static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)(?:\(([^)]*)\))?").expect("valid attribute regex"));

/// Report every `@name` (with optional argument list) whose name is not a WGSL attribute.
///
/// The diagnostic covers the whole attribute text including its arguments.
pub fn check(cx: &LintContext<'_>, out: &mut Vec<Diagnostic>) {
    let text = cx.text();
    for caps in ATTRIBUTE.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if cx.is_inside_comment(whole.start()) || is_known_attribute(name.as_str()) {
            continue;
        }
        out.extend(cx.error(
            Rule::UnknownAttribute,
            whole.range(),
            format!("Unknown attribute '@{}'", name.as_str()),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_attribute() {
        let diagnostics = run(check, "@invalid fn test() {}");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Unknown attribute '@invalid'");
        assert_eq!(diagnostics[0].span.range(), 0..8);
    }

    #[test]
    fn test_span_includes_arguments() {
        let diagnostics = run(check, "@foo(1, 2) var x: i32;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span.range(), 0..10);
    }

    #[test]
    fn test_known_attributes() {
        let text = "@group(0) @binding(1) var t: texture_2d<f32>;\n\
                    @vertex fn vs(@builtin(vertex_index) i: u32) -> @builtin(position) vec4f {}\n\
                    @compute @workgroup_size(8, 8) fn cs() {}";
        assert!(run(check, text).is_empty());
    }

    #[test]
    fn test_commented_attribute_is_ignored() {
        assert!(run(check, "// @invalid\n/* @nope */").is_empty());
    }
}
