//! `@workgroup_size` bounds.

use crate::context::LintContext;
use crate::rule::Rule;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use wgsl_core::Diagnostic;

const MAX_DIMENSION: u64 = 256;
const MAX_INVOCATIONS: u64 = 256;

static WORKGROUP_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@workgroup_size\((\d+)(?:\s*,\s*(\d+))?(?:\s*,\s*(\d+))?\)")
        .expect("valid workgroup size regex")
});

/// Check literal `@workgroup_size(x[, y[, z]])` attributes.
///
/// Omitted dimensions are 1. A dimension outside `1..=256` is an error; otherwise a product
/// above 256 is a warning. Only integer literals are recognized.
pub fn check(cx: &LintContext<'_>, out: &mut Vec<Diagnostic>) {
    let text = cx.text();
    for caps in WORKGROUP_SIZE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if cx.is_inside_comment(whole.start()) {
            continue;
        }
        let dims = [dimension(&caps, 1), dimension(&caps, 2), dimension(&caps, 3)];

        if dims.iter().any(|d| !(1..=MAX_DIMENSION).contains(d)) {
            out.extend(cx.error(
                Rule::WorkgroupSize,
                whole.range(),
                "Workgroup size dimensions must be between 1 and 256",
            ));
            continue;
        }
        let invocations: u64 = dims.iter().product();
        if invocations > MAX_INVOCATIONS {
            out.extend(cx.warning(
                Rule::WorkgroupSize,
                whole.range(),
                format!(
                    "Total workgroup invocations ({invocations}) exceeds recommended limit of 256"
                ),
            ));
        }
    }
}

/// Value of capture `index`, 1 when absent. Literals too large for `u64` saturate.
fn dimension(caps: &Captures<'_>, index: usize) -> u64 {
    caps.get(index)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;
    use pretty_assertions::assert_eq;
    use wgsl_core::DiagnosticSeverity;

    fn findings(text: &str) -> Vec<(DiagnosticSeverity, String)> {
        run(check, text)
            .into_iter()
            .map(|d| (d.severity, d.message))
            .collect()
    }

    #[test]
    fn test_dimension_out_of_range() {
        let expected = vec![(
            DiagnosticSeverity::Error,
            "Workgroup size dimensions must be between 1 and 256".to_string(),
        )];
        assert_eq!(findings("@compute @workgroup_size(0) fn main() {}"), expected);
        assert_eq!(findings("@compute @workgroup_size(300) fn main() {}"), expected);
        assert_eq!(findings("@compute @workgroup_size(1, 1, 257) fn main() {}"), expected);
    }

    #[test]
    fn test_too_many_invocations() {
        assert_eq!(
            findings("@compute @workgroup_size(16, 16, 2) fn main() {}"),
            vec![(
                DiagnosticSeverity::Warning,
                "Total workgroup invocations (512) exceeds recommended limit of 256".to_string(),
            )]
        );
    }

    #[test]
    fn test_valid_sizes() {
        assert!(findings("@workgroup_size(64)").is_empty());
        assert!(findings("@workgroup_size(16, 16)").is_empty());
        assert!(findings("@workgroup_size(256, 1, 1)").is_empty());
        assert!(findings("@workgroup_size(8,8,4)").is_empty());
    }

    #[test]
    fn test_huge_literal_is_out_of_range() {
        let diagnostics = run(check, "@workgroup_size(99999999999999999999999)");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
        assert_eq!(diagnostics[0].span.range(), 0..40);
    }

    #[test]
    fn test_non_literal_sizes_are_ignored() {
        assert!(findings("@workgroup_size(SIZE, 1)").is_empty());
        assert!(findings("// @workgroup_size(0)").is_empty());
    }
}
