use crate::config::LintConfig;
use crate::context::LintContext;
use wgsl_core::{Diagnostic, DocumentSnapshot};

/// Run every enabled rule over `snapshot` and concatenate the findings in rule order.
///
/// Pure function of its inputs: the same snapshot and configuration always produce the same
/// diagnostics in the same order. Within one rule, findings follow that rule's scan order.
pub fn analyze(snapshot: &DocumentSnapshot, config: &LintConfig) -> Vec<Diagnostic> {
    let cx = LintContext::new(snapshot);
    let mut diagnostics = Vec::new();
    for rule in config.enabled_rules() {
        let before = diagnostics.len();
        rule.check(&cx, &mut diagnostics);
        tracing::debug!(rule = rule.code(), found = diagnostics.len() - before, "rule finished");
    }
    tracing::debug!(
        version = snapshot.version(),
        diagnostics = diagnostics.len(),
        "analyzed snapshot"
    );
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rule_order() {
        let snapshot = DocumentSnapshot::new("var x: Nope\n@bogus fn f() {");
        let codes: Vec<_> = analyze(&snapshot, &LintConfig::default())
            .iter()
            .map(|d| d.code)
            .collect();
        assert_eq!(
            codes,
            vec!["missing-semicolon", "delimiters", "unknown-attribute", "undefined-type"]
        );
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let snapshot = DocumentSnapshot::new("var x: Nope");
        let config = LintConfig::default()
            .with_rule_disabled(Rule::MissingSemicolon)
            .with_rule_disabled(Rule::UndefinedType);
        assert!(analyze(&snapshot, &config).is_empty());
    }

    #[test]
    fn test_empty_document() {
        let snapshot = DocumentSnapshot::new("");
        assert!(analyze(&snapshot, &LintConfig::default()).is_empty());
    }
}
