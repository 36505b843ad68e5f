use crate::error::LintConfigError;
use crate::rule::Rule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which rules run during analysis.
///
/// Every rule is enabled by default. In TOML:
///
/// ```toml
/// disabled-rules = ["undefined-type", "stage-function"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LintConfig {
    /// Rules that are skipped.
    pub disabled_rules: BTreeSet<Rule>,
}

impl LintConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, LintConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Disable `rule`.
    pub fn with_rule_disabled(mut self, rule: Rule) -> Self {
        self.disabled_rules.insert(rule);
        self
    }

    /// Returns `true` if `rule` runs under this configuration.
    pub fn is_enabled(&self, rule: Rule) -> bool {
        !self.disabled_rules.contains(&rule)
    }

    /// Enabled rules, in run order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL.into_iter().filter(|rule| self.is_enabled(*rule))
    }
}
