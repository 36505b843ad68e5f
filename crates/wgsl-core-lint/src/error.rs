use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading a [`LintConfig`](crate::LintConfig).
pub enum LintConfigError {
    #[error("TOML parse error: {0}")]
    /// The configuration text was not valid TOML or did not match the expected shape.
    Toml(#[from] toml::de::Error),

    #[error("unknown rule '{0}'")]
    /// A rule code did not name any known rule.
    UnknownRule(String),
}
