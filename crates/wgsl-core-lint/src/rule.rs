use crate::context::LintContext;
use crate::delimiters;
use crate::error::LintConfigError;
use crate::rules::{attributes, bindings, declarations, stage, terminator, types, workgroup};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wgsl_core::Diagnostic;

/// A single diagnostic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Statements that end at a newline, `}` or end of text without `;`.
    MissingSemicolon,
    /// Unmatched, mismatched and unclosed delimiters.
    Delimiters,
    /// Attributes outside the known WGSL attribute set.
    UnknownAttribute,
    /// Return-type contracts of `@vertex` / `@fragment` functions.
    StageFunction,
    /// Declared types that are neither built-in nor a struct in the document.
    UndefinedType,
    /// Repeated `@binding(n) @group(m)` pairs.
    DuplicateBinding,
    /// `@workgroup_size` bounds.
    WorkgroupSize,
    /// `var name;` with neither a type annotation nor an initializer.
    IncompleteDeclaration,
}

impl Rule {
    /// Every rule, in the order the aggregator runs (and reports) them.
    pub const ALL: [Rule; 8] = [
        Rule::MissingSemicolon,
        Rule::Delimiters,
        Rule::UnknownAttribute,
        Rule::StageFunction,
        Rule::UndefinedType,
        Rule::DuplicateBinding,
        Rule::WorkgroupSize,
        Rule::IncompleteDeclaration,
    ];

    /// Stable kebab-case code, also used as [`Diagnostic::code`].
    pub fn code(&self) -> &'static str {
        match self {
            Rule::MissingSemicolon => "missing-semicolon",
            Rule::Delimiters => "delimiters",
            Rule::UnknownAttribute => "unknown-attribute",
            Rule::StageFunction => "stage-function",
            Rule::UndefinedType => "undefined-type",
            Rule::DuplicateBinding => "duplicate-binding",
            Rule::WorkgroupSize => "workgroup-size",
            Rule::IncompleteDeclaration => "incomplete-declaration",
        }
    }

    /// Run this rule over `cx`, appending its findings to `out`.
    pub fn check(&self, cx: &LintContext<'_>, out: &mut Vec<Diagnostic>) {
        match self {
            Rule::MissingSemicolon => terminator::check(cx, out),
            Rule::Delimiters => delimiters::check(cx, out),
            Rule::UnknownAttribute => attributes::check(cx, out),
            Rule::StageFunction => stage::check(cx, out),
            Rule::UndefinedType => types::check(cx, out),
            Rule::DuplicateBinding => bindings::check(cx, out),
            Rule::WorkgroupSize => workgroup::check(cx, out),
            Rule::IncompleteDeclaration => declarations::check(cx, out),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rule {
    type Err = LintConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.code() == s)
            .ok_or_else(|| LintConfigError::UnknownRule(s.to_string()))
    }
}
