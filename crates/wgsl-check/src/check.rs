use crate::files;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wgsl_core::{Diagnostic, DocumentSnapshot};
use wgsl_core_lint::{LintConfig, analyze};

/// Lint every file and print `path:line:col: severity: message [code]` lines.
///
/// Exits with failure when any error-severity diagnostic was reported.
pub fn execute(paths: &[PathBuf], config: &LintConfig) -> Result<ExitCode> {
    let files = files::collect(paths)?;
    let mut errors = 0usize;
    let mut warnings = 0usize;

    for path in &files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let snapshot = DocumentSnapshot::new(&text);
        for diagnostic in analyze(&snapshot, config) {
            if diagnostic.is_error() {
                errors += 1;
            } else {
                warnings += 1;
            }
            println!("{}", format_diagnostic(path, &snapshot, &diagnostic));
        }
    }

    tracing::info!(files = files.len(), errors, warnings, "check finished");
    Ok(if errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// One diagnostic as a compiler-style line (1-based line and column).
fn format_diagnostic(path: &Path, snapshot: &DocumentSnapshot, diagnostic: &Diagnostic) -> String {
    let (line, column) = snapshot
        .line_column(diagnostic.span.start())
        .unwrap_or_default();
    format!(
        "{}:{}:{}: {}: {} [{}]",
        path.display(),
        line + 1,
        column + 1,
        diagnostic.severity,
        diagnostic.message,
        diagnostic.code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_diagnostic() {
        let snapshot = DocumentSnapshot::new("var a: f32;\nvar x: i32");
        let diagnostics = analyze(&snapshot, &LintConfig::default());
        assert_eq!(
            format_diagnostic(Path::new("a.wgsl"), &snapshot, &diagnostics[0]),
            "a.wgsl:2:10: error: Missing semicolon at end of statement [missing-semicolon]"
        );
    }
}
