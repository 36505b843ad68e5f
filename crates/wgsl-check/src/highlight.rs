use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use wgsl_core::Document;
use wgsl_core_highlight::WgslHighlighter;
use wgsl_core_highlight::theme::format_for;

/// Print one line per classification span: `line:col+len type-name color "text"`.
pub fn execute(path: &Path) -> Result<ExitCode> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let document = Document::new(&text).into_shared();
    let highlighter = WgslHighlighter::attach(Some(&document))?;
    let snapshot = highlighter.current_snapshot();

    let spans = highlighter.current_classifications();
    for span in &spans {
        let (line, column) = snapshot.line_column(span.span.start()).unwrap_or_default();
        let format = format_for(span.category);
        println!(
            "{}:{}+{} {} {} {:?}",
            line + 1,
            column + 1,
            span.span.len(),
            span.category.type_name(),
            format.foreground,
            snapshot.span_text(span.span).unwrap_or_default()
        );
    }
    tracing::info!(spans = spans.len(), "highlight finished");
    Ok(ExitCode::SUCCESS)
}
