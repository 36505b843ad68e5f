//! wgsl-check - lint and highlight WGSL files from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wgsl_core_lint::LintConfig;

mod check;
mod files;
mod highlight;

#[derive(Parser)]
#[command(name = "wgsl-check")]
#[command(version)]
#[command(about = "Lint and highlight WGSL shaders", long_about = None)]
struct Cli {
    /// TOML lint configuration (e.g. `disabled-rules = ["undefined-type"]`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report diagnostics for files or directories of `.wgsl` files
    Check {
        /// Files or directories to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print the classification spans of a file
    Highlight {
        /// File to classify
        path: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wgsl_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { paths } => check::execute(&paths, &config),
        Commands::Highlight { path } => highlight::execute(&path),
    }
}

fn load_config(path: Option<&Path>) -> Result<LintConfig> {
    let Some(path) = path else {
        return Ok(LintConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = LintConfig::from_toml_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), disabled = config.disabled_rules.len(), "loaded config");
    Ok(config)
}
