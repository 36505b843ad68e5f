use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use wgsl_core_lang::WGSL_LANGUAGE;

/// Expand `paths` into the files to process.
///
/// Files are taken as given, whatever their extension. Directories are walked recursively for
/// `.wgsl` files, in sorted order.
pub fn collect(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_dir(path, &mut files)?;
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn collect_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
        if entry.file_type().is_file() && WGSL_LANGUAGE.matches_path(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(())
}
