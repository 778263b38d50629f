use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Workflow file extensions, in discovery order.
const WORKFLOW_PATTERNS: &[&str] = &["*.yml", "*.yaml"];

/// Hidden files (`.draft.yml`) are not workflows.
const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Find workflow files at `path`.
///
/// A file is returned as-is. A directory yields the `*.yml` files directly
/// inside it, then the `*.yaml` files, each group sorted; subdirectories are
/// not scanned, nor are dotfiles. A path that does not exist yields nothing.
pub fn discover_workflow_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        return Ok(Vec::new());
    }

    let dir = glob::Pattern::escape(&path.to_string_lossy());
    let mut files = Vec::new();

    for pattern in WORKFLOW_PATTERNS {
        let full_pattern = format!("{}/{}", dir, pattern);
        let mut matched: Vec<PathBuf> = glob::glob_with(&full_pattern, MATCH_OPTIONS)
            .with_context(|| format!("Failed to read glob pattern '{}'", full_pattern))?
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file())
            .collect();
        matched.sort();
        files.extend(matched);
    }

    Ok(files)
}
