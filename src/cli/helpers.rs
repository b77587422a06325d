//! Shared helper functions for CLI commands

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::frame::ParameterName;
use crate::entities::frame::FRAME_FILE_SUFFIX;

/// A `NAME=VALUE` assignment given with `--set`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    pub name: ParameterName,
    pub value: f64,
}

/// Parse `--set` values such as `interval=4` or `OuterWidth=60.5`
pub fn parse_assignment(s: &str) -> Result<Assignment, String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected NAME=VALUE, got '{}'", s))?;

    let name: ParameterName = name.trim().parse()?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number for {}: '{}'", name, value.trim()))?;

    Ok(Assignment { name, value })
}

/// Format a number without a trailing `.0` and with at most four decimals
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        // no "-0"
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Truncate a string to max_len, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Whether a path names a frame document
pub fn is_frame_file(path: &Path) -> bool {
    path.to_string_lossy().ends_with(FRAME_FILE_SUFFIX)
}

/// Expand paths - if a directory is given, find all frame documents in it
///
/// Files given explicitly are kept whatever their name; missing paths are
/// kept too so the caller can report them.
pub fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_entry(|e| {
                    let name = e.file_name().to_string_lossy();
                    !name.starts_with('.') || e.depth() == 0
                })
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_frame_file(e.path()))
                .map(|e| e.path().to_path_buf())
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    files
}
