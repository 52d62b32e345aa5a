use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of discovering Python files.
pub struct ScanResult {
    /// Files in discovery order (directory walks are sorted by file name).
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Discover Python files under `path`.
///
/// A file path is accepted as-is if it has a `.py` extension; a directory is
/// walked recursively. Anything else is an error.
pub fn discover(path: &Path, ignore_patterns: &[String], verbose: bool) -> Result<ScanResult> {
    if path.is_file() {
        if !is_python_file(path) {
            bail!(
                "Invalid path: {} is not a Python file. Provide a Python file or a folder containing Python files.",
                path.display()
            );
        }
        return Ok(ScanResult {
            files: vec![path.to_path_buf()],
            skipped_count: 0,
        });
    }

    if !path.is_dir() {
        bail!(
            "Invalid path: {} does not exist. Provide a Python file or a folder containing Python files.",
            path.display()
        );
    }

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let entry_path = entry.path();
        let path_str = entry_path.to_string_lossy();

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && is_python_file(entry_path) {
            files.push(entry_path.to_path_buf());
        }
    }

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn is_python_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("py"))
}
