use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    config::{Config, load_config},
    core::{
        VariableRecord,
        extract::{ScopeTracking, extract_file},
        file_scanner::discover,
    },
    issues::ParseErrorIssue,
};

/// Scan inputs shared by the CLI and the MCP server.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Python file or directory to scan.
    pub path: PathBuf,
    /// Overrides `scopeTracking` from the config file.
    pub scope_tracking: Option<ScopeTracking>,
    pub verbose: bool,
}

impl ScanOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            scope_tracking: None,
            verbose: false,
        }
    }
}

/// Aggregated output of a scan.
#[derive(Debug)]
pub struct ScanOutput {
    /// Records of every parsed file, in discovery order then source order.
    pub records: Vec<VariableRecord>,
    /// Files that failed to parse and contributed no records.
    pub parse_errors: Vec<ParseErrorIssue>,
    pub files_scanned: usize,
}

/// Scan orchestration: configuration, file discovery and per-file extraction.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--scope-tracking lexical`)
/// 2. `.varscoutrc.json` config file (searched upwards from the scan root)
/// 3. Built-in defaults
pub struct ScanContext {
    pub config: Config,
    /// Whether the configuration came from a file.
    pub config_from_file: bool,
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
    pub verbose: bool,
}

impl ScanContext {
    /// Load configuration and discover files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the path is neither a
    /// Python file nor a directory.
    pub fn new(options: &ScanOptions) -> Result<Self> {
        let verbose = options.verbose;
        let root = options.path.clone();

        let config_dir = if root.is_file() {
            root.parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        } else {
            root.clone()
        };

        let config_result = load_config(&config_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .varscoutrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(scope_tracking) = options.scope_tracking {
            config.scope_tracking = scope_tracking;
        }

        let scan_result = discover(&root, &config.ignores, verbose)?;
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            config_from_file: config_result.from_file,
            root,
            files: scan_result.files,
            verbose,
        })
    }

    pub fn scope_tracking(&self) -> ScopeTracking {
        self.config.scope_tracking
    }

    /// Extract every discovered file.
    ///
    /// Files are extracted in parallel; results are merged back in discovery
    /// order. A file that fails to parse contributes a `ParseErrorIssue` and no
    /// records.
    pub fn run(&self) -> ScanOutput {
        let tracking = self.scope_tracking();

        let results: Vec<_> = self
            .files
            .par_iter()
            .map(|path| extract_file(path, tracking))
            .collect();

        let mut records = Vec::new();
        let mut parse_errors = Vec::new();

        for (path, result) in self.files.iter().zip(results) {
            match result {
                Ok(file_records) => {
                    if self.verbose {
                        eprintln!(
                            "  {} {} ({} variables)",
                            "Processing".green(),
                            path.display(),
                            file_records.len()
                        );
                    }
                    records.extend(file_records);
                }
                Err(err) => parse_errors.push(ParseErrorIssue::from(&err)),
            }
        }

        ScanOutput {
            records,
            parse_errors,
            files_scanned: self.files.len(),
        }
    }
}

/// Discover and extract in one call.
pub fn scan(options: &ScanOptions) -> Result<ScanOutput> {
    Ok(ScanContext::new(options)?.run())
}
