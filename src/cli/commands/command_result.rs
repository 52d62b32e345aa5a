use std::path::PathBuf;

use crate::{cli::exit_status::ExitStatus, issues::ParseErrorIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Serve(ServeSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub record_count: usize,
    /// File the rendered output was written to, if not stdout.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ServeSummary {
    pub record_count: usize,
    pub address: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running varscout commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files that failed to parse. Empty for non-scanning commands.
    pub parse_errors: Vec<ParseErrorIssue>,
    /// Number of Python files that were scanned.
    pub files_scanned: usize,
}

impl CommandResult {
    pub fn init(created: bool) -> Self {
        Self {
            summary: CommandSummary::Init(InitSummary { created }),
            parse_errors: Vec::new(),
            files_scanned: 0,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        let failed = match &self.summary {
            CommandSummary::Init(summary) => !summary.created,
            CommandSummary::Scan(_) | CommandSummary::Serve(_) => !self.parse_errors.is_empty(),
        };
        if failed {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
