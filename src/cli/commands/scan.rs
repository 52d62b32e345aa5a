use std::{
    fs,
    io::{self, Write},
};

use anyhow::{Context, Result};

use super::super::args::ScanCommand;
use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{
    core::{ScanOptions, scan as scan_records},
    presentation::Render,
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let options = ScanOptions {
        path: cmd.common.path,
        scope_tracking: cmd.common.scope_tracking,
        verbose: cmd.common.verbose,
    };
    let output = scan_records(&options)?;

    let mut rendered = cmd.format.renderer().render(&output.records)?;
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match &cmd.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            record_count: output.records.len(),
            output: cmd.output,
        }),
        parse_errors: output.parse_errors,
        files_scanned: output.files_scanned,
    })
}
