use anyhow::Result;

use super::super::{args::ServeCommand, report};
use super::{CommandResult, CommandSummary, ServeSummary};
use crate::{
    core::{ScanContext, ScanOptions},
    presentation::server::{Server, Site},
};

/// Scan once, then serve the results until the process is stopped.
pub fn serve(cmd: ServeCommand) -> Result<CommandResult> {
    let verbose = cmd.common.verbose;
    let options = ScanOptions {
        path: cmd.common.path,
        scope_tracking: cmd.common.scope_tracking,
        verbose,
    };

    let ctx = ScanContext::new(&options)?;
    let output = ctx.run();

    let host = cmd.host.unwrap_or_else(|| ctx.config.host.clone());
    let port = cmd.port.unwrap_or(ctx.config.port);

    let site = Site::new(&output.records)?;
    let server = Server::bind(&host, port, site, verbose)?;

    let result = CommandResult {
        summary: CommandSummary::Serve(ServeSummary {
            record_count: output.records.len(),
            address: server.local_addr()?.to_string(),
        }),
        parse_errors: output.parse_errors,
        files_scanned: output.files_scanned,
    };

    report::print_serve_banner(&result, verbose);
    server.run()?;

    Ok(result)
}
