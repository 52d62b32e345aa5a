use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, scan::scan, serve::serve},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and any parse errors
/// - `Err` if the command fails (e.g., invalid path, invalid config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Serve(cmd)) => serve(cmd),
        Some(Command::Init) => init(),
        Some(Command::Mcp) => {
            // Mcp command is handled in main.rs before calling run()
            anyhow::bail!("Mcp command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
