//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Extract variables and print them as a table, JSON or HTML
//! - `serve`: Scan once, then serve the results over HTTP
//! - `init`: Initialize varscout configuration file
//! - `mcp`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{core::extract::ScopeTracking, presentation::OutputFormat};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Serve(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Mcp) | None => false,
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Python file or directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// How assignments are attributed to functions (overrides config file)
    #[arg(long, value_enum)]
    pub scope_tracking: Option<ScopeTracking>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Address to listen on (overrides config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract variable assignments from Python files
    Scan(ScanCommand),
    /// Serve extracted variables as a web page and JSON API
    Serve(ServeCommand),
    /// Initialize a new .varscoutrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Mcp,
}
