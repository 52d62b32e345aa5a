//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes variable scanning to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: MCP server and tool implementations
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{VarscoutMcpServer, run_server};
