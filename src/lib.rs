//! Varscout - variable documentation for Python codebases
//!
//! Varscout walks Python sources, records every assignment to a plain name
//! together with the type of the assigned value, its literal default and the
//! function it was assigned in, and presents the result as a terminal table,
//! JSON, an HTML page, a small web server or an MCP tool.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (discovery, parsing, extraction, aggregation)
//! - `issues`: Problems reported alongside scan results
//! - `mcp`: Model Context Protocol server implementation
//! - `presentation`: Renderers and the HTTP server

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod presentation;
