//! Core analysis engine.
//!
//! ## Pipeline
//!
//! 1. **Discovery** (`file_scanner`): find Python files under the scan path
//! 2. **Parsing** (`parsers`): build a tree-sitter syntax tree per file
//! 3. **Extraction** (`extract`): walk the tree and emit one record per
//!    assignment target, typed by `classify`
//! 4. **Aggregation** (`context`): merge per-file results in discovery order
//!
//! ## Module Structure
//!
//! - `classify`: Type classifier (expression shapes to type labels)
//! - `context`: ScanContext and ScanOptions
//! - `data`: VariableRecord and related data types
//! - `extract`: Extraction engine and scope tracking
//! - `file_scanner`: Python file discovery
//! - `parsers`: Python parser

pub mod classify;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;

pub use context::{ScanContext, ScanOptions, ScanOutput, scan};
pub use data::{ABSENT_DEFAULT_MARKER, DefaultValue, LiteralValue, Scope, TypeLabel, VariableRecord};
