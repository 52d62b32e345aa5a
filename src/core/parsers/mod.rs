//! Source parsers.
//!
//! - `python`: Python source parser (uses tree-sitter-python for the syntax tree)

pub mod python;
