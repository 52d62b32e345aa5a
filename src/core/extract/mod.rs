//! Extraction engine: Python source in, variable records out.
//!
//! Each call owns its traversal state, so independent files can be
//! extracted concurrently.

mod error;
pub mod extractor;
pub mod scope;
pub mod walker;


pub use error::ParseError;
pub use extractor::{VariableExtractor, extract, extract_file, extract_with_tracking};
pub use scope::ScopeTracking;
