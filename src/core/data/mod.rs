//! Core data types shared by extraction, scanning and presentation.
//!
//! ## Module Structure
//!
//! - `literal`: LiteralValue (decoded constant on the right-hand side)
//! - `record`: VariableRecord, Scope and DefaultValue
//! - `type_label`: TypeLabel (fixed classification set)

pub mod literal;
pub mod record;
pub mod type_label;

pub use literal::LiteralValue;
pub use record::{ABSENT_DEFAULT_MARKER, DefaultValue, Scope, VariableRecord};
pub use type_label::TypeLabel;
