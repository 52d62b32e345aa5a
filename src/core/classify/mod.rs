//! Type classification of assigned values.
//!
//! The classifier runs in two steps: a tree-sitter node is lowered into an
//! [`Expression`], then [`classify`] maps the expression to a [`TypeLabel`]
//! with an ordered match. Literals take priority over every other shape.
//!
//! ## Module Structure
//!
//! - `expression`: Expression enum and lowering from tree-sitter nodes
//! - `literal`: Decoding of string and numeric literal tokens

pub mod expression;
pub mod literal;

pub use expression::Expression;

use crate::core::TypeLabel;

/// Classify an assigned expression.
///
/// Total over every expression shape; unrecognized shapes are `Unknown`.
///
/// # Examples
///
/// ```
/// use varscout::core::{LiteralValue, TypeLabel, classify::{Expression, classify}};
///
/// assert_eq!(classify(&Expression::Constant(LiteralValue::Int(1))), TypeLabel::Int);
/// assert_eq!(classify(&Expression::Name("y".into())), TypeLabel::Variable);
/// assert_eq!(classify(&Expression::Other), TypeLabel::Unknown);
/// ```
pub fn classify(expression: &Expression) -> TypeLabel {
    match expression {
        Expression::Constant(value) => value.type_label(),
        Expression::List => TypeLabel::List,
        Expression::Dict => TypeLabel::Dict,
        Expression::Set => TypeLabel::Set,
        Expression::Tuple => TypeLabel::Tuple,
        Expression::Name(_) => TypeLabel::Variable,
        Expression::Call => TypeLabel::FunctionCall,
        Expression::Other => TypeLabel::Unknown,
    }
}
