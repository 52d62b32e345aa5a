use std::fmt;

use serde::{Serialize, Serializer};

use super::TypeLabel;

/// Value of a constant literal on the right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Str(String),
    Bytes(Vec<u8>),
    Int(i64),
    /// Integer literal that does not fit in 64 bits, kept as its decimal
    /// or prefixed digits.
    BigInt(String),
    Float(f64),
    /// Imaginary literal such as `2j`, kept as written.
    Complex(String),
    Bool(bool),
    None,
    Ellipsis,
}

impl LiteralValue {
    /// Python type name of the value.
    pub fn type_label(&self) -> TypeLabel {
        match self {
            LiteralValue::Str(_) => TypeLabel::Str,
            LiteralValue::Bytes(_) => TypeLabel::Bytes,
            LiteralValue::Int(_) | LiteralValue::BigInt(_) => TypeLabel::Int,
            LiteralValue::Float(_) => TypeLabel::Float,
            LiteralValue::Complex(_) => TypeLabel::Complex,
            LiteralValue::Bool(_) => TypeLabel::Bool,
            LiteralValue::None => TypeLabel::NoneType,
            LiteralValue::Ellipsis => TypeLabel::Ellipsis,
        }
    }
}

/// Renders the value the way Python's `str()` would.
impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Str(s) => f.write_str(s),
            LiteralValue::Bytes(b) => write!(f, "b{:?}", String::from_utf8_lossy(b)),
            LiteralValue::Int(n) => write!(f, "{}", n),
            LiteralValue::BigInt(digits) => f.write_str(digits),
            LiteralValue::Float(n) => write!(f, "{:?}", n),
            LiteralValue::Complex(text) => f.write_str(text),
            LiteralValue::Bool(true) => f.write_str("True"),
            LiteralValue::Bool(false) => f.write_str("False"),
            LiteralValue::None => f.write_str("None"),
            LiteralValue::Ellipsis => f.write_str("Ellipsis"),
        }
    }
}

impl Serialize for LiteralValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LiteralValue::Str(s) => serializer.serialize_str(s),
            LiteralValue::Bytes(b) => serializer.serialize_str(&String::from_utf8_lossy(b)),
            LiteralValue::Int(n) => serializer.serialize_i64(*n),
            LiteralValue::BigInt(digits) => serializer.serialize_str(digits),
            // JSON has no infinity; `1e400` keeps its Python text.
            LiteralValue::Float(n) if !n.is_finite() => serializer.collect_str(self),
            LiteralValue::Float(n) => serializer.serialize_f64(*n),
            LiteralValue::Complex(text) => serializer.serialize_str(text),
            LiteralValue::Bool(b) => serializer.serialize_bool(*b),
            LiteralValue::None => serializer.serialize_unit(),
            LiteralValue::Ellipsis => serializer.serialize_str("Ellipsis"),
        }
    }
}
