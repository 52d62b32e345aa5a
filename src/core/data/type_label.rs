use std::fmt;

use serde::{Serialize, Serializer};

/// Semantic type label assigned to the right-hand side of an assignment.
///
/// Literal labels mirror Python's `type(value).__name__`, the remaining
/// labels describe the shape of the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeLabel {
    Str,
    Bytes,
    Int,
    Float,
    Complex,
    Bool,
    NoneType,
    Ellipsis,
    List,
    Dict,
    Set,
    Tuple,
    /// Assigning one variable to another: `x = y`
    Variable,
    /// Function or method invocation: `x = f()`
    FunctionCall,
    Unknown,
}

impl TypeLabel {
    pub const ALL: [TypeLabel; 15] = [
        TypeLabel::Str,
        TypeLabel::Bytes,
        TypeLabel::Int,
        TypeLabel::Float,
        TypeLabel::Complex,
        TypeLabel::Bool,
        TypeLabel::NoneType,
        TypeLabel::Ellipsis,
        TypeLabel::List,
        TypeLabel::Dict,
        TypeLabel::Set,
        TypeLabel::Tuple,
        TypeLabel::Variable,
        TypeLabel::FunctionCall,
        TypeLabel::Unknown,
    ];

    /// Look up a label by its serialized name.
    pub fn from_label(label: &str) -> Option<TypeLabel> {
        Self::ALL.into_iter().find(|l| l.as_str() == label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeLabel::Str => "str",
            TypeLabel::Bytes => "bytes",
            TypeLabel::Int => "int",
            TypeLabel::Float => "float",
            TypeLabel::Complex => "complex",
            TypeLabel::Bool => "bool",
            TypeLabel::NoneType => "NoneType",
            TypeLabel::Ellipsis => "ellipsis",
            TypeLabel::List => "list",
            TypeLabel::Dict => "dict",
            TypeLabel::Set => "set",
            TypeLabel::Tuple => "tuple",
            TypeLabel::Variable => "variable",
            TypeLabel::FunctionCall => "function_call",
            TypeLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TypeLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
