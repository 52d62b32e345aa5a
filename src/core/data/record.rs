use std::fmt;

use serde::{Serialize, Serializer};

use super::{LiteralValue, TypeLabel};

/// Marker written in place of a default value when the assigned expression
/// is not a constant literal.
pub const ABSENT_DEFAULT_MARKER: &str = "(None)";

/// Context an assignment is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    Global,
    Function(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str("Global"),
            Scope::Function(name) => write!(f, "Function: {}", name),
        }
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Default value of a variable occurrence.
///
/// `Literal(LiteralValue::None)` is an explicit `x = None`, while `Absent`
/// means the right-hand side was not a literal at all.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Literal(LiteralValue),
    Absent,
}

impl DefaultValue {
    pub fn literal(&self) -> Option<&LiteralValue> {
        match self {
            DefaultValue::Literal(value) => Some(value),
            DefaultValue::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DefaultValue::Absent)
    }
}

impl From<Option<LiteralValue>> for DefaultValue {
    fn from(value: Option<LiteralValue>) -> Self {
        value.map_or(DefaultValue::Absent, DefaultValue::Literal)
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Literal(value) => fmt::Display::fmt(value, f),
            DefaultValue::Absent => f.write_str(ABSENT_DEFAULT_MARKER),
        }
    }
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DefaultValue::Literal(value) => value.serialize(serializer),
            DefaultValue::Absent => serializer.serialize_str(ABSENT_DEFAULT_MARKER),
        }
    }
}

/// One variable assignment occurrence.
///
/// Records are produced once per assignment target during extraction and
/// are never mutated afterwards. `description` and `example_usage` are
/// left empty for downstream enrichment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableRecord {
    pub name: String,
    pub description: String,
    pub data_type: TypeLabel,
    pub default_value: DefaultValue,
    pub example_usage: String,
    pub scope: Scope,
    pub source_file: String,
    /// Line of the assignment target (1-indexed).
    pub line: usize,
}

impl VariableRecord {
    pub fn new(
        name: impl Into<String>,
        data_type: TypeLabel,
        default_value: DefaultValue,
        scope: Scope,
        source_file: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            data_type,
            default_value,
            example_usage: String::new(),
            scope,
            source_file: source_file.into(),
            line,
        }
    }
}
