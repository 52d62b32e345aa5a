//! Problems reported alongside scan results.

use std::fmt;

use serde::Serialize;

use crate::core::extract::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A file that was skipped because it could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorIssue {
    pub file_path: String,
    /// Location of a syntax error (1-indexed), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    /// `path:line:col` when the location is known, otherwise the bare path.
    pub fn location(&self) -> String {
        match (self.line, self.col) {
            (Some(line), Some(col)) => format!("{}:{}:{}", self.file_path, line, col),
            _ => self.file_path.clone(),
        }
    }
}

impl From<&ParseError> for ParseErrorIssue {
    fn from(err: &ParseError) -> Self {
        let location = err.location();
        Self {
            file_path: err.path().to_string(),
            line: location.map(|(line, _)| line),
            col: location.map(|(_, col)| col),
            error: err.cause(),
        }
    }
}
