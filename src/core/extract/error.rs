use std::{io, string::FromUtf8Error};

use thiserror::Error;

/// A source file could not be turned into a syntax tree.
///
/// Every variant carries the path of the failing file so that the scanner
/// can report it and move on to the next file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("{path}:{line}:{column}: {message}")]
    Syntax {
        path: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("failed to parse {path}: {message}")]
    Parser { path: String, message: String },
}

impl ParseError {
    pub fn path(&self) -> &str {
        match self {
            ParseError::Io { path, .. }
            | ParseError::Decode { path, .. }
            | ParseError::Syntax { path, .. }
            | ParseError::Parser { path, .. } => path,
        }
    }

    /// Line and column of a syntax error (both 1-indexed).
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::Syntax { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }

    /// The failure description without the file path prefix.
    pub fn cause(&self) -> String {
        match self {
            ParseError::Io { source, .. } => source.to_string(),
            ParseError::Decode { source, .. } => format!("invalid UTF-8: {}", source),
            ParseError::Syntax { message, .. } | ParseError::Parser { message, .. } => {
                message.clone()
            }
        }
    }
}
