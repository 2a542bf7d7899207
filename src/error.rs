//! Error types for the EDIF reader.
//!
//! This module provides a unified error type [`EdifError`] that covers
//! all error conditions that can occur while tokenizing, parsing and
//! reading EDIF netlists.

use thiserror::Error;

/// Result type alias using [`EdifError`].
pub type Result<T> = std::result::Result<T, EdifError>;

/// Unified error type for all EDIF operations.
#[derive(Error, Debug)]
pub enum EdifError {
    // ============ Recognition Errors ============
    /// Invalid character sequence or unterminated literal
    #[error("Lexer error at line {line}, column {column}: {message}")]
    Lexer {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected token or mismatched parentheses
    #[error("Syntax error at line {line}, column {column}: expected {expected}, found {found}")]
    Syntax {
        line: usize,
        column: usize,
        expected: String,
        found: String,
    },

    /// Keyword argument outside its closed enumeration
    #[error("Semantic error at line {line}, column {column}: {message}")]
    Semantic {
        line: usize,
        column: usize,
        message: String,
    },

    // ============ I/O Errors ============
    /// Error opening or reading a netlist file
    #[error("Failed to read EDIF file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error reading the bound input stream or writing the token transcript
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EdifError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Lexer {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a syntax error
    pub fn syntax(
        line: usize,
        column: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::Syntax {
            line,
            column,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a semantic error
    pub fn semantic(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Semantic {
            line,
            column,
            message: message.into(),
        }
    }

    /// Source position (line, column) for recognition errors.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Lexer { line, column, .. }
            | Self::Syntax { line, column, .. }
            | Self::Semantic { line, column, .. } => Some((*line, *column)),
            Self::FileReadError { .. } | Self::Io(_) => None,
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::Lexer { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, Self::Semantic { .. })
    }
}
