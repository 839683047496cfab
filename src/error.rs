//! Lexical error types.
//!
//! Every error is fatal to the current pass and carries the byte offset
//! plus 1-based line/column where it occurred, so callers can produce a
//! source diagnostic. Rule fall-through during dispatch is not an error;
//! only the final unrecoverable failure surfaces here.

use thiserror::Error;

/// A fatal tokenization failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A quoted literal or block comment was never closed.
    #[error("unterminated {construct} at line {line}, column {column}")]
    UnterminatedLiteral {
        /// What was left open: `"quoted literal"` or `"block comment"`.
        construct: &'static str,
        /// Byte offset of the opening delimiter.
        offset: usize,
        /// Line of the opening delimiter (1-based).
        line: u32,
        /// Column of the opening delimiter (1-based).
        column: u32,
    },

    /// A backslash escape inside a quoted literal has a shape no escape
    /// rule recognizes.
    #[error("malformed escape sequence ({reason}) at line {line}, column {column}")]
    MalformedEscape {
        /// What was wrong with the escape.
        reason: &'static str,
        /// Byte offset of the backslash.
        offset: usize,
        /// Line of the backslash (1-based).
        line: u32,
        /// Column of the backslash (1-based).
        column: u32,
    },

    /// A character that is not whitespace and satisfies no token rule.
    #[error("unrecognized character {ch:?} at line {line}, column {column}")]
    UnrecognizedCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
        /// Line of the character (1-based).
        line: u32,
        /// Column of the character (1-based).
        column: u32,
    },
}

impl LexError {
    /// Byte offset at which the failure occurred.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnterminatedLiteral { offset, .. }
            | LexError::MalformedEscape { offset, .. }
            | LexError::UnrecognizedCharacter { offset, .. } => *offset,
        }
    }

    /// Line of the failure (1-based).
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnterminatedLiteral { line, .. }
            | LexError::MalformedEscape { line, .. }
            | LexError::UnrecognizedCharacter { line, .. } => *line,
        }
    }

    /// Column of the failure (1-based).
    pub fn column(&self) -> u32 {
        match self {
            LexError::UnterminatedLiteral { column, .. }
            | LexError::MalformedEscape { column, .. }
            | LexError::UnrecognizedCharacter { column, .. } => *column,
        }
    }
}
