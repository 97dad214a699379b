//! Error types for FBI parsing.

use std::fmt;
use thiserror::Error;

/// Result type for FBI parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// A 1-based line/column position in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Create a location from 1-based line and column numbers.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Error type for FBI parsing.
///
/// Every variant except [`ParseError::Incomplete`] carries the offending
/// character and its position; `Incomplete` is detected only after the
/// input is exhausted, so there is no single character to blame.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A character appeared where the active state has no rule for it.
    #[error("unexpected character \"{}\" at {at}", sanitize_char(.ch))]
    UnexpectedCharacter { ch: char, at: Location },

    /// `}` encountered with no open section to close.
    #[error("unexpected character \"{}\" at {at}: there was no \"{{\" to close", sanitize_char(.ch))]
    UnmatchedClose { ch: char, at: Location },

    /// Whitespace inside a header name not followed by more whitespace or `]`.
    #[error("unexpected character \"{}\" at {at}: there can't be whitespace inside a header's name", sanitize_char(.ch))]
    WhitespaceInHeader { ch: char, at: Location },

    /// A structural symbol inside a header name.
    #[error("unexpected character \"{}\" at {at}: there can't be symbols inside a header's name", sanitize_char(.ch))]
    SymbolInHeader { ch: char, at: Location },

    /// Whitespace inside a field name not followed by more whitespace or `=`.
    #[error("unexpected character \"{}\" at {at}: there can't be whitespace inside a field's name", sanitize_char(.ch))]
    WhitespaceInFieldName { ch: char, at: Location },

    /// A structural symbol other than `=` inside a field name.
    #[error("unexpected character \"{}\" at {at}: invalid field definition", sanitize_char(.ch))]
    InvalidFieldDefinition { ch: char, at: Location },

    /// Input ended with a header, field, or section still open.
    #[error("incomplete document, maybe you're missing a \"]\" or \"}}\"")]
    Incomplete,
}

impl ParseError {
    /// The character that triggered the error, if any.
    pub fn offending_char(&self) -> Option<char> {
        match self {
            ParseError::UnexpectedCharacter { ch, .. }
            | ParseError::UnmatchedClose { ch, .. }
            | ParseError::WhitespaceInHeader { ch, .. }
            | ParseError::SymbolInHeader { ch, .. }
            | ParseError::WhitespaceInFieldName { ch, .. }
            | ParseError::InvalidFieldDefinition { ch, .. } => Some(*ch),
            ParseError::Incomplete => None,
        }
    }

    /// Where the error occurred, if known.
    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::UnexpectedCharacter { at, .. }
            | ParseError::UnmatchedClose { at, .. }
            | ParseError::WhitespaceInHeader { at, .. }
            | ParseError::SymbolInHeader { at, .. }
            | ParseError::WhitespaceInFieldName { at, .. }
            | ParseError::InvalidFieldDefinition { at, .. } => Some(*at),
            ParseError::Incomplete => None,
        }
    }
}

/// Render control characters as visible placeholder glyphs for display.
fn sanitize_char(ch: &char) -> String {
    match ch {
        '\r' => "\u{240D}".to_string(),
        '\n' => "\u{2424}".to_string(),
        '\0' => "\u{2400}".to_string(),
        other => other.to_string(),
    }
}
