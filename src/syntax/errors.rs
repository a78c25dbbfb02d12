//! Error types for the syntax layer

use std::fmt;
use thiserror::Error;

/// A 1-based line/column location in template source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Compute the position of a byte offset inside `source`
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let column = match before.rfind('\n') {
            Some(newline) => before[newline + 1..].chars().count() + 1,
            None => before.chars().count() + 1,
        };
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors raised while parsing template source into a syntax tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Failed to load grammar: {0}")]
    Grammar(String),

    #[error("Parser gave up before producing a tree")]
    Aborted,

    #[error("Unexpected '{found}' at {position}")]
    Unexpected { found: String, position: Position },

    #[error("Missing '{expected}' at {position}")]
    Missing {
        expected: String,
        position: Position,
    },

    #[error("Unbalanced {what} at {position}")]
    Unbalanced {
        what: &'static str,
        position: Position,
    },

    #[error("Mismatched closing tag </{found}> at {position}, expected </{expected}>")]
    MismatchedTag {
        found: String,
        expected: String,
        position: Position,
    },

    #[error("Unexpected end of input")]
    UnexpectedEof,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_offset() {
        let source = "ab\ncd\nef";
        assert_eq!(
            Position::from_offset(source, 0),
            Position { line: 1, column: 1 }
        );
        assert_eq!(
            Position::from_offset(source, 4),
            Position { line: 2, column: 2 }
        );
        assert_eq!(
            Position::from_offset(source, 100),
            Position { line: 3, column: 3 }
        );
        assert_eq!(Position { line: 2, column: 7 }.to_string(), "2:7");
    }
}
