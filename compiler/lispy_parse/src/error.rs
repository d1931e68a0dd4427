//! Parse error types.
//!
//! Every variant carries the [`Span`] of the offending token so the REPL can
//! point at it. `Display` (via `thiserror`) yields the bare message;
//! [`ParseError::render`] adds the `name:line:col: error:` prefix.

use thiserror::Error;

use crate::Span;

/// Failure to turn an input line into a parse tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character no token can start with.
    #[error("unexpected character '{found}'")]
    UnexpectedCharacter { found: char, span: Span },

    /// A closing delimiter with no group open.
    #[error("unexpected '{found}'")]
    UnexpectedClose { found: char, span: Span },

    /// A group closed with the wrong delimiter, e.g. `(1 2}`.
    #[error("expected '{expected}' to close '{opened}', found '{found}'")]
    MismatchedClose {
        opened: char,
        expected: char,
        found: char,
        open: Span,
        span: Span,
    },

    /// End of input inside a group.
    #[error("expected '{expected}' before end of input")]
    Unclosed {
        expected: char,
        open: Span,
        span: Span,
    },
}

impl ParseError {
    /// Primary location of the error.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedCharacter { span, .. }
            | ParseError::UnexpectedClose { span, .. }
            | ParseError::MismatchedClose { span, .. }
            | ParseError::Unclosed { span, .. } => *span,
        }
    }

    /// Where the unterminated group was opened, if the error involves one.
    pub fn opened_at(&self) -> Option<Span> {
        match self {
            ParseError::MismatchedClose { open, .. } | ParseError::Unclosed { open, .. } => {
                Some(*open)
            }
            ParseError::UnexpectedCharacter { .. } | ParseError::UnexpectedClose { .. } => None,
        }
    }

    /// One-line rendering: `<stdin>:1:7: error: unexpected ')'`.
    pub fn render(&self, source_name: &str, input: &str) -> String {
        let (line, column) = self.span().line_col(input);
        format!("{source_name}:{line}:{column}: error: {self}")
    }
}
