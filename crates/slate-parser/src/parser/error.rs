//! Parse error types and error reporting

use crate::lexer::LexError;
use crate::token::{Span, Token};
use std::fmt;

/// A parse error with location and contextual information.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// The kind of error that occurred
    pub kind: ParseErrorKind,

    /// Source location of the error
    pub span: Span,

    /// Human-readable error message
    pub message: String,

    /// Optional suggestion for fixing the error
    pub suggestion: Option<String>,
}

/// The kind of parse error.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Unexpected token found
    UnexpectedToken {
        expected: Vec<Token>,
        found: Token,
    },

    /// Unexpected end of file
    UnexpectedEof {
        expected: Vec<Token>,
    },

    /// Invalid syntax
    InvalidSyntax {
        reason: String,
    },

    /// Missing closing delimiter
    UnclosedDelimiter {
        open: Token,
        expected_close: Token,
    },

    /// A binding with no value after the colon
    MissingBindingValue,

    /// A tokenization failure surfaced as a parse error
    Lex {
        message: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at {}:{}: {}",
            self.span.line, self.span.column, self.message
        )?;

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// Create an "unexpected token" error.
    pub fn unexpected_token(expected: Vec<Token>, found: Token, span: Span) -> Self {
        let message = if expected.len() == 1 {
            format!("Expected {}, found {}", expected[0], found)
        } else {
            let names: Vec<String> = expected.iter().map(|t| t.to_string()).collect();
            format!("Expected one of {}, found {}", names.join(", "), found)
        };

        Self {
            kind: ParseErrorKind::UnexpectedToken { expected, found },
            span,
            message,
            suggestion: None,
        }
    }

    /// Create an "unexpected EOF" error.
    pub fn unexpected_eof(expected: Vec<Token>, span: Span) -> Self {
        let message = if expected.len() == 1 {
            format!("Unexpected end of file, expected {}", expected[0])
        } else {
            let names: Vec<String> = expected.iter().map(|t| t.to_string()).collect();
            format!("Unexpected end of file, expected one of {}", names.join(", "))
        };

        Self {
            kind: ParseErrorKind::UnexpectedEof { expected },
            span,
            message,
            suggestion: None,
        }
    }

    /// Create an "invalid syntax" error.
    pub fn invalid_syntax(reason: impl Into<String>, span: Span) -> Self {
        let reason = reason.into();
        Self {
            kind: ParseErrorKind::InvalidSyntax {
                reason: reason.clone(),
            },
            span,
            message: format!("Invalid syntax: {}", reason),
            suggestion: None,
        }
    }

    /// Create an "unclosed delimiter" error.
    pub fn unclosed_delimiter(open: Token, expected_close: Token, span: Span) -> Self {
        let message = format!("Unclosed {}, expected {}", open, expected_close);
        Self {
            kind: ParseErrorKind::UnclosedDelimiter {
                open,
                expected_close,
            },
            span,
            message,
            suggestion: None,
        }
    }

    /// Create a "missing binding value" error.
    pub fn missing_binding_value(span: Span) -> Self {
        Self {
            kind: ParseErrorKind::MissingBindingValue,
            span,
            message: "Binding has no value after ':'".to_string(),
            suggestion: Some("Add an expression or object after the colon".to_string()),
        }
    }

    /// Wrap a lexer error as a parse error.
    pub fn from_lex_error(err: LexError) -> Self {
        let span = match &err {
            LexError::UnexpectedCharacter { span, .. } => *span,
            LexError::UnterminatedString { span } => *span,
            LexError::InvalidNumber { span, .. } => *span,
        };
        let message = err.to_string();
        Self {
            kind: ParseErrorKind::Lex {
                message: message.clone(),
            },
            span,
            message,
            suggestion: None,
        }
    }
}
