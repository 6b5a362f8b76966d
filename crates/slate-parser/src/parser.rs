//! Parser for Slate documents.
//!
//! A recursive descent parser over the pre-tokenized stream produced by the
//! lexer. Binding values are terminated by a semicolon, by the enclosing
//! `}`, or by a newline where the expression cannot continue.

pub mod error;
pub mod expr;
pub mod member;
pub mod recovery;

use crate::ast::{Import, ObjectDefinition};
use crate::lexer::Lexer;
use crate::token::{Span, Token};

pub use error::{ParseError, ParseErrorKind};

/// Parser state over a pre-tokenized document.
pub struct Parser {
    /// Pre-tokenized input, always ending with [`Token::Eof`]
    tokens: Vec<(Token, Span)>,

    /// Current position in the token stream
    pos: usize,

    /// Accumulated parse errors (allows continuing after errors)
    errors: Vec<ParseError>,
}

impl Parser {
    /// Create a new parser from source code.
    pub fn new(source: &str) -> Result<Self, Vec<crate::lexer::LexError>> {
        let tokens = Lexer::new(source).tokenize()?;

        Ok(Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        })
    }

    /// Parse a whole document: imports followed by a single root object.
    ///
    /// Returns the imports and root on success, or all accumulated errors.
    pub fn parse(mut self) -> Result<(Vec<Import>, ObjectDefinition), Vec<ParseError>> {
        let mut imports = Vec::new();

        while self.check(&Token::Import) {
            match member::parse_import(&mut self) {
                Ok(import) => imports.push(import),
                Err(err) => {
                    self.errors.push(err);
                    recovery::sync_to_line_start(&mut self);
                }
            }
        }

        let root = match member::parse_object_definition(&mut self) {
            Ok(root) => root,
            Err(err) => {
                self.errors.push(err);
                return Err(self.errors);
            }
        };

        if !self.at_eof() {
            let err = self.unexpected_token(&[Token::Eof]);
            self.errors.push(err);
        }

        if !self.errors.is_empty() {
            return Err(self.errors);
        }

        Ok((imports, root))
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos].0
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens[self.pos].1
    }

    /// Advance to the next token, returning the previous current token.
    pub fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].0.clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub fn check(&self, expected: &Token) -> bool {
        std::mem::discriminant(self.current()) == std::mem::discriminant(expected)
    }

    /// Check if we've reached EOF.
    #[inline]
    pub fn at_eof(&self) -> bool {
        matches!(self.current(), Token::Eof)
    }

    /// Consume the current token if it matches the expected kind.
    pub fn expect(&mut self, expected: Token) -> Result<Token, ParseError> {
        if self.check(&expected) {
            Ok(self.advance())
        } else {
            Err(self.unexpected_token(&[expected]))
        }
    }

    /// Whether the tokens from the current position form `Identifier
    /// ('.' Identifier)* '{'`, i.e. an object value rather than a script
    /// expression. Used after the colon of a binding.
    fn lookahead_object_value(&self) -> bool {
        let mut i = self.pos;
        if !matches!(self.tokens[i].0, Token::Identifier(_)) {
            return false;
        }
        while matches!(self.tokens.get(i + 1).map(|t| &t.0), Some(Token::Dot))
            && matches!(
                self.tokens.get(i + 2).map(|t| &t.0),
                Some(Token::Identifier(_))
            )
        {
            i += 2;
        }
        matches!(self.tokens.get(i + 1).map(|t| &t.0), Some(Token::LeftBrace))
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Create an "unexpected token" error at the current position.
    fn unexpected_token(&self, expected: &[Token]) -> ParseError {
        let span = self.current_span();
        if self.at_eof() {
            ParseError::unexpected_eof(expected.to_vec(), span)
        } else {
            ParseError::unexpected_token(expected.to_vec(), self.current().clone(), span)
        }
    }

    // ========================================================================
    // Utilities
    // ========================================================================

    /// Combine two spans into a single span.
    pub fn combine_spans(&self, start: &Span, end: &Span) -> Span {
        Span {
            start: start.start,
            end: end.end,
            line: start.line,
            column: start.column,
        }
    }
}
