//! Slate Language Parser
//!
//! Lexer, AST and parser for the Slate declarative UI language.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Document, ObjectRef};
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, ParseErrorKind, Parser};
pub use token::{Span, Token};
