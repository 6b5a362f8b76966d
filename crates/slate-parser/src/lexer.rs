//! Lexer for the Slate UI language.
//!
//! Tokenization is done with logos; the raw logos token enum is converted to
//! the public [`Token`] enum with line/column tracking so every token carries
//! a full [`Span`].

use crate::token::{Span, Token};
use logos::Logos;
use thiserror::Error;

/// Logos-backed token enum used internally for tokenization.
#[derive(Logos, Debug, Clone, PartialEq)]
enum LogosToken {
    // Whitespace (skip)
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Whitespace,

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"/\*", lex_block_comment)]
    BlockComment,

    // Keywords (must come before identifiers)
    #[token("import")]
    Import,

    #[token("function")]
    Function,

    #[token("as")]
    As,

    #[token("true")]
    True,

    #[token("false")]
    False,

    // Identifiers (must come after keywords)
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Numbers
    #[regex(r"0x[0-9a-fA-F]+", parse_hex)]
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),

    // Strings (either quote style; escapes decoded during conversion)
    #[regex(r#""([^"\\]|\\.)*""#, parse_string)]
    #[regex(r"'([^'\\]|\\.)*'", parse_string)]
    String(String),

    // Operators (3-char before 2-char, 2-char before 1-char)
    #[token("===")]
    EqualEqualEqual,

    #[token("!==")]
    BangEqualEqual,

    #[token("==")]
    EqualEqual,

    #[token("!=")]
    BangEqual,

    #[token("<=")]
    LessEqual,

    #[token(">=")]
    GreaterEqual,

    #[token("&&")]
    AmpAmp,

    #[token("||")]
    PipePipe,

    #[token("++")]
    PlusPlus,

    #[token("--")]
    MinusMinus,

    #[token("**")]
    StarStar,

    #[token("<<")]
    LessLess,

    #[token(">>")]
    GreaterGreater,

    #[token("??")]
    QuestionQuestion,

    #[token("?.")]
    QuestionDot,

    #[token("=>")]
    Arrow,

    #[token("+=")]
    PlusEqual,

    #[token("-=")]
    MinusEqual,

    #[token("*=")]
    StarEqual,

    #[token("/=")]
    SlashEqual,

    #[token("%=")]
    PercentEqual,

    // Single-character tokens
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("!")]
    Bang,

    #[token("~")]
    Tilde,

    #[token("<")]
    Less,

    #[token(">")]
    Greater,

    #[token("&")]
    Amp,

    #[token("|")]
    Pipe,

    #[token("^")]
    Caret,

    #[token("=")]
    Equal,

    #[token("?")]
    Question,

    #[token(".")]
    Dot,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[token("{")]
    LeftBrace,

    #[token("}")]
    RightBrace,

    #[token("[")]
    LeftBracket,

    #[token("]")]
    RightBracket,
}

// Helper parsing functions

fn lex_block_comment(lex: &mut logos::Lexer<LogosToken>) -> logos::Skip {
    // We've already consumed "/*", now find "*/"
    let remainder = lex.remainder();

    if let Some(end) = remainder.find("*/") {
        lex.bump(end + 2);
    } else {
        // Unterminated comment - consume to end
        lex.bump(remainder.len());
    }

    logos::Skip
}

fn parse_hex(lex: &mut logos::Lexer<LogosToken>) -> Option<f64> {
    i64::from_str_radix(&lex.slice()[2..], 16).ok().map(|n| n as f64)
}

fn parse_number(lex: &mut logos::Lexer<LogosToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_string(lex: &mut logos::Lexer<LogosToken>) -> Option<String> {
    let s = lex.slice();
    let inner = &s[1..s.len() - 1]; // Remove quotes
    Some(unescape_string(inner))
}

fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('\'') => result.push('\''),
                Some('0') => result.push('\0'),
                Some(c) => result.push(c),
                None => break,
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Main lexer structure.
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<(Token, Span)>,
    errors: Vec<LexError>,
}

/// Lexer error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unexpected character '{char}' at {}:{}", span.line, span.column)]
    UnexpectedCharacter { char: char, span: Span },

    #[error("unterminated string literal at {}:{}", span.line, span.column)]
    UnterminatedString { span: Span },

    #[error("invalid number literal '{text}' at {}:{}", span.line, span.column)]
    InvalidNumber { text: String, span: Span },
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire input, ending with an [`Token::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<(Token, Span)>, Vec<LexError>> {
        let mut logos_lexer = LogosToken::lexer(self.source);
        let mut line = 1u32;
        let mut column = 1u32;
        let mut last_end = 0;

        while let Some(token_result) = logos_lexer.next() {
            let range = logos_lexer.span();

            // Update line and column over the skipped gap
            for c in self.source[last_end..range.start].chars() {
                if c == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }

            let span = Span::new(range.start, range.end, line, column);

            match token_result {
                Ok(logos_token) => {
                    let token = convert_token(logos_token);
                    self.tokens.push((token, span));
                }
                Err(_) => {
                    let char = self.source[range.start..].chars().next().unwrap_or('\0');
                    if char == '"' || char == '\'' {
                        self.errors.push(LexError::UnterminatedString { span });
                    } else if char.is_ascii_digit() {
                        // A number regex matched but its callback rejected the
                        // value, e.g. a hex literal too large for i64
                        self.errors.push(LexError::InvalidNumber {
                            text: self.source[range.start..range.end].to_string(),
                            span,
                        });
                    } else {
                        self.errors.push(LexError::UnexpectedCharacter { char, span });
                    }
                }
            }

            // Update position over this token
            for c in self.source[range.start..range.end].chars() {
                if c == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }

            last_end = range.end;
        }

        let eof_span = Span::new(self.source.len(), self.source.len(), line, column);
        self.tokens.push((Token::Eof, eof_span));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

fn convert_token(logos_token: LogosToken) -> Token {
    match logos_token {
        LogosToken::Import => Token::Import,
        LogosToken::Function => Token::Function,
        LogosToken::As => Token::As,
        LogosToken::True => Token::True,
        LogosToken::False => Token::False,
        LogosToken::Identifier(name) => Token::Identifier(name),
        LogosToken::Number(value) => Token::Number(value),
        LogosToken::String(value) => Token::String(value),
        LogosToken::EqualEqualEqual => Token::EqualEqualEqual,
        LogosToken::BangEqualEqual => Token::BangEqualEqual,
        LogosToken::EqualEqual => Token::EqualEqual,
        LogosToken::BangEqual => Token::BangEqual,
        LogosToken::LessEqual => Token::LessEqual,
        LogosToken::GreaterEqual => Token::GreaterEqual,
        LogosToken::AmpAmp => Token::AmpAmp,
        LogosToken::PipePipe => Token::PipePipe,
        LogosToken::PlusPlus => Token::PlusPlus,
        LogosToken::MinusMinus => Token::MinusMinus,
        LogosToken::StarStar => Token::StarStar,
        LogosToken::LessLess => Token::LessLess,
        LogosToken::GreaterGreater => Token::GreaterGreater,
        LogosToken::QuestionQuestion => Token::QuestionQuestion,
        LogosToken::QuestionDot => Token::QuestionDot,
        LogosToken::Arrow => Token::Arrow,
        LogosToken::PlusEqual => Token::PlusEqual,
        LogosToken::MinusEqual => Token::MinusEqual,
        LogosToken::StarEqual => Token::StarEqual,
        LogosToken::SlashEqual => Token::SlashEqual,
        LogosToken::PercentEqual => Token::PercentEqual,
        LogosToken::Plus => Token::Plus,
        LogosToken::Minus => Token::Minus,
        LogosToken::Star => Token::Star,
        LogosToken::Slash => Token::Slash,
        LogosToken::Percent => Token::Percent,
        LogosToken::Bang => Token::Bang,
        LogosToken::Tilde => Token::Tilde,
        LogosToken::Less => Token::Less,
        LogosToken::Greater => Token::Greater,
        LogosToken::Amp => Token::Amp,
        LogosToken::Pipe => Token::Pipe,
        LogosToken::Caret => Token::Caret,
        LogosToken::Equal => Token::Equal,
        LogosToken::Question => Token::Question,
        LogosToken::Dot => Token::Dot,
        LogosToken::Colon => Token::Colon,
        LogosToken::Semicolon => Token::Semicolon,
        LogosToken::Comma => Token::Comma,
        LogosToken::LeftParen => Token::LeftParen,
        LogosToken::RightParen => Token::RightParen,
        LogosToken::LeftBrace => Token::LeftBrace,
        LogosToken::RightBrace => Token::RightBrace,
        LogosToken::LeftBracket => Token::LeftBracket,
        LogosToken::RightBracket => Token::RightBracket,
        LogosToken::Whitespace | LogosToken::LineComment | LogosToken::BlockComment => {
            unreachable!("skipped by logos")
        }
    }
}
