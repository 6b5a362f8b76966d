//! Binding value parsing
//!
//! The right-hand side of a script binding is captured as a raw token run
//! terminated by `;`, by the enclosing `}`, or by a newline at
//! which the expression cannot continue. Runs matching a literal, bare
//! identifier or unary-signed shape become structured expressions; anything
//! else stays an [`Expression::Opaque`] over the run's span.

use super::{member, ParseError, Parser};
use crate::ast::{BindingStatement, Expression, ExpressionStatement};
use crate::token::{Span, Token};

/// Parse the statement after a binding's colon.
pub fn parse_binding_statement(parser: &mut Parser) -> Result<BindingStatement, ParseError> {
    if parser.check(&Token::LeftBrace) {
        // Script block, kept verbatim including the braces
        let lbrace = parser.current_span();
        parser.advance();
        let rbrace = member::skip_balanced_body(parser, lbrace)?;
        let span = parser.combine_spans(&lbrace, &rbrace);
        return Ok(BindingStatement::Block { span });
    }

    let start_pos = parser.pos;
    let start_span = parser.current_span();
    let mut depth = 0usize;
    let mut semicolon = None;
    let mut prev: Option<(Token, Span)> = None;

    loop {
        let tok = parser.current().clone();
        let span = parser.current_span();

        if matches!(tok, Token::Eof) {
            break;
        }
        if depth == 0 {
            match tok {
                Token::Semicolon => {
                    semicolon = Some(span);
                    parser.advance();
                    break;
                }
                Token::RightBrace => break,
                _ => {}
            }
            // Newline termination: stop when the previous token could end an
            // expression and the next line's token cannot continue one.
            if let Some((ref prev_tok, prev_span)) = prev {
                if span.line > prev_span.line
                    && ends_expression(prev_tok)
                    && !continues_expression(&tok)
                {
                    break;
                }
            }
        }

        match tok {
            Token::LeftParen | Token::LeftBracket | Token::LeftBrace => depth += 1,
            Token::RightParen | Token::RightBracket | Token::RightBrace => {
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }

        prev = Some((tok, span));
        parser.advance();
    }

    let end_pos = parser.pos - usize::from(semicolon.is_some());
    if end_pos == start_pos {
        return Err(ParseError::missing_binding_value(start_span));
    }

    let run = &parser.tokens[start_pos..end_pos];
    let expression = expression_from_run(run);
    let last_span = semicolon.unwrap_or(run[run.len() - 1].1);
    let span = parser.combine_spans(&start_span, &last_span);

    Ok(BindingStatement::Expression(ExpressionStatement {
        expression,
        semicolon,
        span,
    }))
}

/// Build a structured expression from a captured token run where possible.
fn expression_from_run(run: &[(Token, Span)]) -> Expression {
    let full = run_span(run);
    match run {
        [(Token::Number(value), span)] => Expression::Number {
            value: *value,
            span: *span,
        },
        [(Token::String(value), span)] => Expression::String {
            value: value.clone(),
            span: *span,
        },
        [(Token::True, span)] => Expression::Bool {
            value: true,
            span: *span,
        },
        [(Token::False, span)] => Expression::Bool {
            value: false,
            span: *span,
        },
        [(Token::Identifier(name), span)] => Expression::Identifier {
            name: name.clone(),
            span: *span,
        },
        [(Token::Plus, _), rest @ ..] if !rest.is_empty() => match expression_from_run(rest) {
            Expression::Opaque { .. } => Expression::Opaque { span: full },
            inner => Expression::UnaryPlus {
                expression: Box::new(inner),
                span: full,
            },
        },
        [(Token::Minus, _), rest @ ..] if !rest.is_empty() => match expression_from_run(rest) {
            Expression::Opaque { .. } => Expression::Opaque { span: full },
            inner => Expression::UnaryMinus {
                expression: Box::new(inner),
                span: full,
            },
        },
        _ => Expression::Opaque { span: full },
    }
}

fn run_span(run: &[(Token, Span)]) -> Span {
    run[0].1.merge(&run[run.len() - 1].1)
}

/// Tokens that can end an expression before a line break.
fn ends_expression(tok: &Token) -> bool {
    matches!(
        tok,
        Token::Identifier(_)
            | Token::Number(_)
            | Token::String(_)
            | Token::True
            | Token::False
            | Token::RightParen
            | Token::RightBracket
            | Token::RightBrace
            | Token::PlusPlus
            | Token::MinusMinus
    )
}

/// Tokens at the start of a line that continue the previous expression.
fn continues_expression(tok: &Token) -> bool {
    matches!(
        tok,
        Token::Dot
            | Token::QuestionDot
            | Token::Plus
            | Token::Minus
            | Token::Star
            | Token::Slash
            | Token::Percent
            | Token::StarStar
            | Token::EqualEqualEqual
            | Token::BangEqualEqual
            | Token::EqualEqual
            | Token::BangEqual
            | Token::LessEqual
            | Token::GreaterEqual
            | Token::Less
            | Token::Greater
            | Token::AmpAmp
            | Token::PipePipe
            | Token::Amp
            | Token::Pipe
            | Token::Caret
            | Token::LessLess
            | Token::GreaterGreater
            | Token::QuestionQuestion
            | Token::Question
            | Token::Colon
            | Token::Comma
            | Token::Arrow
            | Token::Equal
            | Token::PlusEqual
            | Token::MinusEqual
            | Token::StarEqual
            | Token::SlashEqual
            | Token::PercentEqual
            | Token::LeftParen
            | Token::LeftBracket
    )
}
