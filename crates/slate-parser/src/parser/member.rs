//! Object, member and import parsing

use super::{expr, recovery, ParseError, Parser};
use crate::ast::{
    FunctionDecl, Identifier, Import, Member, ObjectBinding, ObjectDefinition, ObjectInitializer,
    QualifiedId, ScriptBinding,
};
use crate::token::{Span, Token};

/// Parse an import line: `import Slate.Controls 2.1 as Controls`.
pub fn parse_import(parser: &mut Parser) -> Result<Import, ParseError> {
    let import_span = parser.current_span();
    parser.expect(Token::Import)?;

    let (uri, mut end_span) = match parser.current().clone() {
        Token::String(value) => {
            let span = parser.current_span();
            parser.advance();
            (value, span)
        }
        Token::Identifier(_) => {
            let id = parse_qualified_id(parser)?;
            (id.to_dotted(), id.span)
        }
        _ => {
            return Err(ParseError::invalid_syntax(
                "expected a module name or directory string after 'import'",
                parser.current_span(),
            ));
        }
    };

    let version = if let Token::Number(value) = parser.current() {
        let value = *value;
        end_span = parser.current_span();
        parser.advance();
        Some(value.to_string())
    } else {
        None
    };

    let alias = if parser.check(&Token::As) {
        parser.advance();
        let alias = parse_identifier(parser)?;
        end_span = alias.span;
        Some(alias)
    } else {
        None
    };

    let span = parser.combine_spans(&import_span, &end_span);
    Ok(Import {
        uri,
        version,
        alias,
        span,
    })
}

/// Parse an object declaration: `Type.Name { members }`.
pub fn parse_object_definition(parser: &mut Parser) -> Result<ObjectDefinition, ParseError> {
    let type_name = parse_qualified_id(parser)?;
    let initializer = parse_initializer(parser)?;
    let span = parser.combine_spans(&type_name.span, &initializer.rbrace);

    Ok(ObjectDefinition {
        type_name,
        initializer,
        span,
    })
}

/// Parse a braced member list. Member-level errors are recorded and parsing
/// resumes at the next member boundary.
fn parse_initializer(parser: &mut Parser) -> Result<ObjectInitializer, ParseError> {
    let lbrace = parser.current_span();
    parser.expect(Token::LeftBrace)?;

    let mut members = Vec::new();
    loop {
        if parser.check(&Token::RightBrace) {
            break;
        }
        if parser.at_eof() {
            return Err(ParseError::unclosed_delimiter(
                Token::LeftBrace,
                Token::RightBrace,
                lbrace,
            ));
        }
        // Stray separators between members
        if parser.check(&Token::Semicolon) {
            parser.advance();
            continue;
        }

        match parse_member(parser) {
            Ok(member) => members.push(member),
            Err(err) => {
                parser.errors.push(err);
                recovery::sync_to_member_boundary(parser);
            }
        }
    }

    let rbrace = parser.current_span();
    parser.advance();

    Ok(ObjectInitializer {
        lbrace,
        members,
        rbrace,
    })
}

fn parse_member(parser: &mut Parser) -> Result<Member, ParseError> {
    match parser.current() {
        Token::Function => parse_function(parser).map(Member::Function),
        Token::Identifier(_) => {
            let name = parse_qualified_id(parser)?;

            if parser.check(&Token::LeftBrace) {
                // Child object: the qualified id was its type name
                let initializer = parse_initializer(parser)?;
                let span = parser.combine_spans(&name.span, &initializer.rbrace);
                return Ok(Member::ObjectDefinition(ObjectDefinition {
                    type_name: name,
                    initializer,
                    span,
                }));
            }

            parser.expect(Token::Colon)?;

            if parser.lookahead_object_value() {
                let definition = parse_object_definition(parser)?;
                let span = parser.combine_spans(&name.span, &definition.span);
                Ok(Member::ObjectBinding(ObjectBinding {
                    name,
                    definition,
                    span,
                }))
            } else {
                let statement = expr::parse_binding_statement(parser)?;
                let stmt_span = statement.span();
                let span = parser.combine_spans(&name.span, &stmt_span);
                Ok(Member::ScriptBinding(ScriptBinding {
                    name,
                    statement,
                    span,
                }))
            }
        }
        _ => Err(ParseError::invalid_syntax(
            format!(
                "expected a binding, object or function declaration, found {}",
                parser.current()
            ),
            parser.current_span(),
        )),
    }
}

fn parse_function(parser: &mut Parser) -> Result<FunctionDecl, ParseError> {
    let start = parser.current_span();
    parser.expect(Token::Function)?;
    let name = parse_identifier(parser)?;

    parser.expect(Token::LeftParen)?;
    let mut params = Vec::new();
    if !parser.check(&Token::RightParen) {
        loop {
            params.push(parse_identifier(parser)?);
            if parser.check(&Token::Comma) {
                parser.advance();
            } else {
                break;
            }
        }
    }
    parser.expect(Token::RightParen)?;

    let lbrace = parser.current_span();
    parser.expect(Token::LeftBrace)?;
    let rbrace = skip_balanced_body(parser, lbrace)?;
    let span = parser.combine_spans(&start, &rbrace);

    Ok(FunctionDecl {
        name,
        params,
        lbrace,
        rbrace,
        span,
    })
}

/// Parse a dotted identifier path: `anchors.fill`.
pub fn parse_qualified_id(parser: &mut Parser) -> Result<QualifiedId, ParseError> {
    let first = parse_identifier(parser)?;
    let mut span = first.span;
    let mut segments = vec![first];

    while parser.check(&Token::Dot) {
        parser.advance();
        let segment = parse_identifier(parser)?;
        span = parser.combine_spans(&span, &segment.span);
        segments.push(segment);
    }

    Ok(QualifiedId { segments, span })
}

fn parse_identifier(parser: &mut Parser) -> Result<Identifier, ParseError> {
    let span = parser.current_span();
    match parser.current().clone() {
        Token::Identifier(name) => {
            parser.advance();
            Ok(Identifier { name, span })
        }
        found => Err(ParseError::unexpected_token(
            vec![Token::Identifier(String::new())],
            found,
            span,
        )),
    }
}

/// Skip the already-entered `{ ... }` body, balancing nested braces.
/// Returns the span of the matching closing brace.
pub(super) fn skip_balanced_body(parser: &mut Parser, lbrace: Span) -> Result<Span, ParseError> {
    let mut depth = 1usize;
    loop {
        if parser.at_eof() {
            return Err(ParseError::unclosed_delimiter(
                Token::LeftBrace,
                Token::RightBrace,
                lbrace,
            ));
        }
        let span = parser.current_span();
        match parser.advance() {
            Token::LeftBrace => depth += 1,
            Token::RightBrace => {
                depth -= 1;
                if depth == 0 {
                    return Ok(span);
                }
            }
            _ => {}
        }
    }
}
