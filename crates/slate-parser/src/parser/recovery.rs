//! Error recovery - resynchronize the token stream after a parse error
//!
//! Recovery is coarse on purpose: after a bad member we skip to the next
//! plausible member boundary, after a bad import we skip the rest of the
//! line. Skipped tokens produce no further errors.

use super::Parser;
use crate::token::Token;

/// Skip tokens until the next member boundary inside an object body.
///
/// Stops after a top-level `;`, or before a top-level `}` (left for the
/// enclosing initializer to consume), a `function` keyword, or EOF. Brace
/// pairs opened while skipping are balanced so a malformed member with a
/// nested body does not desynchronize the enclosing object.
pub fn sync_to_member_boundary(parser: &mut Parser) {
    let mut depth = 0usize;

    while !parser.at_eof() {
        match parser.current() {
            Token::Semicolon if depth == 0 => {
                parser.advance();
                return;
            }
            Token::RightBrace => {
                if depth == 0 {
                    return;
                }
                depth -= 1;
                parser.advance();
            }
            Token::Function if depth == 0 => return,
            Token::LeftBrace => {
                depth += 1;
                parser.advance();
            }
            _ => {
                parser.advance();
            }
        }
    }
}

/// Skip the remaining tokens of the current source line.
pub fn sync_to_line_start(parser: &mut Parser) {
    let line = parser.current_span().line;
    while !parser.at_eof() && parser.current_span().line == line {
        parser.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_stops_before_closing_brace() {
        let mut parser = Parser::new("bad tokens }").unwrap();
        sync_to_member_boundary(&mut parser);
        assert!(matches!(parser.current(), Token::RightBrace));
    }

    #[test]
    fn test_sync_consumes_semicolon() {
        let mut parser = Parser::new("bad tokens ; width").unwrap();
        sync_to_member_boundary(&mut parser);
        assert!(matches!(parser.current(), Token::Identifier(_)));
    }

    #[test]
    fn test_sync_balances_nested_braces() {
        let mut parser = Parser::new("bad { inner { } more } }").unwrap();
        sync_to_member_boundary(&mut parser);
        assert!(matches!(parser.current(), Token::RightBrace));
    }

    #[test]
    fn test_sync_stops_at_function() {
        let mut parser = Parser::new("bad tokens function tick() { }").unwrap();
        sync_to_member_boundary(&mut parser);
        assert!(matches!(parser.current(), Token::Function));
    }

    #[test]
    fn test_sync_to_line_start_skips_rest_of_line() {
        let mut parser = Parser::new("import junk junk\nItem { }").unwrap();
        sync_to_line_start(&mut parser);
        assert!(matches!(parser.current(), Token::Identifier(_)));
    }
}
