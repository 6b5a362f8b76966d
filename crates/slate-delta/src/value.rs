//! Literal classification and value coercion for property changes.
//!
//! A binding value is a *literal* if it is a number, string or boolean,
//! optionally behind unary `+`/`-`. Literal values are cleaned (terminator
//! stripped, quotes stripped, escapes decoded) and coerced to a typed
//! [`LiveValue`]; everything else travels as expression text.

use slate_live::LiveValue;
use slate_parser::ast::{BindingStatement, Expression};

/// Whether the binding's value is a literal (number/string/bool, optionally
/// unary-signed). Block statements are never literal.
pub fn is_literal_statement(statement: &BindingStatement) -> bool {
    match statement {
        BindingStatement::Expression(stmt) => is_literal_expression(&stmt.expression),
        BindingStatement::Block { .. } => false,
    }
}

fn is_literal_expression(expr: &Expression) -> bool {
    match expr {
        Expression::Number { .. } | Expression::String { .. } | Expression::Bool { .. } => true,
        Expression::UnaryPlus { expression, .. } | Expression::UnaryMinus { expression, .. } => {
            is_literal_expression(expression)
        }
        Expression::Identifier { .. } | Expression::Opaque { .. } => false,
    }
}

/// Trim `text` and drop one trailing statement terminator if the statement
/// actually carries one.
pub fn strip_terminator(text: &str, statement: &BindingStatement) -> String {
    let mut trimmed = text.trim().to_string();

    if let BindingStatement::Expression(stmt) = statement {
        if stmt.semicolon.is_some() && trimmed.ends_with(';') {
            trimmed.pop();
        }
    }

    trimmed
}

/// Strip a single layer of matching surrounding quotes.
pub fn strip_quotes(text: &str) -> &str {
    if text.len() >= 2
        && ((text.starts_with('"') && text.ends_with('"'))
            || (text.starts_with('\'') && text.ends_with('\'')))
    {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Decode the escape sequences `\\`, `\"`, `\t`, `\r`, `\n`. Unknown
/// escapes are kept verbatim.
pub fn de_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('t') => result.push('\t'),
                Some('r') => result.push('\r'),
                Some('n') => result.push('\n'),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Fully clean a literal's verbatim text: trim, strip terminator, strip
/// quotes, decode escapes.
pub fn clean_expression(text: &str, statement: &BindingStatement) -> String {
    let stripped = strip_terminator(text, statement);
    de_escape(strip_quotes(&stripped))
}

/// Coerce the verbatim text of a binding statement to a typed value.
///
/// Numeric kinds (including unary-signed) become numbers, string literals
/// strings, boolean literals booleans. Non-literal statements fall back to
/// the terminator-stripped expression text.
pub fn cast_to_literal(text: &str, statement: &BindingStatement) -> LiveValue {
    let expr = match statement {
        BindingStatement::Expression(stmt) => &stmt.expression,
        BindingStatement::Block { .. } => {
            return LiveValue::Expression(strip_terminator(text, statement));
        }
    };

    let cleaned = clean_expression(text, statement);

    match expr {
        Expression::Number { .. } | Expression::UnaryPlus { .. } | Expression::UnaryMinus { .. } => {
            LiveValue::Number(cleaned.parse().unwrap_or(0.0))
        }
        Expression::String { .. } => LiveValue::String(cleaned),
        Expression::Bool { .. } => LiveValue::Bool(cleaned == "true"),
        Expression::Identifier { .. } | Expression::Opaque { .. } => {
            LiveValue::Expression(strip_terminator(text, statement))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_parser::ast::{Document, Member, ScriptBinding};

    fn first_binding(doc: &Document) -> &ScriptBinding {
        match &doc.root.initializer.members[0] {
            Member::ScriptBinding(binding) => binding,
            other => panic!("expected script binding, got {:?}", other),
        }
    }

    fn classify(source: &str) -> (bool, LiveValue) {
        let doc = Document::parse(source, "test.slate").unwrap();
        let binding = first_binding(&doc);
        let text = doc.text(binding.statement.span());
        (
            is_literal_statement(&binding.statement),
            cast_to_literal(text, &binding.statement),
        )
    }

    #[test]
    fn numeric_literal_coerces_to_number() {
        let (literal, value) = classify("Item { width: 42 }");
        assert!(literal);
        assert_eq!(value, LiveValue::Number(42.0));
    }

    #[test]
    fn signed_literal_keeps_sign() {
        let (literal, value) = classify("Item { x: -3 }");
        assert!(literal);
        assert_eq!(value, LiveValue::Number(-3.0));

        let (literal, value) = classify("Item { x: +7.5 }");
        assert!(literal);
        assert_eq!(value, LiveValue::Number(7.5));
    }

    #[test]
    fn string_literal_strips_quotes() {
        let (literal, value) = classify("Item { text: 'hello' }");
        assert!(literal);
        assert_eq!(value, LiveValue::String("hello".to_string()));
    }

    #[test]
    fn boolean_literal_coerces_to_bool() {
        let (literal, value) = classify("Item { visible: true }");
        assert!(literal);
        assert_eq!(value, LiveValue::Bool(true));

        let (literal, value) = classify("Item { visible: false; }");
        assert!(literal);
        assert_eq!(value, LiveValue::Bool(false));
    }

    #[test]
    fn call_expression_is_not_literal() {
        let (literal, value) = classify("Item { width: foo() }");
        assert!(!literal);
        assert_eq!(value, LiveValue::Expression("foo()".to_string()));
    }

    #[test]
    fn identifier_is_not_literal() {
        let (literal, value) = classify("Item { width: parent }");
        assert!(!literal);
        assert_eq!(value, LiveValue::Expression("parent".to_string()));
    }

    #[test]
    fn semicolon_is_stripped_before_coercion() {
        let (_, value) = classify("Item { width: 42; }");
        assert_eq!(value, LiveValue::Number(42.0));
    }

    #[test]
    fn escaped_quote_is_decoded() {
        assert_eq!(de_escape(r#"a\"b"#), "a\"b");
    }

    #[test]
    fn escaped_newline_and_cr_are_decoded() {
        assert_eq!(de_escape(r"line1\n"), "line1\n");
        assert_eq!(de_escape(r"line1\r"), "line1\r");
    }

    #[test]
    fn double_backslash_reduces_to_one() {
        assert_eq!(de_escape(r"a\\b"), r"a\b");
    }

    #[test]
    fn string_literal_escapes_round_trip() {
        let (_, value) = classify(r#"Item { text: "a\"b" }"#);
        assert_eq!(value, LiveValue::String("a\"b".to_string()));

        let (_, value) = classify(r#"Item { text: "line1\n" }"#);
        assert_eq!(value, LiveValue::String("line1\n".to_string()));
    }

    #[test]
    fn strip_quotes_requires_matching_pair() {
        assert_eq!(strip_quotes(r#""hello""#), "hello");
        assert_eq!(strip_quotes("'hello'"), "hello");
        assert_eq!(strip_quotes(r#""hello'"#), r#""hello'"#);
        assert_eq!(strip_quotes("plain"), "plain");
    }
}
