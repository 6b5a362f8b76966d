//! Tests for document parsing

use slate_parser::ast::{BindingStatement, Document, Expression, Member};
use slate_parser::ParseErrorKind;

#[test]
fn test_parse_minimal_document() {
    let doc = Document::parse("Item { }", "app.slate").unwrap();

    assert!(doc.imports.is_empty());
    assert_eq!(doc.root.type_name.to_dotted(), "Item");
    assert!(doc.root.initializer.members.is_empty());
}

#[test]
fn test_parse_imports() {
    let source = "import Slate.Controls 2.1 as Controls\nimport \"widgets\"\nItem { }";
    let doc = Document::parse(source, "app.slate").unwrap();

    assert_eq!(doc.imports.len(), 2);
    assert_eq!(doc.imports[0].uri, "Slate.Controls");
    assert_eq!(doc.imports[0].version.as_deref(), Some("2.1"));
    assert_eq!(
        doc.imports[0].alias.as_ref().map(|a| a.name.as_str()),
        Some("Controls")
    );
    assert_eq!(doc.imports[1].uri, "widgets");
    assert!(doc.imports[1].version.is_none());
}

#[test]
fn test_parse_script_bindings_newline_terminated() {
    let source = "Rectangle {\n  width: 200\n  color: \"red\"\n}";
    let doc = Document::parse(source, "app.slate").unwrap();

    let members = &doc.root.initializer.members;
    assert_eq!(members.len(), 2);

    match &members[0] {
        Member::ScriptBinding(binding) => {
            assert_eq!(binding.name.to_dotted(), "width");
            match &binding.statement {
                BindingStatement::Expression(stmt) => {
                    assert!(matches!(
                        stmt.expression,
                        Expression::Number { value, .. } if value == 200.0
                    ));
                    assert!(stmt.semicolon.is_none());
                }
                other => panic!("expected expression statement, got {:?}", other),
            }
        }
        other => panic!("expected script binding, got {:?}", other),
    }
}

#[test]
fn test_parse_semicolon_terminated_binding() {
    let doc = Document::parse("Item { width: 200; }", "app.slate").unwrap();

    match &doc.root.initializer.members[0] {
        Member::ScriptBinding(binding) => match &binding.statement {
            BindingStatement::Expression(stmt) => {
                assert!(stmt.semicolon.is_some());
                // The statement span covers the terminator
                assert_eq!(doc.text(stmt.span), "200;");
            }
            other => panic!("expected expression statement, got {:?}", other),
        },
        other => panic!("expected script binding, got {:?}", other),
    }
}

#[test]
fn test_parse_dotted_binding_name() {
    let doc = Document::parse("Item { anchors.fill: parent }", "app.slate").unwrap();

    match &doc.root.initializer.members[0] {
        Member::ScriptBinding(binding) => {
            assert_eq!(binding.name.to_dotted(), "anchors.fill");
            assert_eq!(binding.identifier_value(), Some("parent"));
        }
        other => panic!("expected script binding, got {:?}", other),
    }
}

#[test]
fn test_parse_child_object() {
    let source = "Rectangle {\n  Text {\n    text: \"hi\"\n  }\n}";
    let doc = Document::parse(source, "app.slate").unwrap();

    match &doc.root.initializer.members[0] {
        Member::ObjectDefinition(def) => {
            assert_eq!(def.type_name.to_dotted(), "Text");
            assert_eq!(def.initializer.members.len(), 1);
        }
        other => panic!("expected child object, got {:?}", other),
    }
}

#[test]
fn test_parse_object_binding() {
    let doc = Document::parse("Rectangle { border: Border { width: 2 } }", "app.slate").unwrap();

    match &doc.root.initializer.members[0] {
        Member::ObjectBinding(binding) => {
            assert_eq!(binding.name.to_dotted(), "border");
            assert_eq!(binding.definition.type_name.to_dotted(), "Border");
        }
        other => panic!("expected object binding, got {:?}", other),
    }
}

#[test]
fn test_parse_function_member() {
    let source = "Item {\n  function tick(dt, count) { return dt * count; }\n}";
    let doc = Document::parse(source, "app.slate").unwrap();

    match &doc.root.initializer.members[0] {
        Member::Function(func) => {
            assert_eq!(func.name.name, "tick");
            assert_eq!(func.params.len(), 2);
            assert_eq!(func.body_text(doc.source()).trim(), "return dt * count;");
        }
        other => panic!("expected function, got {:?}", other),
    }
}

#[test]
fn test_parse_block_binding() {
    let source = "Item {\n  onClicked: { count = count + 1 }\n  width: 5\n}";
    let doc = Document::parse(source, "app.slate").unwrap();

    let members = &doc.root.initializer.members;
    assert_eq!(members.len(), 2);

    match &members[0] {
        Member::ScriptBinding(binding) => match binding.statement {
            BindingStatement::Block { span } => {
                assert_eq!(doc.text(span), "{ count = count + 1 }");
            }
            ref other => panic!("expected block statement, got {:?}", other),
        },
        other => panic!("expected script binding, got {:?}", other),
    }
}

#[test]
fn test_opaque_expression_spans_kept_verbatim() {
    let doc = Document::parse("Item { width: parent.width / 2 }", "app.slate").unwrap();

    match &doc.root.initializer.members[0] {
        Member::ScriptBinding(binding) => match &binding.statement {
            BindingStatement::Expression(stmt) => {
                assert!(matches!(stmt.expression, Expression::Opaque { .. }));
                assert_eq!(doc.text(stmt.span), "parent.width / 2");
            }
            other => panic!("expected expression statement, got {:?}", other),
        },
        other => panic!("expected script binding, got {:?}", other),
    }
}

#[test]
fn test_multiline_expression_continues_after_operator() {
    let source = "Item {\n  width: parent.width +\n    10\n  height: 5\n}";
    let doc = Document::parse(source, "app.slate").unwrap();

    let members = &doc.root.initializer.members;
    assert_eq!(members.len(), 2);
    match &members[0] {
        Member::ScriptBinding(binding) => {
            assert_eq!(
                doc.text(binding.statement.span()),
                "parent.width +\n    10"
            );
        }
        other => panic!("expected script binding, got {:?}", other),
    }
}

#[test]
fn test_unary_minus_literal() {
    let doc = Document::parse("Item { x: -3 }", "app.slate").unwrap();

    match &doc.root.initializer.members[0] {
        Member::ScriptBinding(binding) => match &binding.statement {
            BindingStatement::Expression(stmt) => match &stmt.expression {
                Expression::UnaryMinus { expression, .. } => {
                    assert!(matches!(**expression, Expression::Number { value, .. } if value == 3.0));
                }
                other => panic!("expected unary minus, got {:?}", other),
            },
            other => panic!("expected expression statement, got {:?}", other),
        },
        other => panic!("expected script binding, got {:?}", other),
    }
}

#[test]
fn test_unclosed_object_is_an_error() {
    let errors = Document::parse("Item { width: 5", "app.slate").unwrap_err();

    assert!(errors
        .iter()
        .any(|e| matches!(e.kind, ParseErrorKind::UnclosedDelimiter { .. })));
}

#[test]
fn test_missing_binding_value_is_an_error() {
    let errors = Document::parse("Item { width: }", "app.slate").unwrap_err();

    assert!(errors
        .iter()
        .any(|e| matches!(e.kind, ParseErrorKind::MissingBindingValue)));
}

#[test]
fn test_trailing_tokens_are_an_error() {
    let errors = Document::parse("Item { } stray", "app.slate").unwrap_err();
    assert!(!errors.is_empty());
}
