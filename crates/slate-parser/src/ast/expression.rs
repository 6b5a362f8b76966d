//! Expression nodes for binding values.
//!
//! Slate does not carry a full expression grammar: the delta engine only
//! needs to classify a binding value as literal or free-form and recover its
//! verbatim text. Literals and bare identifiers are represented structurally;
//! everything else is an [`Expression::Opaque`] covering the raw token run.

use crate::token::Span;

/// The expression form of a binding statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    /// Trailing semicolon, if present. Included in `span`.
    pub semicolon: Option<Span>,
    pub span: Span,
}

/// A binding value expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Numeric literal: `42`, `1.5e3`, `0xff`
    Number { value: f64, span: Span },

    /// String literal; `value` is the decoded text, the span keeps the
    /// quotes and escapes verbatim.
    String { value: String, span: Span },

    /// `true` / `false`
    Bool { value: bool, span: Span },

    /// Bare identifier, e.g. the right-hand side of `id: root`
    Identifier { name: String, span: Span },

    /// Unary plus over another expression
    UnaryPlus { expression: Box<Expression>, span: Span },

    /// Unary minus over another expression
    UnaryMinus { expression: Box<Expression>, span: Span },

    /// Any other expression, kept as a raw token run
    Opaque { span: Span },
}

impl Expression {
    pub fn span(&self) -> &Span {
        match self {
            Expression::Number { span, .. } => span,
            Expression::String { span, .. } => span,
            Expression::Bool { span, .. } => span,
            Expression::Identifier { span, .. } => span,
            Expression::UnaryPlus { span, .. } => span,
            Expression::UnaryMinus { span, .. } => span,
            Expression::Opaque { span } => span,
        }
    }
}
