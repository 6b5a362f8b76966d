//! AST for Slate documents.
//!
//! A document is a list of imports followed by a single root object
//! declaration. Objects contain members: child objects, object-valued
//! bindings, script bindings (`name: expression`) and function declarations.
//! Every node carries a [`Span`] into the document source so verbatim text
//! can always be recovered.

mod expression;
pub mod visitor;

pub use expression::{Expression, ExpressionStatement};
pub use visitor::Visitor;

use crate::parser::{ParseError, Parser};
use crate::token::Span;

/// A parsed Slate document, owning its source text.
///
/// The AST holds spans into `source`; all verbatim-text queries slice it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    file_name: String,
    source: String,
    pub imports: Vec<Import>,
    pub root: ObjectDefinition,
}

impl Document {
    /// Parse `source` into a document.
    pub fn parse(
        source: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Result<Document, Vec<ParseError>> {
        let source = source.into();
        let parser = Parser::new(&source).map_err(|errors| {
            errors
                .into_iter()
                .map(ParseError::from_lex_error)
                .collect::<Vec<_>>()
        })?;
        let (imports, root) = parser.parse()?;

        Ok(Document {
            file_name: file_name.into(),
            source,
            imports,
            root,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The verbatim source text covered by `span`.
    pub fn text(&self, span: Span) -> &str {
        span.slice(&self.source)
    }
}

/// An import line: `import Slate.Controls 2.1` or `import "dir"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    /// Module URI (dotted path) or directory string.
    pub uri: String,
    /// Version number text, if present (e.g. `2.1`).
    pub version: Option<String>,
    /// Local alias from an `as Name` clause.
    pub alias: Option<Identifier>,
    pub span: Span,
}

/// A single identifier with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// A dotted identifier path: `anchors.fill`, `id`, `Slate.Text`.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedId {
    pub segments: Vec<Identifier>,
    pub span: Span,
}

impl QualifiedId {
    /// Whether this path is exactly the single segment `name`.
    pub fn is_single(&self, name: &str) -> bool {
        self.segments.len() == 1 && self.segments[0].name == name
    }

    /// Segment-wise equality: same length, every segment's text equal in
    /// order. Spans are ignored.
    pub fn same_path(&self, other: &QualifiedId) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.name == b.name)
    }

    /// The dotted form, e.g. `anchors.fill`.
    pub fn to_dotted(&self) -> String {
        let mut s = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                s.push('.');
            }
            s.push_str(&segment.name);
        }
        s
    }
}

/// An object declaration: `Rectangle { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDefinition {
    pub type_name: QualifiedId,
    pub initializer: ObjectInitializer,
    pub span: Span,
}

/// The braced member list of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInitializer {
    pub lbrace: Span,
    pub members: Vec<Member>,
    pub rbrace: Span,
}

/// A property binding whose value is an object: `border: Border { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBinding {
    pub name: QualifiedId,
    pub definition: ObjectDefinition,
    pub span: Span,
}

/// A direct member of an object initializer.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// Child object: `Text { ... }`
    ObjectDefinition(ObjectDefinition),
    /// Object-valued binding: `border: Border { ... }`
    ObjectBinding(ObjectBinding),
    /// Script binding: `width: 200`
    ScriptBinding(ScriptBinding),
    /// Method declaration: `function tick(dt) { ... }`
    Function(FunctionDecl),
}

impl Member {
    pub fn span(&self) -> &Span {
        match self {
            Member::ObjectDefinition(def) => &def.span,
            Member::ObjectBinding(binding) => &binding.span,
            Member::ScriptBinding(binding) => &binding.span,
            Member::Function(func) => &func.span,
        }
    }
}

/// A `name: value` member where the value is script, not an object.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptBinding {
    pub name: QualifiedId,
    pub statement: BindingStatement,
    pub span: Span,
}

impl ScriptBinding {
    /// The right-hand side as a bare identifier, if it is one.
    ///
    /// This is how `id: root` names the declared id `root`.
    pub fn identifier_value(&self) -> Option<&str> {
        match &self.statement {
            BindingStatement::Expression(stmt) => match &stmt.expression {
                Expression::Identifier { name, .. } => Some(name),
                _ => None,
            },
            BindingStatement::Block { .. } => None,
        }
    }
}

/// The value side of a script binding.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingStatement {
    /// A single expression, optionally semicolon-terminated.
    Expression(ExpressionStatement),
    /// A `{ ... }` script block, kept verbatim (span includes the braces).
    Block { span: Span },
}

impl BindingStatement {
    /// Span of the full statement, including a trailing semicolon or the
    /// block braces.
    pub fn span(&self) -> Span {
        match self {
            BindingStatement::Expression(stmt) => stmt.span,
            BindingStatement::Block { span } => *span,
        }
    }
}

/// A method declaration inside an object.
///
/// The body is not parsed; `lbrace`/`rbrace` delimit it so the verbatim code
/// between them can be sliced out.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Identifier,
    pub params: Vec<Identifier>,
    pub lbrace: Span,
    pub rbrace: Span,
    pub span: Span,
}

impl FunctionDecl {
    /// The verbatim body text, exclusive of the braces.
    pub fn body_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.lbrace.end..self.rbrace.start]
    }
}

/// A borrowed view of an object-like node: either a plain object definition
/// or an object-valued binding. This is the "declared object" the delta
/// engine matches across parses.
#[derive(Debug, Clone, Copy)]
pub enum ObjectRef<'ast> {
    Definition(&'ast ObjectDefinition),
    Binding(&'ast ObjectBinding),
}

impl<'ast> ObjectRef<'ast> {
    pub fn initializer(&self) -> &'ast ObjectInitializer {
        match self {
            ObjectRef::Definition(def) => &def.initializer,
            ObjectRef::Binding(binding) => &binding.definition.initializer,
        }
    }

    /// Direct members of this object.
    pub fn members(&self) -> &'ast [Member] {
        &self.initializer().members
    }

    /// Byte offset where the declaration starts. Unique per object within
    /// one document, so it doubles as the object's identity key.
    pub fn start_offset(&self) -> usize {
        match self {
            ObjectRef::Definition(def) => def.span.start,
            ObjectRef::Binding(binding) => binding.span.start,
        }
    }

    /// Span from the declaration start to the opening brace, exclusive.
    pub fn header_span(&self) -> Span {
        let lbrace = self.initializer().lbrace;
        match self {
            ObjectRef::Definition(def) => Span::new(
                def.span.start,
                lbrace.start,
                def.span.line,
                def.span.column,
            ),
            ObjectRef::Binding(binding) => Span::new(
                binding.span.start,
                lbrace.start,
                binding.span.line,
                binding.span.column,
            ),
        }
    }
}
