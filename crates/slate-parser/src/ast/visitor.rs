//! AST visitor for walking a document's object tree.
//!
//! Each visit method has a default implementation that calls the matching
//! walk function. Descent happens only through object-like containers
//! (object definitions and object bindings); script bindings and functions
//! are leaves.
//!
//! # Example
//!
//! ```rust
//! use slate_parser::ast::{Document, ScriptBinding, Visitor};
//!
//! struct CountBindings {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountBindings {
//!     fn visit_script_binding(&mut self, _binding: &'ast ScriptBinding) {
//!         self.count += 1;
//!     }
//! }
//!
//! let doc = Document::parse("Item { width: 10; height: 20 }", "app.slate").unwrap();
//! let mut counter = CountBindings { count: 0 };
//! counter.visit_document(&doc);
//! assert_eq!(counter.count, 2);
//! ```

use super::{
    Document, FunctionDecl, Import, Member, ObjectBinding, ObjectDefinition, ScriptBinding,
};

/// Visitor over a document's AST.
///
/// The `'ast` lifetime lets implementations keep references to visited nodes
/// for as long as the document is alive.
pub trait Visitor<'ast>: Sized {
    fn visit_document(&mut self, doc: &'ast Document) {
        walk_document(self, doc);
    }

    fn visit_import(&mut self, _import: &'ast Import) {}

    fn visit_object_definition(&mut self, def: &'ast ObjectDefinition) {
        walk_object_definition(self, def);
    }

    fn visit_object_binding(&mut self, binding: &'ast ObjectBinding) {
        walk_object_binding(self, binding);
    }

    fn visit_script_binding(&mut self, _binding: &'ast ScriptBinding) {}

    fn visit_function(&mut self, _func: &'ast FunctionDecl) {}
}

pub fn walk_document<'ast, V: Visitor<'ast>>(visitor: &mut V, doc: &'ast Document) {
    for import in &doc.imports {
        visitor.visit_import(import);
    }
    visitor.visit_object_definition(&doc.root);
}

pub fn walk_object_definition<'ast, V: Visitor<'ast>>(
    visitor: &mut V,
    def: &'ast ObjectDefinition,
) {
    walk_members(visitor, &def.initializer.members);
}

pub fn walk_object_binding<'ast, V: Visitor<'ast>>(visitor: &mut V, binding: &'ast ObjectBinding) {
    walk_members(visitor, &binding.definition.initializer.members);
}

fn walk_members<'ast, V: Visitor<'ast>>(visitor: &mut V, members: &'ast [Member]) {
    for member in members {
        match member {
            Member::ObjectDefinition(def) => visitor.visit_object_definition(def),
            Member::ObjectBinding(binding) => visitor.visit_object_binding(binding),
            Member::ScriptBinding(binding) => visitor.visit_script_binding(binding),
            Member::Function(func) => visitor.visit_function(func),
        }
    }
}
