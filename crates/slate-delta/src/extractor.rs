//! Binding extraction - builds a per-document binding index
//!
//! A single pre-order traversal of a document records, for every declared
//! object: its `id` binding, the enclosing object of every script binding,
//! and the live handle an `id` binding resolves to in the supplied
//! directory. The resulting [`BindingIndex`] is immutable and answers all
//! queries the delta engine needs without touching the tree again.
//!
//! All lookups are total: absence (no `id`, non-identifier id value, no
//! matching live object) is an `Option::None`, never an error.

use rustc_hash::FxHashMap;
use slate_live::{LiveDirectory, LiveHandle};
use slate_parser::ast::{
    visitor, Document, FunctionDecl, ObjectBinding, ObjectDefinition, ObjectRef, ScriptBinding,
    Visitor,
};

/// Immutable binding index for one parsed document.
///
/// Valid only as long as the document it was built from; a delta pass builds
/// one per document and discards both afterwards.
pub struct BindingIndex<'a> {
    doc: &'a Document,

    /// Enclosing object of every script binding, keyed by binding start.
    parents: FxHashMap<usize, ObjectRef<'a>>,

    /// Each object's `id` binding, keyed by object start.
    id_of_object: FxHashMap<usize, &'a ScriptBinding>,

    /// All `id` bindings in traversal order.
    id_bindings: Vec<&'a ScriptBinding>,

    /// Live handles for `id` bindings whose value named a running object,
    /// keyed by binding start.
    resolved: FxHashMap<usize, LiveHandle>,
}

impl<'a> BindingIndex<'a> {
    /// Traverse `doc` once and build its index, resolving declared ids
    /// against `directory`.
    pub fn build(doc: &'a Document, directory: &LiveDirectory) -> BindingIndex<'a> {
        let mut extractor = Extractor {
            index: BindingIndex {
                doc,
                parents: FxHashMap::default(),
                id_of_object: FxHashMap::default(),
                id_bindings: Vec::new(),
                resolved: FxHashMap::default(),
            },
            directory,
            stack: Vec::new(),
        };
        extractor.visit_document(doc);
        extractor.index
    }

    /// The document this index was built from.
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// The object enclosing `binding`.
    pub fn parent(&self, binding: &ScriptBinding) -> Option<ObjectRef<'a>> {
        self.parents.get(&binding.span.start).copied()
    }

    /// The `id` binding of `object`, if it declares one.
    pub fn id_binding(&self, object: ObjectRef<'a>) -> Option<&'a ScriptBinding> {
        self.id_of_object.get(&object.start_offset()).copied()
    }

    /// All `id` bindings in traversal order.
    pub fn all_id_bindings(&self) -> &[&'a ScriptBinding] {
        &self.id_bindings
    }

    /// The live handle an `id` binding resolved to at build time.
    pub fn resolved_handle(&self, binding: &ScriptBinding) -> Option<&LiveHandle> {
        self.resolved.get(&binding.span.start)
    }

    /// Verbatim source from the object's start to its opening brace.
    pub fn header_text(&self, object: ObjectRef<'a>) -> &'a str {
        self.doc.text(object.header_span())
    }

    /// Verbatim source of the binding's statement, including a trailing
    /// semicolon or block braces.
    pub fn script_text(&self, binding: &ScriptBinding) -> &'a str {
        self.doc.text(binding.statement.span())
    }

    /// The declared method name.
    pub fn method_name(&self, func: &'a FunctionDecl) -> &'a str {
        &func.name.name
    }

    /// Verbatim method body, exclusive of the braces.
    pub fn method_code(&self, func: &FunctionDecl) -> &'a str {
        func.body_text(self.doc.source())
    }

    /// The live handle of the object that starts exactly at `offset`.
    ///
    /// Maps a cursor position in the source to the running instance being
    /// edited: the object must declare an `id` naming a live object.
    pub fn object_at_offset(&self, offset: usize) -> Option<LiveHandle> {
        for binding in &self.id_bindings {
            let Some(object) = self.parent(binding) else {
                continue;
            };
            if object.start_offset() == offset {
                return self.resolved_handle(binding).cloned();
            }
        }
        None
    }
}

/// Visitor that does the single extraction pass.
struct Extractor<'a, 'd> {
    index: BindingIndex<'a>,
    directory: &'d LiveDirectory,
    stack: Vec<ObjectRef<'a>>,
}

impl<'a> Visitor<'a> for Extractor<'a, '_> {
    fn visit_object_definition(&mut self, def: &'a ObjectDefinition) {
        self.stack.push(ObjectRef::Definition(def));
        visitor::walk_object_definition(self, def);
        self.stack.pop();
    }

    fn visit_object_binding(&mut self, binding: &'a ObjectBinding) {
        self.stack.push(ObjectRef::Binding(binding));
        visitor::walk_object_binding(self, binding);
        self.stack.pop();
    }

    fn visit_script_binding(&mut self, binding: &'a ScriptBinding) {
        let Some(&object) = self.stack.last() else {
            return;
        };
        self.index.parents.insert(binding.span.start, object);

        if !binding.name.is_single("id") {
            return;
        }

        // At most one id binding per object; a duplicate replaces the
        // earlier one in place so enumeration order stays consistent with
        // the id_of_object map.
        let previous = self
            .index
            .id_of_object
            .insert(object.start_offset(), binding);
        if let Some(previous) = previous {
            if let Some(pos) = self
                .index
                .id_bindings
                .iter()
                .position(|b| b.span.start == previous.span.start)
            {
                self.index.id_bindings[pos] = binding;
            }
        } else {
            self.index.id_bindings.push(binding);
        }

        if let Some(name) = binding.identifier_value() {
            if let Some(handle) = self.directory.lookup_by_declared_id(name) {
                self.index
                    .resolved
                    .insert(binding.span.start, handle.clone());
            }
        }
    }
}
