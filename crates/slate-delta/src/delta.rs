//! Delta computation between two parses of the same document.
//!
//! Object correspondence is established by content equality of the verbatim
//! `id: <expr>` statement text, not by tree position: two independently
//! parsed trees share no identity, and an object's declared id is the only
//! stable key across edits. Per corresponding object pair, members are
//! compared name-by-name and every changed property binding or method body
//! is pushed to the live transport and recorded as a [`Change`].

use serde::Serialize;
use slate_live::{LiveDirectory, LiveHandle, LiveTransport};
use slate_parser::ast::{Document, Member, ObjectRef, ScriptBinding};
use slate_parser::Span;

use crate::extractor::BindingIndex;
use crate::value;

/// One detected difference, in the order discovered.
///
/// The list is a log of exactly the transport calls a pass made: one entry
/// per detected member difference, no duplicates for the same member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change {
    /// The live object the update targeted.
    pub handle: LiveHandle,
    /// Span of the changed member in the new document, for provenance.
    pub source_span: Span,
    #[serde(flatten)]
    pub kind: ChangeKind,
}

/// What changed on the target object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum ChangeKind {
    Property {
        name: String,
        value: slate_live::LiveValue,
        is_literal: bool,
    },
    Method {
        name: String,
        body: String,
    },
}

/// Result of one diff pass over a document pair.
pub struct Delta<'a> {
    document: &'a Document,
    previous_document: &'a Document,
    changes: Vec<Change>,
}

impl<'a> Delta<'a> {
    /// Diff `document` against `previous_document`, pushing every detected
    /// change through `transport`.
    ///
    /// Both documents and the directory must be stable snapshots for the
    /// duration of the call; the pass runs to completion synchronously.
    pub fn compute(
        document: &'a Document,
        previous_document: &'a Document,
        directory: &LiveDirectory,
        transport: &mut dyn LiveTransport,
    ) -> Delta<'a> {
        let mut delta = Delta {
            document,
            previous_document,
            changes: Vec::new(),
        };

        let index = BindingIndex::build(document, directory);
        let previous_index = BindingIndex::build(previous_document, directory);

        for (object, previous_object) in preserved_objects(&index, &previous_index) {
            delta.diff_members(
                object,
                previous_object,
                &index,
                &previous_index,
                directory,
                transport,
            );
        }

        delta
    }

    /// The new document of the last pass.
    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// The previous document of the last pass.
    pub fn previous_document(&self) -> &'a Document {
        self.previous_document
    }

    /// Every change detected, in discovery order.
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    fn diff_members(
        &mut self,
        object: ObjectRef<'a>,
        previous_object: ObjectRef<'_>,
        index: &BindingIndex<'a>,
        previous_index: &BindingIndex<'_>,
        directory: &LiveDirectory,
        transport: &mut dyn LiveTransport,
    ) {
        for member in object.members() {
            match member {
                Member::ScriptBinding(script) => {
                    let previous = previous_object.members().iter().find_map(|m| match m {
                        Member::ScriptBinding(prev) if script.name.same_path(&prev.name) => {
                            Some(prev)
                        }
                        _ => None,
                    });
                    let Some(previous) = previous else {
                        continue;
                    };

                    let script_text = index.script_text(script);
                    if script_text == previous_index.script_text(previous) {
                        continue;
                    }

                    let Some(handle) = live_handle_for_object(index, object, directory) else {
                        continue;
                    };
                    self.update_script_binding(handle, script, script_text, transport);
                }
                Member::Function(func) => {
                    let previous = previous_object.members().iter().find_map(|m| match m {
                        Member::Function(prev) if func.name.name == prev.name.name => Some(prev),
                        _ => None,
                    });
                    let Some(previous) = previous else {
                        continue;
                    };

                    let method_code = index.method_code(func);
                    if method_code == previous_index.method_code(previous) {
                        continue;
                    }

                    let Some(handle) = live_handle_for_object(index, object, directory) else {
                        continue;
                    };

                    let method_name = index.method_name(func).to_string();
                    transport.set_method_body(&handle, &method_name, method_code);
                    self.changes.push(Change {
                        handle,
                        source_span: func.span,
                        kind: ChangeKind::Method {
                            name: method_name,
                            body: method_code.to_string(),
                        },
                    });
                }
                // Structural changes (new/removed child objects) are out of
                // scope for a diff pass; re-creation is the embedder's job.
                Member::ObjectDefinition(_) | Member::ObjectBinding(_) => {}
            }
        }
    }

    fn update_script_binding(
        &mut self,
        handle: LiveHandle,
        script: &ScriptBinding,
        script_text: &str,
        transport: &mut dyn LiveTransport,
    ) {
        let property_name = script.name.to_dotted();
        let is_literal = value::is_literal_statement(&script.statement);
        let live_value = value::cast_to_literal(script_text, &script.statement);

        transport.set_binding(&handle, &property_name, &live_value, is_literal);
        self.changes.push(Change {
            handle,
            source_span: script.span,
            kind: ChangeKind::Property {
                name: property_name,
                value: live_value,
                is_literal,
            },
        });
    }
}

/// Match objects across the two parses by the verbatim text of their `id`
/// bindings.
///
/// Policy: when several previous objects carry identical id text, the
/// last-enumerated one wins. This conflates "same id expression" with "same
/// logical object"; ambiguous documents are the author's responsibility.
fn preserved_objects<'a, 'b>(
    index: &BindingIndex<'a>,
    previous_index: &BindingIndex<'b>,
) -> Vec<(ObjectRef<'a>, ObjectRef<'b>)> {
    let mut pairs = Vec::new();

    for id in index.all_id_bindings() {
        let Some(object) = index.parent(id) else {
            continue;
        };
        let id_code = index.script_text(id).trim();

        let mut matched = None;
        for previous_id in previous_index.all_id_bindings() {
            if id_code == previous_index.script_text(previous_id).trim() {
                matched = previous_index.parent(previous_id);
            }
        }

        if let Some(previous_object) = matched {
            pairs.push((object, previous_object));
        }
    }

    pairs
}

/// Resolve the live handle of a declared object through its `id` binding's
/// right-hand identifier. Re-derived from the directory on every use rather
/// than read from the index's resolved map.
fn live_handle_for_object(
    index: &BindingIndex<'_>,
    object: ObjectRef<'_>,
    directory: &LiveDirectory,
) -> Option<LiveHandle> {
    let id_binding = index.id_binding(object)?;
    let id_string = id_binding.identifier_value()?;
    directory.lookup_by_declared_id(id_string).cloned()
}
