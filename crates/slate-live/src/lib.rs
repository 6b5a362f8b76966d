//! Live-instance interface types for Slate hot reload.
//!
//! These types form the boundary between the static side (parsed documents)
//! and a running Slate program: handles to live object instances, the
//! directory that maps declared ids to handles, and the transport that
//! applies binding and method updates to the running program.
//!
//! The delta engine never constructs handles itself; an embedder supplies a
//! snapshot [`LiveDirectory`] and a [`LiveTransport`] for each diff pass.

mod transport;

pub use transport::{LiveTransport, LiveUpdate, NullTransport, RecordingTransport};

use serde::{Deserialize, Serialize};

/// Source origin of a live object: where its declaration came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveSource {
    pub url: String,
    pub line: u32,
    pub column: u32,
}

/// The runtime identity of a currently-executing object instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveHandle {
    /// Instance id assigned by the running program's debug service.
    pub debug_id: u32,
    /// The `id` the object was declared with, e.g. `root`.
    pub id_string: String,
    /// Where the declaration originated.
    pub source: LiveSource,
}

impl LiveHandle {
    pub fn new(debug_id: u32, id_string: impl Into<String>, source: LiveSource) -> Self {
        Self {
            debug_id,
            id_string: id_string.into(),
            source,
        }
    }
}

/// A coerced binding value delivered to the live side.
///
/// Literal bindings arrive as typed values; everything else as expression
/// source text to be evaluated by the running program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LiveValue {
    Number(f64),
    String(String),
    Bool(bool),
    Expression(String),
}

/// A read-only snapshot of the running program's object instances.
///
/// Callers must not mutate the snapshot for the duration of a diff pass;
/// the engine performs no internal synchronization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveDirectory {
    handles: Vec<LiveHandle>,
}

impl LiveDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_handles(handles: Vec<LiveHandle>) -> Self {
        Self { handles }
    }

    pub fn push(&mut self, handle: LiveHandle) {
        self.handles.push(handle);
    }

    /// The instance declared with `id_string`, if any is running.
    pub fn lookup_by_declared_id(&self, id_string: &str) -> Option<&LiveHandle> {
        self.handles
            .iter()
            .find(|handle| handle.id_string == id_string)
    }

    /// The instance whose declaration originated at the given position.
    pub fn lookup_by_position(&self, url: &str, line: u32, column: u32) -> Option<&LiveHandle> {
        self.handles.iter().find(|handle| {
            handle.source.url == url
                && handle.source.line == line
                && handle.source.column == column
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiveHandle> {
        self.handles.iter()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
