//! Slate live-reload differencing engine.
//!
//! Given two parses of the same document (before and after an edit), this
//! crate re-establishes object correspondence by declared `id`, detects
//! changed property bindings and method bodies, and pushes only the changed
//! fragments to a running instance through a [`slate_live::LiveTransport`].
//!
//! ```rust
//! use slate_delta::diff;
//! use slate_live::{LiveDirectory, LiveHandle, LiveSource, RecordingTransport};
//! use slate_parser::Document;
//!
//! let before = Document::parse("Item { id: root; width: 100 }", "app.slate").unwrap();
//! let after = Document::parse("Item { id: root; width: 200 }", "app.slate").unwrap();
//!
//! let directory = LiveDirectory::from_handles(vec![LiveHandle::new(
//!     1,
//!     "root",
//!     LiveSource { url: "file:///app.slate".into(), line: 1, column: 1 },
//! )]);
//! let mut transport = RecordingTransport::new();
//!
//! let delta = diff(&after, &before, &directory, &mut transport);
//! assert_eq!(delta.changes().len(), 1);
//! ```

pub mod delta;
pub mod extractor;
pub mod value;

pub use delta::{Change, ChangeKind, Delta};
pub use extractor::BindingIndex;

use slate_live::{LiveDirectory, LiveHandle, LiveTransport};
use slate_parser::Document;

/// Diff `document` against `previous_document` and apply every detected
/// change through `transport`. The primary entry point.
pub fn diff<'a>(
    document: &'a Document,
    previous_document: &'a Document,
    directory: &LiveDirectory,
    transport: &mut dyn LiveTransport,
) -> Delta<'a> {
    Delta::compute(document, previous_document, directory, transport)
}

/// Map a cursor offset in `document` to the live instance of the object
/// declared exactly there, if that object's `id` names a running object.
pub fn locate_object_at_offset(
    document: &Document,
    offset: usize,
    directory: &LiveDirectory,
) -> Option<LiveHandle> {
    BindingIndex::build(document, directory).object_at_offset(offset)
}
