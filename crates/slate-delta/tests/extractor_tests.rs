//! Tests for the binding extractor

use slate_delta::BindingIndex;
use slate_live::{LiveDirectory, LiveHandle, LiveSource};
use slate_parser::ast::{Document, Member, ScriptBinding, Visitor};

const SOURCE: &str = "\
Rectangle {
    id: root
    width: 200
    color: \"red\"
    border: Border {
        id: frame
        width: 2
    }
    Text {
        id: label
        text: \"hi\"
    }
    function tick(dt) { return dt; }
}
";

fn live_directory() -> LiveDirectory {
    let source = LiveSource {
        url: "file:///app.slate".to_string(),
        line: 1,
        column: 1,
    };
    LiveDirectory::from_handles(vec![
        LiveHandle::new(1, "root", source.clone()),
        LiveHandle::new(2, "label", source),
    ])
}

#[test]
fn id_bindings_are_collected_in_traversal_order() {
    let doc = Document::parse(SOURCE, "app.slate").unwrap();
    let index = BindingIndex::build(&doc, &live_directory());

    let ids: Vec<&str> = index
        .all_id_bindings()
        .iter()
        .map(|binding| binding.identifier_value().unwrap())
        .collect();
    assert_eq!(ids, vec!["root", "frame", "label"]);
}

#[test]
fn parent_is_total_over_script_bindings() {
    struct CollectBindings<'a> {
        bindings: Vec<&'a ScriptBinding>,
    }

    impl<'a> Visitor<'a> for CollectBindings<'a> {
        fn visit_script_binding(&mut self, binding: &'a ScriptBinding) {
            self.bindings.push(binding);
        }
    }

    let doc = Document::parse(SOURCE, "app.slate").unwrap();
    let index = BindingIndex::build(&doc, &live_directory());

    let mut collector = CollectBindings {
        bindings: Vec::new(),
    };
    collector.visit_document(&doc);

    // Every script binding in the tree, not just the id bindings
    assert_eq!(collector.bindings.len(), 7);
    for binding in &collector.bindings {
        assert!(index.parent(binding).is_some());
    }

    // The nested frame id's parent is the border object binding, whose
    // header runs up to its opening brace.
    let frame = index.all_id_bindings()[1];
    let parent = index.parent(frame).unwrap();
    assert_eq!(index.header_text(parent).trim_end(), "border: Border");
}

#[test]
fn id_binding_maps_object_to_its_id() {
    let doc = Document::parse(SOURCE, "app.slate").unwrap();
    let index = BindingIndex::build(&doc, &live_directory());

    let root_id = index.all_id_bindings()[0];
    let root = index.parent(root_id).unwrap();
    let via_object = index.id_binding(root).unwrap();
    assert_eq!(via_object.span, root_id.span);
}

#[test]
fn resolved_handles_follow_the_directory() {
    let doc = Document::parse(SOURCE, "app.slate").unwrap();
    let index = BindingIndex::build(&doc, &live_directory());

    let ids = index.all_id_bindings();
    assert_eq!(index.resolved_handle(ids[0]).map(|h| h.debug_id), Some(1));
    // "frame" is not running
    assert!(index.resolved_handle(ids[1]).is_none());
    assert_eq!(index.resolved_handle(ids[2]).map(|h| h.debug_id), Some(2));
}

#[test]
fn script_text_is_verbatim() {
    let doc = Document::parse(SOURCE, "app.slate").unwrap();
    let index = BindingIndex::build(&doc, &live_directory());

    let root_id = index.all_id_bindings()[0];
    assert_eq!(index.script_text(root_id), "root");
}

#[test]
fn header_text_runs_to_the_opening_brace() {
    let doc = Document::parse(SOURCE, "app.slate").unwrap();
    let index = BindingIndex::build(&doc, &live_directory());

    let root_id = index.all_id_bindings()[0];
    let root = index.parent(root_id).unwrap();
    assert_eq!(index.header_text(root), "Rectangle ");
}

#[test]
fn method_name_and_code() {
    let doc = Document::parse(SOURCE, "app.slate").unwrap();
    let index = BindingIndex::build(&doc, &live_directory());

    let func = doc
        .root
        .initializer
        .members
        .iter()
        .find_map(|member| match member {
            Member::Function(func) => Some(func),
            _ => None,
        })
        .unwrap();

    assert_eq!(index.method_name(func), "tick");
    assert_eq!(index.method_code(func), " return dt; ");
}

#[test]
fn object_at_offset_maps_cursor_to_live_handle() {
    let doc = Document::parse(SOURCE, "app.slate").unwrap();
    let index = BindingIndex::build(&doc, &live_directory());

    // The root object starts at offset 0
    let handle = index.object_at_offset(0).unwrap();
    assert_eq!(handle.debug_id, 1);

    // The label object starts where "Text" does
    let text_offset = SOURCE.find("Text {").unwrap();
    let handle = index.object_at_offset(text_offset).unwrap();
    assert_eq!(handle.debug_id, 2);

    // Inside an object but not at its start: no match
    assert!(index.object_at_offset(3).is_none());

    // "frame" has no running instance
    let border_offset = SOURCE.find("border: Border").unwrap();
    assert!(index.object_at_offset(border_offset).is_none());
}

#[test]
fn object_without_id_contributes_no_id_binding() {
    let doc = Document::parse("Item { width: 5 }", "app.slate").unwrap();
    let index = BindingIndex::build(&doc, &LiveDirectory::new());

    assert!(index.all_id_bindings().is_empty());
}

#[test]
fn non_identifier_id_value_never_resolves() {
    let doc = Document::parse("Item { id: \"root\" }", "app.slate").unwrap();
    let directory = LiveDirectory::from_handles(vec![LiveHandle::new(
        1,
        "root",
        LiveSource {
            url: "file:///app.slate".to_string(),
            line: 1,
            column: 1,
        },
    )]);
    let index = BindingIndex::build(&doc, &directory);

    let ids = index.all_id_bindings();
    assert_eq!(ids.len(), 1);
    assert!(ids[0].identifier_value().is_none());
    assert!(index.resolved_handle(ids[0]).is_none());
}
