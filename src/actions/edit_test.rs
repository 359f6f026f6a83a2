use super::*;
use crate::document::TextBuffer;

#[test]
fn swap_replaces_the_whole_line() {
    let model = TextBuffer::new("flowchart LR\n  A-->B\n");
    let plan = swap_line(&model, 2).expect("plan");
    assert_eq!(plan.source, ActionKind::SwapArrow);
    assert_eq!(
        plan.range,
        Range { start_line: 2, start_column: 1, end_line: 2, end_column: 8 }
    );
    assert_eq!(plan.text(), "  B-->A");
    assert!(plan.stops().is_empty());
}

#[test]
fn swap_without_change_is_no_edit() {
    let model = TextBuffer::new("flowchart LR\n  a[Label]\n  A-->A");
    assert_eq!(swap_line(&model, 2), None);
    assert_eq!(swap_line(&model, 3), None);
}

#[test]
fn duplicate_inserts_copy_below() {
    let model = TextBuffer::new("sequenceDiagram\n  A->>B: $cost");
    let plan = duplicate_line(&model, 2);
    assert_eq!(plan.range, Range::end_of_line(&model, 2));
    assert_eq!(plan.text(), "\n  A->>B: $cost\n");
    assert_eq!(plan.template(), "\n  A->>B: \\$cost\n");

    let middle = duplicate_line(&model, 1);
    assert_eq!(middle.text(), "\nsequenceDiagram");
}

#[test]
fn prettify_replaces_full_document() {
    let model = TextBuffer::new("flowchart LR\na-->b");
    let plan = prettify_document(&model, &FormatOptions::default()).expect("plan");
    assert_eq!(
        plan.range,
        Range { start_line: 1, start_column: 1, end_line: 2, end_column: 6 }
    );
    assert_eq!(plan.text(), "flowchart LR\n  a --> b\n");
}

#[test]
fn prettify_skips_canonical_and_unknown_documents() {
    let canonical = TextBuffer::new("flowchart LR\n  a --> b\n");
    assert_eq!(prettify_document(&canonical, &FormatOptions::default()), None);

    let unknown = TextBuffer::new("pie\n  \"a\" : 1");
    assert_eq!(prettify_document(&unknown, &FormatOptions::default()), None);
}
