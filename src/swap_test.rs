use super::*;

#[test]
fn swaps_flowchart_edge() {
    assert_eq!(swap_arrow_direction("A-->B"), "B-->A");
}

#[test]
fn swaps_sequence_message() {
    assert_eq!(swap_arrow_direction("A->>B: hi"), "B->>A: hi");
    assert_eq!(swap_arrow_direction("A-->>B: hi"), "B-->>A: hi");
    assert_eq!(swap_arrow_direction("A-)B"), "B-)A");
}

#[test]
fn whitespace_and_indent_stay_in_place() {
    assert_eq!(swap_arrow_direction("  A --> B  "), "  B --> A  ");
    assert_eq!(swap_arrow_direction("  Alice ->> Bob: Hi there"), "  Bob ->> Alice: Hi there");
}

#[test]
fn shapes_and_labels_travel_with_their_endpoint() {
    assert_eq!(
        swap_arrow_direction("    a[Start] -->|go| b((End)) %% c"),
        "    b((End)) -->|go| a[Start] %% c"
    );
}

#[test]
fn flowchart_arrow_variants() {
    assert_eq!(swap_arrow_direction("A-.->B"), "B-.->A");
    assert_eq!(swap_arrow_direction("A ==> B"), "B ==> A");
    assert_eq!(swap_arrow_direction("A<-->B"), "B<-->A");
    assert_eq!(swap_arrow_direction("A --- B"), "B --- A");
}

#[test]
fn dashed_open_message_keeps_its_text() {
    assert_eq!(swap_arrow_direction("A-->B: hi"), "B-->A: hi");
}

#[test]
fn non_matching_lines_are_unchanged() {
    for line in ["participant A", "", "flowchart LR", "%% a --> b", "  end"] {
        assert!(matches!(swap_arrow_direction(line), Cow::Borrowed(l) if l == line), "changed {line:?}");
    }
}

#[test]
fn swapping_twice_restores_the_line() {
    for line in ["A-->B", "  x -->|y| z", "Alice->>Bob: hello"] {
        let once = swap_arrow_direction(line).into_owned();
        assert_eq!(swap_arrow_direction(&once), line);
    }
}
