use super::*;

fn fmt(code: &str) -> String {
    format(code, &FormatOptions::default())
}

#[test]
fn normalizes_arrow_spacing() {
    assert_eq!(fmt("flowchart LR\n  a-->b\n"), "flowchart LR\n  a --> b\n");
}

#[test]
fn indents_nested_subgraphs() {
    let input = "graph TD\nsubgraph outer\nsubgraph inner\na-->b\nend\nc --- d\nend\n";
    let expected = "graph TD\n  subgraph outer\n    subgraph inner\n      a --> b\n    end\n    c --- d\n  end\n";
    assert_eq!(fmt(input), expected);
}

#[test]
fn collapses_blank_runs_and_drops_edges() {
    let input = "\n\nflowchart LR\n\n\n  a --> b\n\n\n\n  b --> c\n\n\n";
    assert_eq!(fmt(input), "flowchart LR\n\n  a --> b\n\n  b --> c\n");
}

#[test]
fn excess_end_markers_stop_at_top_level() {
    let input = "flowchart LR\nend\nend\na-->b";
    assert_eq!(fmt(input), "flowchart LR\nend\nend\na --> b\n");
}

#[test]
fn comments_and_directions_follow_depth_verbatim() {
    let input = "flowchart LR\nsubgraph s\n%% inside\ndirection   TB\nend\n";
    assert_eq!(fmt(input), "flowchart LR\n  subgraph s\n    %% inside\n    direction   TB\n  end\n");
}

#[test]
fn header_is_emitted_trimmed_and_unindented() {
    assert_eq!(fmt("   flowchart   LR   \na-->b"), "flowchart   LR\n  a --> b\n");
}

#[test]
fn edge_labels_attach_to_arrow() {
    assert_eq!(normalize_edge("a-->|yes|b"), "a -->|yes| b");
    assert_eq!(normalize_edge("a -->  |yes please|   b"), "a -->|yes please| b");
}

#[test]
fn arrow_variants() {
    assert_eq!(normalize_edge("c -.->  d"), "c -.-> d");
    assert_eq!(normalize_edge("e==>f"), "e ==> f");
    assert_eq!(normalize_edge("g--o h"), "g --o h");
    assert_eq!(normalize_edge("h<-->i"), "h <--> i");
    assert_eq!(normalize_edge("j---->k"), "j ----> k");
}

#[test]
fn shaped_source_keeps_its_label() {
    assert_eq!(
        normalize_edge("start[Start here]-->stop((Done))"),
        "start[Start here] --> stop((Done))"
    );
}

#[test]
fn non_edges_pass_through() {
    assert!(matches!(normalize_edge("a[Label]"), Cow::Borrowed("a[Label]")));
    assert_eq!(normalize_edge("A & B --> C"), "A & B --> C");
    assert_eq!(normalize_edge("style a fill:#f9f"), "style a fill:#f9f");
}

#[test]
fn chained_edges_normalize_last_arrow() {
    assert_eq!(normalize_edge("a-->b-->c"), "a-->b --> c");
    assert_eq!(normalize_edge("a-->b --> c"), "a-->b --> c");
}

#[test]
fn shapes_with_spaces_and_nested_brackets() {
    assert_eq!(normalize_edge("a((big x))-->b"), "a((big x)) --> b");
    assert_eq!(normalize_edge("db[(Main store)]==>cache"), "db[(Main store)] ==> cache");
}

#[test]
fn layout_variant_header_resets_depth() {
    assert_eq!(
        fmt("flowchart-elk TD\nsubgraph s\na-->b\nend\n"),
        "flowchart-elk TD\n  subgraph s\n    a --> b\n  end\n"
    );
}
