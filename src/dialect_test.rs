use super::*;

#[test]
fn detect_flowchart_and_graph_headers() {
    assert_eq!(detect("flowchart LR\n  a --> b\n"), Some(DiagramType::Flowchart));
    assert_eq!(detect("graph TD\n"), Some(DiagramType::Flowchart));
    assert_eq!(detect("FLOWCHART TB"), Some(DiagramType::Flowchart));
}

#[test]
fn detect_sequence_header_case_insensitive() {
    assert_eq!(detect("sequenceDiagram\n  A->>B: hi"), Some(DiagramType::Sequence));
    assert_eq!(detect("SEQUENCEDIAGRAM"), Some(DiagramType::Sequence));
}

#[test]
fn detect_skips_leading_blank_lines_only() {
    assert_eq!(detect("\n   \n  graph LR\n"), Some(DiagramType::Flowchart));
    assert_eq!(detect("%% comment\nflowchart LR\n"), None);
}

#[test]
fn detect_unknown_and_empty() {
    assert_eq!(detect(""), None);
    assert_eq!(detect("   \n\n"), None);
    assert_eq!(detect("classDiagram\n  A <|-- B"), None);
}

#[test]
fn next_and_prev_wrap_around() {
    assert_eq!(DiagramType::Flowchart.next(), DiagramType::Sequence);
    assert_eq!(DiagramType::Sequence.next(), DiagramType::Flowchart);
    assert_eq!(DiagramType::Flowchart.prev(), DiagramType::Sequence);
    assert_eq!(DiagramType::Sequence.prev(), DiagramType::Flowchart);
}

#[test]
fn ids_round_trip_and_reject_unknown() {
    for ty in DiagramType::ALL {
        assert_eq!(DiagramType::from_id(ty.as_str()), Some(ty));
    }
    assert_eq!(DiagramType::from_id(" Sequence "), Some(DiagramType::Sequence));
    assert_eq!(DiagramType::from_id("gantt"), None);
}

#[test]
fn serde_uses_lowercase_ids() {
    let json = serde_json::to_string(&DiagramType::Sequence).unwrap();
    assert_eq!(json, "\"sequence\"");
    let back: DiagramType = serde_json::from_str("\"flowchart\"").unwrap();
    assert_eq!(back, DiagramType::Flowchart);
}

#[test]
fn default_templates_detect_as_their_own_type() {
    for ty in DiagramType::ALL {
        assert_eq!(detect(ty.default_template()), Some(ty));
    }
    assert_eq!(DiagramType::Sequence.display_name(), "Sequence Diagram");
    assert!(DiagramType::Flowchart.docs_url().ends_with("flowchart.html"));
}
