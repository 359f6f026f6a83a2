use super::*;

const F: DiagramType = DiagramType::Flowchart;
const S: DiagramType = DiagramType::Sequence;

#[test]
fn flowchart_structural_lines() {
    assert_eq!(classify("", F), LineKind::Blank);
    assert_eq!(classify("   ", F), LineKind::Blank);
    assert_eq!(classify("  %% note to self", F), LineKind::Comment);
    assert_eq!(classify("flowchart LR", F), LineKind::Header);
    assert_eq!(classify("graph TD", F), LineKind::Header);
    assert_eq!(classify("flowchart-elk TD", F), LineKind::Header);
    assert_eq!(classify("  subgraph api [API]", F), LineKind::BlockStart(BlockKind::Subgraph));
    assert_eq!(classify("  END  ", F), LineKind::BlockEnd);
    assert_eq!(classify("    direction TB", F), LineKind::Directive);
}

#[test]
fn flowchart_keywords_are_whole_words() {
    assert_eq!(classify("graphql --> api", F), LineKind::Statement);
    assert_eq!(classify("subgraphs --> x", F), LineKind::Statement);
    assert_eq!(classify("endpoint --> x", F), LineKind::Statement);
}

#[test]
fn flowchart_shaped_node_without_arrow_is_declaration() {
    assert_eq!(classify("  a[Start]", F), LineKind::Declaration);
    assert_eq!(classify("db[(Database)]", F), LineKind::Declaration);
    assert_eq!(classify("decide{Ok?}", F), LineKind::Declaration);
    assert_eq!(classify("flag>Flag]", F), LineKind::Declaration);
}

#[test]
fn flowchart_shaped_node_inside_edge_is_statement() {
    assert_eq!(classify("a[Start] --> b", F), LineKind::Statement);
    assert_eq!(classify("a --> b", F), LineKind::Statement);
    assert_eq!(classify("a(x) -.-> b", F), LineKind::Statement);
}

#[test]
fn sequence_lines() {
    assert_eq!(classify("sequenceDiagram", S), LineKind::Header);
    assert_eq!(classify("  Participant A as Alice", S), LineKind::Declaration);
    assert_eq!(classify("actor U", S), LineKind::Declaration);
    assert_eq!(classify("loop every minute", S), LineKind::BlockStart(BlockKind::Loop));
    assert_eq!(classify("rect rgb(0, 0, 0)", S), LineKind::BlockStart(BlockKind::Rect));
    assert_eq!(classify("and", S), LineKind::BlockStart(BlockKind::And));
    assert_eq!(classify("else failure", S), LineKind::BlockElse);
    assert_eq!(classify("end", S), LineKind::BlockEnd);
    assert_eq!(classify("Note over A,B: hi", S), LineKind::Note);
    assert_eq!(classify("autonumber", S), LineKind::Directive);
    assert_eq!(classify("A->>B: hi", S), LineKind::Statement);
}

#[test]
fn message_from_note_sender_is_a_statement() {
    assert_eq!(classify("Note ->> B: x", S), LineKind::Statement);
    assert_eq!(classify("note right of A: ->> later", S), LineKind::Note);
}

#[test]
fn sequence_header_must_be_exact() {
    assert_eq!(classify("sequenceDiagram autonumber", S), LineKind::Statement);
}

#[test]
fn sequence_keyword_prefixes_are_not_blocks() {
    assert_eq!(classify("loopback->>A: x", S), LineKind::Statement);
    assert_eq!(classify("elsewhere->>A: x", S), LineKind::Statement);
    assert_eq!(classify("participants->>A: x", S), LineKind::Statement);
}

#[test]
fn line_attributes() {
    let line = Line::new("\t  a --> b  ");
    assert_eq!(line.indent(), "\t  ");
    assert_eq!(line.body(), "a --> b");
    assert_eq!(indentation("no indent"), "");
    assert_eq!(indentation("    "), "    ");
}
