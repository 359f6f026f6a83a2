use super::*;
use crate::document::TextBuffer;

const SEQ: &str = "sequenceDiagram\n  participant A\n  A->>B: hi";

#[test]
fn action_ids_round_trip() {
    for kind in ActionKind::ALL {
        assert_eq!(ActionKind::from_id(kind.id()), Some(kind));
        assert_eq!(serde_json::to_value(kind).expect("json"), kind.id());
    }
    assert_eq!(ActionKind::from_id(" Swap-Arrow "), Some(ActionKind::SwapArrow));
    assert_eq!(ActionKind::from_id("undo"), None);
}

#[test]
fn pair_actions_are_sequence_only() {
    assert!(ActionKind::RequestResponse.applies_to(DiagramType::Sequence));
    assert!(!ActionKind::ActionResponse.applies_to(DiagramType::Flowchart));
    assert!(ActionKind::NewElement.applies_to(DiagramType::Flowchart));

    let model = TextBuffer::new("flowchart LR\n  a --> b");
    let ctx = SessionContext::new(DiagramType::Flowchart);
    assert_eq!(
        run(ActionKind::RequestResponse, &model, Position::new(2, 1), "", &ctx),
        ActionOutcome::Nothing
    );
}

#[test]
fn run_dispatches_to_planners() {
    let model = TextBuffer::new(SEQ);
    let ctx = SessionContext::new(DiagramType::Sequence);

    let ActionOutcome::Edit(plan) = run(ActionKind::NewArrow, &model, Position::new(3, 4), "", &ctx) else {
        panic!("expected an edit");
    };
    assert_eq!(plan.source, ActionKind::NewArrow);
    assert_eq!(plan.range, Range::end_of_line(&model, 3));

    let ActionOutcome::Edit(swap) = run(ActionKind::SwapArrow, &model, Position::new(3, 1), "", &ctx) else {
        panic!("expected an edit");
    };
    assert_eq!(swap.text(), "  B->>A: hi");
}

#[test]
fn unchanged_lines_produce_nothing() {
    let model = TextBuffer::new(SEQ);
    let ctx = SessionContext::new(DiagramType::Sequence);
    assert_eq!(run(ActionKind::SwapArrow, &model, Position::new(2, 1), "", &ctx), ActionOutcome::Nothing);
}

#[test]
fn diagram_cycling_wraps_around() {
    let model = TextBuffer::new("");
    let ctx = SessionContext::new(DiagramType::Sequence);
    let at = Position::new(1, 1);
    assert_eq!(
        run(ActionKind::NextDiagramType, &model, at, "", &ctx),
        ActionOutcome::SwitchDiagram(DiagramType::Flowchart)
    );
    assert_eq!(
        run(ActionKind::PrevDiagramType, &model, at, "", &ctx),
        ActionOutcome::SwitchDiagram(DiagramType::Flowchart)
    );
}

#[test]
fn prettify_uses_session_indent() {
    let model = TextBuffer::new("flowchart LR\na-->b");
    let ctx = SessionContext::new(DiagramType::Flowchart).with_indent_unit("    ");
    let ActionOutcome::Edit(plan) = run(ActionKind::Prettify, &model, Position::new(1, 1), "", &ctx) else {
        panic!("expected an edit");
    };
    assert_eq!(plan.text(), "flowchart LR\n    a --> b\n");
}

#[test]
fn outcome_json_shape() {
    let model = TextBuffer::new("flowchart LR");
    let ctx = SessionContext::new(DiagramType::Flowchart);
    let outcome = run(ActionKind::NewElement, &model, Position::new(1, 1), "", &ctx);
    let json = serde_json::to_value(&outcome).expect("json");

    assert_eq!(json["outcome"], "edit");
    let detail = &json["detail"];
    assert_eq!(detail["source"], "new-element");
    assert_eq!(detail["range"]["startLine"], 1);
    assert_eq!(detail["range"]["startColumn"], 13);
    assert_eq!(detail["text"], "\n  temp1(Temp1)\n");
    assert_eq!(detail["stops"][0]["default"], "temp1");
    assert_eq!(detail["stops"][0]["start"], 3);

    let switch = serde_json::to_value(ActionOutcome::SwitchDiagram(DiagramType::Sequence)).expect("json");
    assert_eq!(switch, serde_json::json!({ "outcome": "switch_diagram", "detail": "sequence" }));
    let nothing = serde_json::to_value(ActionOutcome::Nothing).expect("json");
    assert_eq!(nothing, serde_json::json!({ "outcome": "nothing" }));
}

#[test]
fn action_info_lists_labels_and_descriptions() {
    let info = ActionKind::SwapArrow.info();
    assert_eq!(info.id, "swap-arrow");
    assert_eq!(info.label, "Swap Arrow Direction");
    assert_eq!(info.description, "Swap source and destination in the current line");
    for kind in ActionKind::ALL {
        assert!(!kind.label().is_empty(), "{kind} has no label");
        assert!(!kind.description().is_empty(), "{kind} has no description");
    }

    let json = serde_json::to_value(ActionKind::PrevDiagramType.info()).expect("json");
    assert_eq!(
        json,
        serde_json::json!({
            "id": "previous-diagram-type",
            "label": "Previous Diagram Type",
            "description": "Switch to the previous diagram type",
        })
    );
}
