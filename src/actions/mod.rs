//! Editor actions: insertion planners and line edits.
//!
//! DESIGN
//! ======
//! Every action is a pure function of (document, cursor, selection,
//! [`SessionContext`]) that returns an [`ActionOutcome`]. Nothing is applied
//! here: the editing surface applies an [`EditPlan`] as one replacement, and
//! reacts to [`ActionOutcome::SwitchDiagram`] by swapping its own state.

pub mod edit;
pub mod insert;

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::dialect::DiagramType;
use crate::document::{Position, Range, TextModel};
use crate::format::{DEFAULT_INDENT_WIDTH, FormatOptions};
use crate::snippet::{Snippet, TabStop};

// =============================================================================
// SESSION CONTEXT
// =============================================================================

/// Immutable per-call context supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub diagram_type: DiagramType,
    /// Whitespace for one nesting level when no indentation can be inferred.
    pub indent_unit: String,
}

impl SessionContext {
    #[must_use]
    pub fn new(diagram_type: DiagramType) -> Self {
        Self { diagram_type, indent_unit: " ".repeat(DEFAULT_INDENT_WIDTH) }
    }

    #[must_use]
    pub fn with_indent_unit(mut self, indent_unit: impl Into<String>) -> Self {
        self.indent_unit = indent_unit.into();
        self
    }

    #[must_use]
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions { indent_unit: self.indent_unit.clone() }
    }
}

// =============================================================================
// ACTION KINDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    NewElement,
    NewArrow,
    RequestResponse,
    ActionResponse,
    SwapArrow,
    DuplicateLine,
    Prettify,
    NextDiagramType,
    #[serde(rename = "previous-diagram-type")]
    PrevDiagramType,
}

impl ActionKind {
    pub const ALL: [ActionKind; 9] = [
        ActionKind::NewElement,
        ActionKind::NewArrow,
        ActionKind::RequestResponse,
        ActionKind::ActionResponse,
        ActionKind::SwapArrow,
        ActionKind::DuplicateLine,
        ActionKind::Prettify,
        ActionKind::NextDiagramType,
        ActionKind::PrevDiagramType,
    ];

    /// Stable identifier used by hosts and the command line.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::NewElement => "new-element",
            Self::NewArrow => "new-arrow",
            Self::RequestResponse => "request-response",
            Self::ActionResponse => "action-response",
            Self::SwapArrow => "swap-arrow",
            Self::DuplicateLine => "duplicate-line",
            Self::Prettify => "prettify",
            Self::NextDiagramType => "next-diagram-type",
            Self::PrevDiagramType => "previous-diagram-type",
        }
    }

    #[must_use]
    pub fn from_id(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|kind| kind.id().eq_ignore_ascii_case(raw))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NewElement => "New Element",
            Self::NewArrow => "New Arrow",
            Self::RequestResponse => "Request-Response",
            Self::ActionResponse => "Action-Response",
            Self::SwapArrow => "Swap Arrow Direction",
            Self::DuplicateLine => "Duplicate Line",
            Self::Prettify => "Prettify Code",
            Self::NextDiagramType => "Next Diagram Type",
            Self::PrevDiagramType => "Previous Diagram Type",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::NewElement => "Insert a new node (flowchart) or participant (sequence)",
            Self::NewArrow => "Insert an arrow template",
            Self::RequestResponse => "Insert a request-response pair (sequence diagrams)",
            Self::ActionResponse => "Insert an action-response pair (sequence diagrams)",
            Self::SwapArrow => "Swap source and destination in the current line",
            Self::DuplicateLine => "Duplicate the current line",
            Self::Prettify => "Reformat the whole document",
            Self::NextDiagramType => "Switch to the next diagram type",
            Self::PrevDiagramType => "Switch to the previous diagram type",
        }
    }

    /// Id, label and description together, for hosts building a menu.
    #[must_use]
    pub fn info(self) -> ActionInfo {
        ActionInfo { id: self.id(), label: self.label(), description: self.description() }
    }

    /// Whether the action does anything in `dialect`.
    #[must_use]
    pub fn applies_to(self, dialect: DiagramType) -> bool {
        match self {
            Self::RequestResponse | Self::ActionResponse => dialect == DiagramType::Sequence,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// =============================================================================
// OUTCOMES
// =============================================================================

/// A single replacement for the editing surface to apply atomically.
///
/// An empty `range` is an insertion point. When the snippet carries stops the
/// host should enter its placeholder mode with the first stop selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPlan {
    pub source: ActionKind,
    pub range: Range,
    pub snippet: Snippet,
}

impl EditPlan {
    /// Replacement text with every stop at its default.
    #[must_use]
    pub fn text(&self) -> String {
        self.snippet.to_text()
    }

    #[must_use]
    pub fn template(&self) -> String {
        self.snippet.to_template()
    }

    #[must_use]
    pub fn stops(&self) -> Vec<TabStop> {
        self.snippet.tab_stops()
    }
}

#[derive(Serialize)]
struct EditPlanWire {
    source: ActionKind,
    range: Range,
    text: String,
    template: String,
    stops: Vec<TabStop>,
}

impl Serialize for EditPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EditPlanWire {
            source: self.source,
            range: self.range,
            text: self.text(),
            template: self.template(),
            stops: self.stops(),
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum ActionOutcome {
    Edit(EditPlan),
    /// The host should switch its active diagram type.
    SwitchDiagram(DiagramType),
    Nothing,
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Run `action` against a document snapshot.
///
/// `selection` is the selected text, empty when nothing is selected.
#[must_use]
pub fn run<M: TextModel + ?Sized>(
    action: ActionKind,
    model: &M,
    cursor: Position,
    selection: &str,
    ctx: &SessionContext,
) -> ActionOutcome {
    if !action.applies_to(ctx.diagram_type) {
        debug!(action = action.id(), dialect = %ctx.diagram_type, "action not applicable");
        return ActionOutcome::Nothing;
    }

    let line = cursor.line;
    let plan = match action {
        ActionKind::NewElement => Some(insert::new_element(model, line, selection, ctx)),
        ActionKind::NewArrow => Some(insert::new_arrow(model, line, selection, ctx)),
        ActionKind::RequestResponse => insert::request_response(model, line, selection, ctx),
        ActionKind::ActionResponse => insert::action_response(model, line, selection, ctx),
        ActionKind::SwapArrow => edit::swap_line(model, line),
        ActionKind::DuplicateLine => Some(edit::duplicate_line(model, line)),
        ActionKind::Prettify => edit::prettify_document(model, &ctx.format_options()),
        ActionKind::NextDiagramType => return ActionOutcome::SwitchDiagram(ctx.diagram_type.next()),
        ActionKind::PrevDiagramType => return ActionOutcome::SwitchDiagram(ctx.diagram_type.prev()),
    };

    match plan {
        Some(plan) => ActionOutcome::Edit(plan),
        None => {
            debug!(action = action.id(), line, "no edit");
            ActionOutcome::Nothing
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
