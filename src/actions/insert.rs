//! Insertion planners: new elements, arrows and message pairs.
//!
//! Every insertion lands at the end of an anchor line as `\n` + indentation +
//! content, so the anchor line itself is never rewritten. When the anchor is
//! the last line the text also ends with `\n`.

use tracing::debug;

use super::{ActionKind, EditPlan, SessionContext};
use crate::dialect::DiagramType;
use crate::document::{Range, TextModel};
use crate::patterns::{ACTION_VERB, REQUEST_VERB, SELECTED_MESSAGE};
use crate::query::{
    find_enclosing_subgraph, find_last_node_in_block, find_last_participant_line, generate_node_id,
    is_bare_identifier, nearest_indentation,
};
use crate::snippet::{Snippet, Transform, capitalize_first, title_case};

/// Insert a participant (sequence) or node (flowchart) after the last one.
///
/// A bare-identifier selection becomes the id verbatim with a derived label;
/// otherwise the id is an editable stop.
#[must_use]
pub fn new_element<M: TextModel + ?Sized>(
    model: &M,
    cursor_line: usize,
    selection: &str,
    ctx: &SessionContext,
) -> EditPlan {
    let reuse = is_bare_identifier(selection);
    match ctx.diagram_type {
        DiagramType::Sequence => {
            let (anchor, indent) = match find_last_participant_line(model) {
                Some(found) => (found.line, found.indent),
                None => (1, ctx.indent_unit.clone()),
            };
            debug!(anchor, reuse, "new participant");

            insert_after(model, ActionKind::NewElement, anchor, &indent, |s| {
                let s = s.text("participant ");
                if reuse {
                    s.text(format!("{selection} as {}", title_case(selection)))
                } else {
                    s.stop(1, "new_participant").text(" as ").mirror(1, Transform::TitleCase).finish()
                }
            })
        }
        DiagramType::Flowchart => {
            let block = find_enclosing_subgraph(model, cursor_line);
            let (first, last, fallback) = match &block {
                Some(b) => (b.start_line + 1, b.end_line - 1, format!("{}{}", b.indent, ctx.indent_unit)),
                None => (2, model.line_count(), ctx.indent_unit.clone()),
            };
            let (anchor, indent) = match (find_last_node_in_block(model, first, last), &block) {
                (Some(node), _) => (node.line, node.indent),
                (None, Some(b)) => (b.start_line, fallback),
                (None, None) => (1, fallback),
            };
            debug!(anchor, reuse, in_subgraph = block.is_some(), "new node");

            if reuse {
                let content = format!("{selection}({})", title_case(selection));
                return insert_after(model, ActionKind::NewElement, anchor, &indent, |s| s.text(content));
            }
            let id = generate_node_id(&model.value());
            insert_after(model, ActionKind::NewElement, anchor, &indent, |s| {
                s.stop(1, id).text("(").mirror(1, Transform::TitleCase).text(")").finish()
            })
        }
    }
}

/// Insert an arrow or message below the cursor line.
#[must_use]
pub fn new_arrow<M: TextModel + ?Sized>(
    model: &M,
    cursor_line: usize,
    selection: &str,
    ctx: &SessionContext,
) -> EditPlan {
    let source = Source::from_selection(selection);
    let next = source.first_free_stop();
    let indent = nearest_indentation(model, cursor_line, &ctx.indent_unit);
    debug!(anchor = cursor_line, reuse = source.is_selected(), "new arrow");

    insert_after(model, ActionKind::NewArrow, cursor_line, &indent, |s| {
        let s = source.write(s);
        match ctx.diagram_type {
            DiagramType::Sequence => s
                .text("->>")
                .stop(next, "B")
                .text(": ")
                .stop(next + 1, "message")
                .finish(),
            DiagramType::Flowchart => s.text(" --> ").stop(next, "B").finish(),
        }
    })
}

/// Insert a `Get` request and its reply, or only the reply to a selected message.
///
/// Sequence diagrams only.
#[must_use]
pub fn request_response<M: TextModel + ?Sized>(
    model: &M,
    cursor_line: usize,
    selection: &str,
    ctx: &SessionContext,
) -> Option<EditPlan> {
    message_pair(model, cursor_line, selection, ctx, ActionKind::RequestResponse)
}

/// Insert an action message and its `Success` reply, or only the reply to a
/// selected message.
///
/// Sequence diagrams only.
#[must_use]
pub fn action_response<M: TextModel + ?Sized>(
    model: &M,
    cursor_line: usize,
    selection: &str,
    ctx: &SessionContext,
) -> Option<EditPlan> {
    message_pair(model, cursor_line, selection, ctx, ActionKind::ActionResponse)
}

/// Reply text for a request: `Get user details` answers `User details`.
#[must_use]
pub fn request_reply(message: &str) -> String {
    match REQUEST_VERB.captures(message) {
        Some(caps) => capitalize_first(&caps[2]),
        None => capitalize_first(message),
    }
}

/// Reply text for an action: `Run migration` answers `Migration done`.
#[must_use]
pub fn action_reply(message: &str) -> String {
    match ACTION_VERB.captures(message) {
        Some(caps) => format!("{} done", capitalize_first(&caps[2])),
        None => "Result".to_owned(),
    }
}

fn message_pair<M: TextModel + ?Sized>(
    model: &M,
    cursor_line: usize,
    selection: &str,
    ctx: &SessionContext,
    kind: ActionKind,
) -> Option<EditPlan> {
    if ctx.diagram_type != DiagramType::Sequence {
        return None;
    }
    let indent = nearest_indentation(model, cursor_line, &ctx.indent_unit);

    if let Some(caps) = SELECTED_MESSAGE.captures(selection) {
        let (from, to, message) = (&caps[1], &caps[3], &caps[4]);
        let reply = match kind {
            ActionKind::ActionResponse => action_reply(message),
            _ => request_reply(message),
        };
        debug!(action = kind.id(), anchor = cursor_line, %reply, "reply to selected message");
        return Some(insert_after(model, kind, cursor_line, &indent, |s| {
            s.text(format!("{to}->>{from}: {reply}")).finish()
        }));
    }

    let source = Source::from_selection(selection);
    let dest = source.first_free_stop();
    let body = dest + 1;
    debug!(action = kind.id(), anchor = cursor_line, reuse = source.is_selected(), "message pair");

    Some(insert_after(model, kind, cursor_line, &indent, |s| {
        let s = source.write(s).text("->>").stop(dest, "B").text(": ");
        let s = match kind {
            ActionKind::ActionResponse => s.stop(body, "Perform"),
            _ => s.text("Get ").stop(body, "entity"),
        };
        let s = source.write(s.text(format!("\n{indent}")).stop(dest, "B").text("->>")).text(": ");
        match kind {
            ActionKind::ActionResponse => s.text("Success").finish(),
            _ => s.mirror(body, Transform::CapitalizeFirst).finish(),
        }
    }))
}

/// Source endpoint of an inserted message.
#[derive(Debug, Clone, Copy)]
enum Source<'a> {
    Selected(&'a str),
    Placeholder,
}

impl<'a> Source<'a> {
    fn from_selection(selection: &'a str) -> Self {
        if is_bare_identifier(selection) { Self::Selected(selection) } else { Self::Placeholder }
    }

    fn is_selected(self) -> bool {
        matches!(self, Self::Selected(_))
    }

    /// Stop numbering for the remaining placeholders starts here.
    fn first_free_stop(self) -> u32 {
        match self {
            Self::Selected(_) => 1,
            Self::Placeholder => 2,
        }
    }

    fn write(self, snippet: Snippet) -> Snippet {
        match self {
            Self::Selected(id) => snippet.text(id),
            Self::Placeholder => snippet.stop(1, "A"),
        }
    }
}

fn insert_after<M: TextModel + ?Sized>(
    model: &M,
    source: ActionKind,
    anchor: usize,
    indent: &str,
    content: impl FnOnce(Snippet) -> Snippet,
) -> EditPlan {
    let snippet = content(Snippet::new().text(format!("\n{indent}")));
    let snippet = if anchor == model.line_count() { snippet.text("\n") } else { snippet };
    EditPlan { source, range: Range::end_of_line(model, anchor), snippet }
}

#[cfg(test)]
#[path = "insert_test.rs"]
mod tests;
