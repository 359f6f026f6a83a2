//! Whole-line and whole-document edits.

use tracing::debug;

use super::{ActionKind, EditPlan};
use crate::document::{Range, TextModel};
use crate::format::{FormatOptions, prettify_with};
use crate::snippet::Snippet;
use crate::swap::swap_arrow_direction;

/// Replace the line with its endpoints swapped; `None` when nothing changes.
#[must_use]
pub fn swap_line<M: TextModel + ?Sized>(model: &M, line_number: usize) -> Option<EditPlan> {
    let content = model.line_content(line_number);
    let swapped = swap_arrow_direction(content);
    if swapped == content {
        return None;
    }
    Some(EditPlan {
        source: ActionKind::SwapArrow,
        range: Range::whole_line(model, line_number),
        snippet: Snippet::plain(swapped),
    })
}

/// Insert a copy of the line directly below it.
#[must_use]
pub fn duplicate_line<M: TextModel + ?Sized>(model: &M, line_number: usize) -> EditPlan {
    let content = model.line_content(line_number);
    let trailing = if line_number == model.line_count() { "\n" } else { "" };
    EditPlan {
        source: ActionKind::DuplicateLine,
        range: Range::end_of_line(model, line_number),
        snippet: Snippet::plain(format!("\n{content}{trailing}")),
    }
}

/// Replace the document with its canonical form; `None` when already canonical
/// or the dialect is not recognized.
#[must_use]
pub fn prettify_document<M: TextModel + ?Sized>(model: &M, options: &FormatOptions) -> Option<EditPlan> {
    let current = model.value();
    let pretty = prettify_with(&current, options);
    if pretty == current {
        return None;
    }
    debug!(before = current.len(), after = pretty.len(), "prettify");
    Some(EditPlan {
        source: ActionKind::Prettify,
        range: Range::full(model),
        snippet: Snippet::plain(pretty),
    })
}

#[cfg(test)]
#[path = "edit_test.rs"]
mod tests;
