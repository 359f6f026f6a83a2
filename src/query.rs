//! Read-only structural scans over a [`TextModel`].
//!
//! Every query is an independent pass over the document; nothing is cached
//! between calls. "Not found" is always an explicit `None`.

use std::collections::HashSet;

use serde::Serialize;

use crate::classify::{BlockKind, Line, LineKind, indentation};
use crate::dialect::DiagramType;
use crate::document::TextModel;
use crate::patterns::{BARE_IDENTIFIER, PARTICIPANT_LINE, TEMP_ID};

/// A closed block: the lines of its opening and closing markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub start_line: usize,
    pub end_line: usize,
    /// Indentation of the opening line.
    pub indent: String,
    pub kind: BlockKind,
}

/// A located line and its indentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRef {
    pub line: usize,
    pub indent: String,
}

/// Indentation of the closest line at or above `from_line` whose leading
/// whitespace is non-empty, or `fallback` when every such line is flush left.
#[must_use]
pub fn nearest_indentation<M: TextModel + ?Sized>(model: &M, from_line: usize, fallback: &str) -> String {
    (1..=from_line.min(model.line_count()))
        .rev()
        .map(|n| indentation(model.line_content(n)))
        .find(|indent| !indent.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

/// Innermost closed block that strictly contains `line_number`.
///
/// Blocks still open at the end of the document are never reported, and
/// `end` markers with nothing open are ignored.
#[must_use]
pub fn find_enclosing_block<M: TextModel + ?Sized>(
    model: &M,
    line_number: usize,
    dialect: DiagramType,
) -> Option<Block> {
    let mut stack: Vec<(usize, String, BlockKind)> = Vec::new();
    let mut enclosing: Option<Block> = None;

    for n in 1..=model.line_count() {
        let line = Line::new(model.line_content(n));
        match line.classify(dialect) {
            // `and` separates branches once a block is open.
            LineKind::BlockStart(BlockKind::And) if !stack.is_empty() => {}
            LineKind::BlockStart(kind) => stack.push((n, line.indent().to_owned(), kind)),
            LineKind::BlockEnd => {
                let Some((start, indent, kind)) = stack.pop() else {
                    continue;
                };
                let contains = start < line_number && line_number < n;
                if contains && enclosing.as_ref().is_none_or(|b| start > b.start_line) {
                    enclosing = Some(Block { start_line: start, end_line: n, indent, kind });
                }
            }
            _ => {}
        }
    }

    enclosing
}

/// Innermost `subgraph … end` around `line_number` in a flowchart.
#[must_use]
pub fn find_enclosing_subgraph<M: TextModel + ?Sized>(model: &M, line_number: usize) -> Option<Block> {
    find_enclosing_block(model, line_number, DiagramType::Flowchart)
}

/// Last shaped node declaration in `start..=end`, ignoring nested subgraphs.
///
/// A line counts only if it is a bare declaration such as `a[Label]`; edges
/// that merely mention a shaped node are skipped.
#[must_use]
pub fn find_last_node_in_block<M: TextModel + ?Sized>(model: &M, start: usize, end: usize) -> Option<LineRef> {
    let mut last = None;
    let mut nested = 0usize;

    for n in start..=end {
        let line = Line::new(model.line_content(n));
        match line.classify(DiagramType::Flowchart) {
            LineKind::BlockStart(_) => nested += 1,
            LineKind::BlockEnd if nested > 0 => nested -= 1,
            LineKind::Declaration if nested == 0 => {
                last = Some(LineRef { line: n, indent: line.indent().to_owned() });
            }
            _ => {}
        }
    }

    last
}

/// Last `participant` or `actor` line, scanning up from the end.
#[must_use]
pub fn find_last_participant_line<M: TextModel + ?Sized>(model: &M) -> Option<LineRef> {
    (1..=model.line_count()).rev().find_map(|n| {
        let content = model.line_content(n);
        PARTICIPANT_LINE
            .is_match(content)
            .then(|| LineRef { line: n, indent: indentation(content).to_owned() })
    })
}

/// Smallest `tempN` (N ≥ 1) not already present in `code`.
#[must_use]
pub fn generate_node_id(code: &str) -> String {
    let mut taken = HashSet::new();
    for caps in TEMP_ID.captures_iter(code) {
        // Suffixes too large for u64 can never collide with a generated id.
        if let Ok(n) = caps[1].parse::<u64>() {
            taken.insert(n);
        }
    }

    let mut n: u64 = 1;
    while taken.contains(&n) {
        n += 1;
    }
    format!("temp{n}")
}

/// Letters, digits and underscores, not starting with a digit.
#[must_use]
pub fn is_bare_identifier(text: &str) -> bool {
    BARE_IDENTIFIER.is_match(text)
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
