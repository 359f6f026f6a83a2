//! Read-only document view consumed by the structural queries and planners.
//!
//! Lines and columns are 1-based, matching the editing surface. Columns count
//! characters, not bytes.

use serde::{Deserialize, Serialize};

/// Minimal read-only view over a document owned by the editing surface.
pub trait TextModel {
    /// Total number of lines.
    fn line_count(&self) -> usize;

    /// Content of a 1-based line, without its line terminator.
    fn line_content(&self, line_number: usize) -> &str;

    /// Full document text, lines joined with `\n`.
    fn value(&self) -> String {
        (1..=self.line_count())
            .map(|n| self.line_content(n))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A [`TextModel`] over borrowed text.
///
/// A trailing newline yields a final empty line, as in an editor buffer.
/// `\r\n` terminators are accepted and stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer<'a> {
    lines: Vec<&'a str>,
}

impl<'a> TextBuffer<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let lines = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        Self { lines }
    }
}

impl TextModel for TextBuffer<'_> {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Out-of-range lines read as empty.
    fn line_content(&self, line_number: usize) -> &str {
        line_number
            .checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .copied()
            .unwrap_or_default()
    }
}

/// A 1-based cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A 1-based replacement range; `start == end` is an insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Range {
    /// Zero-width range just past the last character of `line_number`.
    #[must_use]
    pub fn end_of_line(model: &(impl TextModel + ?Sized), line_number: usize) -> Self {
        let column = line_end_column(model, line_number);
        Self { start_line: line_number, start_column: column, end_line: line_number, end_column: column }
    }

    /// The whole content of one line, excluding its terminator.
    #[must_use]
    pub fn whole_line(model: &(impl TextModel + ?Sized), line_number: usize) -> Self {
        Self {
            start_line: line_number,
            start_column: 1,
            end_line: line_number,
            end_column: line_end_column(model, line_number),
        }
    }

    /// The full document.
    #[must_use]
    pub fn full(model: &(impl TextModel + ?Sized)) -> Self {
        let last = model.line_count().max(1);
        Self { start_line: 1, start_column: 1, end_line: last, end_column: line_end_column(model, last) }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_line == self.end_line && self.start_column == self.end_column
    }
}

fn line_end_column(model: &(impl TextModel + ?Sized), line_number: usize) -> usize {
    model.line_content(line_number).chars().count() + 1
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
