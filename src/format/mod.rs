//! Canonical pretty-printing of diagram source.
//!
//! Formatting is a pure function of the input text and [`FormatOptions`]; it
//! never fails, preserves line order, and is a fixed point once applied.
//! Text in an unrecognized dialect is returned unchanged.

pub mod flowchart;
pub mod sequence;

use crate::dialect::{DiagramType, detect};

pub const DEFAULT_INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Whitespace emitted per nesting level.
    pub indent_unit: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::with_width(DEFAULT_INDENT_WIDTH)
    }
}

impl FormatOptions {
    /// Indent with `width` spaces per level.
    #[must_use]
    pub fn with_width(width: usize) -> Self {
        Self { indent_unit: " ".repeat(width) }
    }
}

/// Format with the default two-space indent.
#[must_use]
pub fn prettify(code: &str) -> String {
    prettify_with(code, &FormatOptions::default())
}

/// Detect the dialect and route to its formatter.
#[must_use]
pub fn prettify_with(code: &str, options: &FormatOptions) -> String {
    match detect(code) {
        Some(DiagramType::Flowchart) => flowchart::format(code, options),
        Some(DiagramType::Sequence) => sequence::format(code, options),
        None => code.to_owned(),
    }
}

/// Nesting depth that never drops below its floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Depth {
    level: usize,
    floor: usize,
}

impl Depth {
    pub(crate) fn new(floor: usize) -> Self {
        Self { level: floor, floor }
    }

    pub(crate) fn level(self) -> usize {
        self.level
    }

    pub(crate) fn set(&mut self, level: usize) {
        self.level = level.max(self.floor);
    }

    pub(crate) fn open(&mut self) {
        self.level += 1;
    }

    /// Leave one level; excess closes are absorbed by the floor.
    pub(crate) fn close(&mut self) {
        self.level = self.shallower();
    }

    /// One level up from the current depth, bounded by the floor.
    pub(crate) fn shallower(self) -> usize {
        self.level.saturating_sub(1).max(self.floor)
    }

    pub(crate) fn in_block(self) -> bool {
        self.level > self.floor
    }
}

/// Output lines with single-blank collapsing and a single trailing newline.
pub(crate) struct Output<'a> {
    unit: &'a str,
    lines: Vec<String>,
}

impl<'a> Output<'a> {
    pub(crate) fn new(options: &'a FormatOptions) -> Self {
        Self { unit: &options.indent_unit, lines: Vec::new() }
    }

    pub(crate) fn push(&mut self, depth: usize, text: &str) {
        self.lines.push(format!("{}{text}", self.unit.repeat(depth)));
    }

    /// A blank line, dropped at the start and after another blank.
    pub(crate) fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
    }

    pub(crate) fn finish(mut self) -> String {
        while self.lines.last().is_some_and(String::is_empty) {
            self.lines.pop();
        }
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
