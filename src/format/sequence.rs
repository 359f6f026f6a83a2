//! Sequence diagram formatter.
//!
//! Output has three regions: the header, every participant/actor declaration
//! in source order, then the body. Body nesting starts at depth 1.

use tracing::debug;

use super::{Depth, FormatOptions, Output};
use crate::classify::{BlockKind, Line, LineKind};
use crate::dialect::DiagramType;
use crate::patterns::{DECLARATION, NOTE, SEQ_MESSAGE};

const HEADER: &str = "sequenceDiagram";

/// Ordered lines with at most one blank separator between entries and none
/// before the first.
struct Region<T> {
    items: Vec<Option<T>>,
    pending_blank: bool,
}

impl<T> Region<T> {
    fn new() -> Self {
        Self { items: Vec::new(), pending_blank: false }
    }

    fn mark_blank(&mut self) {
        self.pending_blank = true;
    }

    fn push(&mut self, item: T) {
        if self.pending_blank && !self.items.is_empty() {
            self.items.push(None);
        }
        self.pending_blank = false;
        self.items.push(Some(item));
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[must_use]
pub fn format(code: &str, options: &FormatOptions) -> String {
    let mut declarations: Region<String> = Region::new();
    let mut body: Region<(LineKind, &str)> = Region::new();

    for raw in code.lines() {
        let line = Line::new(raw);
        match line.classify(DiagramType::Sequence) {
            LineKind::Header => {}
            LineKind::Blank => {
                declarations.mark_blank();
                body.mark_blank();
            }
            LineKind::Declaration => declarations.push(normalize_declaration(line.body())),
            kind => body.push((kind, line.body())),
        }
    }

    let mut out = Output::new(options);
    out.push(0, HEADER);

    for item in &declarations.items {
        match item {
            Some(text) => out.push(1, text),
            None => out.blank(),
        }
    }

    if !declarations.is_empty() && !body.is_empty() {
        out.blank();
    }

    let mut depth = Depth::new(1);
    for item in &body.items {
        let Some((kind, text)) = item else {
            out.blank();
            continue;
        };
        match kind {
            LineKind::BlockEnd => {
                depth.close();
                out.push(depth.level(), text);
            }
            LineKind::BlockElse => out.push(depth.shallower(), text),
            LineKind::BlockStart(BlockKind::And) if depth.in_block() => out.push(depth.shallower(), text),
            LineKind::BlockStart(_) => {
                out.push(depth.level(), text);
                depth.open();
            }
            LineKind::Statement => out.push(depth.level(), &normalize_message(text)),
            LineKind::Note => out.push(depth.level(), &normalize_note(text)),
            _ => out.push(depth.level(), text),
        }
    }

    let text = out.finish();
    debug!(
        declarations = declarations.items.iter().flatten().count(),
        body_lines = body.items.iter().flatten().count(),
        "formatted sequence diagram"
    );
    text
}

/// `Participant  a   as  Alice ` → `participant a as Alice`.
#[must_use]
pub fn normalize_declaration(line: &str) -> String {
    let Some(caps) = DECLARATION.captures(line) else {
        return line.to_owned();
    };
    let keyword = caps[1].to_lowercase();
    let id = &caps[2];
    match caps.get(3) {
        Some(alias) => format!("{keyword} {id} as {}", alias.as_str().trim()),
        None => format!("{keyword} {id}"),
    }
}

/// `a ->> b :  hi ` → `a->>b: hi`.
#[must_use]
pub fn normalize_message(line: &str) -> String {
    let Some(caps) = SEQ_MESSAGE.captures(line) else {
        return line.to_owned();
    };
    let joined = format!("{}{}{}: {}", &caps[1], &caps[2], &caps[3], caps[4].trim());
    joined.trim_end().to_owned()
}

/// `NOTE Right Of a:  text` → `note right of a: text`.
#[must_use]
pub fn normalize_note(line: &str) -> String {
    let Some(caps) = NOTE.captures(line) else {
        return line.to_owned();
    };
    let joined = format!(
        "{} {} {}: {}",
        caps[1].to_lowercase(),
        caps[2].to_lowercase(),
        caps[3].trim(),
        caps[4].trim()
    );
    joined.trim_end().to_owned()
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod tests;
