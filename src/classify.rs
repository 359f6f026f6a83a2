//! Line classification for both dialects.
//!
//! Each dialect owns an ordered rule table; the first rule that recognizes a
//! line decides its kind. Order matters where a line could be read two ways
//! (an `end` is never a statement, a shaped node that also carries an arrow is
//! an edge), so tables are evaluated strictly top to bottom.

use serde::Serialize;

use crate::dialect::DiagramType;
use crate::patterns::{EDGE_TOKEN, NODE_SHAPE, SEQ_MESSAGE};

/// Kind of a nested block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Subgraph,
    Loop,
    Alt,
    Opt,
    Par,
    And,
    Critical,
    Break,
    Rect,
}

impl BlockKind {
    /// Sequence keywords that open an indented region.
    pub const SEQUENCE_STARTERS: [BlockKind; 8] = [
        BlockKind::Loop,
        BlockKind::Alt,
        BlockKind::Opt,
        BlockKind::Par,
        BlockKind::And,
        BlockKind::Critical,
        BlockKind::Break,
        BlockKind::Rect,
    ];

    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Subgraph => "subgraph",
            Self::Loop => "loop",
            Self::Alt => "alt",
            Self::Opt => "opt",
            Self::Par => "par",
            Self::And => "and",
            Self::Critical => "critical",
            Self::Break => "break",
            Self::Rect => "rect",
        }
    }
}

/// Classification tag of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Blank,
    /// `%%` comment.
    Comment,
    /// Diagram header (`flowchart LR`, `graph TD`, `sequenceDiagram`).
    Header,
    /// Layout directive that is never rewritten (`direction TB`, `autonumber`).
    Directive,
    BlockStart(BlockKind),
    BlockEnd,
    /// `else` branch separator.
    BlockElse,
    /// Flowchart shaped node or sequence participant/actor.
    Declaration,
    Note,
    Statement,
}

/// A line with its derived attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    raw: &'a str,
    body: &'a str,
    lower: String,
}

impl<'a> Line<'a> {
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        let body = raw.trim();
        Self { raw, body, lower: body.to_lowercase() }
    }

    /// Leading whitespace, verbatim.
    #[must_use]
    pub fn indent(&self) -> &'a str {
        indentation(self.raw)
    }

    /// The line with surrounding whitespace removed.
    #[must_use]
    pub fn body(&self) -> &'a str {
        self.body
    }

    #[must_use]
    pub fn classify(&self, dialect: DiagramType) -> LineKind {
        rules(dialect)
            .iter()
            .find_map(|rule| rule(self))
            .unwrap_or(LineKind::Statement)
    }

    fn starts_with_word(&self, word: &str) -> bool {
        starts_with_word(&self.lower, word)
    }
}

/// Classify a raw line.
#[must_use]
pub fn classify(raw: &str, dialect: DiagramType) -> LineKind {
    Line::new(raw).classify(dialect)
}

/// Leading whitespace run of a line.
#[must_use]
pub fn indentation(line: &str) -> &str {
    let end = line.len() - line.trim_start().len();
    &line[..end]
}

/// A shaped node declaration such as `a[Label]` that is not part of an edge.
#[must_use]
pub fn is_node_declaration(line: &str) -> bool {
    NODE_SHAPE.is_match(line) && !EDGE_TOKEN.is_match(line)
}

type Rule = fn(&Line<'_>) -> Option<LineKind>;

const FLOWCHART_RULES: &[Rule] = &[
    blank,
    comment,
    flowchart_header,
    block_end,
    subgraph,
    flowchart_direction,
    node_declaration,
];

const SEQUENCE_RULES: &[Rule] = &[
    blank,
    comment,
    sequence_header,
    participant,
    block_end,
    block_else,
    sequence_block_start,
    sequence_directive,
    note,
];

fn rules(dialect: DiagramType) -> &'static [Rule] {
    match dialect {
        DiagramType::Flowchart => FLOWCHART_RULES,
        DiagramType::Sequence => SEQUENCE_RULES,
    }
}

fn blank(line: &Line<'_>) -> Option<LineKind> {
    line.body.is_empty().then_some(LineKind::Blank)
}

fn comment(line: &Line<'_>) -> Option<LineKind> {
    line.body.starts_with("%%").then_some(LineKind::Comment)
}

fn block_end(line: &Line<'_>) -> Option<LineKind> {
    (line.lower == "end").then_some(LineKind::BlockEnd)
}

fn flowchart_header(line: &Line<'_>) -> Option<LineKind> {
    // `flowchart-elk` names a layout variant of the same dialect.
    let header = line.starts_with_word("flowchart")
        || line.starts_with_word("graph")
        || line.lower.starts_with("flowchart-");
    header.then_some(LineKind::Header)
}

fn subgraph(line: &Line<'_>) -> Option<LineKind> {
    line.starts_with_word("subgraph")
        .then_some(LineKind::BlockStart(BlockKind::Subgraph))
}

fn flowchart_direction(line: &Line<'_>) -> Option<LineKind> {
    line.starts_with_word("direction").then_some(LineKind::Directive)
}

fn node_declaration(line: &Line<'_>) -> Option<LineKind> {
    is_node_declaration(line.body).then_some(LineKind::Declaration)
}

fn sequence_header(line: &Line<'_>) -> Option<LineKind> {
    (line.lower == "sequencediagram").then_some(LineKind::Header)
}

fn participant(line: &Line<'_>) -> Option<LineKind> {
    (line.lower.starts_with("participant ") || line.lower.starts_with("actor ")).then_some(LineKind::Declaration)
}

fn block_else(line: &Line<'_>) -> Option<LineKind> {
    line.starts_with_word("else").then_some(LineKind::BlockElse)
}

fn sequence_block_start(line: &Line<'_>) -> Option<LineKind> {
    BlockKind::SEQUENCE_STARTERS
        .into_iter()
        .find(|kind| line.starts_with_word(kind.keyword()))
        .map(LineKind::BlockStart)
}

fn sequence_directive(line: &Line<'_>) -> Option<LineKind> {
    ["autonumber", "activate", "deactivate", "title"]
        .into_iter()
        .any(|word| line.starts_with_word(word))
        .then_some(LineKind::Directive)
}

/// Message lines win over notes, so a sender named `Note` stays a message.
fn note(line: &Line<'_>) -> Option<LineKind> {
    (line.starts_with_word("note") && !SEQ_MESSAGE.is_match(line.body)).then_some(LineKind::Note)
}

/// `keyword` followed by whitespace or end of line.
fn starts_with_word(lower: &str, word: &str) -> bool {
    lower
        .strip_prefix(word)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
