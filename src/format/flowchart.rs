//! Flowchart formatter.
//!
//! One top-to-bottom pass. The header resets depth to 1, `subgraph` opens a
//! level after it is emitted, `end` closes one before. Edge statements get
//! single spaces around their arrow.

use std::borrow::Cow;

use tracing::debug;

use super::{Depth, FormatOptions, Output};
use crate::classify::{Line, LineKind};
use crate::dialect::DiagramType;
use crate::patterns::FLOW_EDGE;

#[must_use]
pub fn format(code: &str, options: &FormatOptions) -> String {
    let mut out = Output::new(options);
    let mut depth = Depth::new(0);

    for raw in code.lines() {
        let line = Line::new(raw);
        let body = line.body();
        match line.classify(DiagramType::Flowchart) {
            LineKind::Blank => out.blank(),
            LineKind::Header => {
                out.push(0, body);
                depth.set(1);
            }
            LineKind::BlockEnd => {
                depth.close();
                out.push(depth.level(), body);
            }
            LineKind::BlockStart(_) => {
                out.push(depth.level(), body);
                depth.open();
            }
            LineKind::Comment | LineKind::Directive => out.push(depth.level(), body),
            _ => out.push(depth.level(), &normalize_edge(body)),
        }
    }

    let text = out.finish();
    debug!(bytes_in = code.len(), bytes_out = text.len(), "formatted flowchart");
    text
}

/// Normalize spacing around the arrow of an edge statement.
///
/// `a-->b` becomes `a --> b`; `a -->|yes|  b` becomes `a -->|yes| b`. Lines
/// that are not edges are returned as-is.
#[must_use]
pub fn normalize_edge(line: &str) -> Cow<'_, str> {
    let Some(caps) = FLOW_EDGE.captures(line) else {
        return Cow::Borrowed(line);
    };

    let source = &caps[1];
    let arrow = &caps[2];
    let target = caps[4].trim();
    match caps.get(3) {
        Some(label) => Cow::Owned(format!("{source} {arrow}{} {target}", label.as_str())),
        None => Cow::Owned(format!("{source} {arrow} {target}")),
    }
}

#[cfg(test)]
#[path = "flowchart_test.rs"]
mod tests;
