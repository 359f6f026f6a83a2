//! Diagram dialects and detection.

use serde::{Deserialize, Serialize};

const FLOWCHART_DOCS_URL: &str = "https://mermaid.js.org/syntax/flowchart.html";
const SEQUENCE_DOCS_URL: &str = "https://mermaid.js.org/syntax/sequenceDiagram.html";

pub const DEFAULT_FLOWCHART: &str = "flowchart LR
  edge(Edge Service)
  platform_a(Platform A)
  platform_b(Platform B)

  edge --> platform_a
  edge --> platform_b
";

pub const DEFAULT_SEQUENCE: &str = "sequenceDiagram
  actor user as User
  participant api as API Server
  participant db as Database

  user->>api: Get report
  api->>db: Run query
  db->>api: Query results
  api->>user: Report
";

/// A supported diagram dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramType {
    Flowchart,
    Sequence,
}

impl DiagramType {
    /// Cycling order used by the next/previous diagram actions.
    pub const ALL: [DiagramType; 2] = [DiagramType::Flowchart, DiagramType::Sequence];

    /// Stable lowercase identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
        }
    }

    /// Parse a stable identifier (case-insensitive).
    #[must_use]
    pub fn from_id(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Flowchart => "Flowchart",
            Self::Sequence => "Sequence Diagram",
        }
    }

    #[must_use]
    pub fn docs_url(self) -> &'static str {
        match self {
            Self::Flowchart => FLOWCHART_DOCS_URL,
            Self::Sequence => SEQUENCE_DOCS_URL,
        }
    }

    /// Starter document shown for a fresh diagram of this type.
    #[must_use]
    pub fn default_template(self) -> &'static str {
        match self {
            Self::Flowchart => DEFAULT_FLOWCHART,
            Self::Sequence => DEFAULT_SEQUENCE,
        }
    }

    /// Next dialect in [`DiagramType::ALL`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous dialect in [`DiagramType::ALL`], wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        match self {
            Self::Flowchart => 0,
            Self::Sequence => 1,
        }
    }
}

impl std::fmt::Display for DiagramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the dialect of raw diagram text.
///
/// Only the first non-blank line is consulted, case-insensitively: a
/// `flowchart` or `graph` prefix is a flowchart, a `sequenceDiagram` prefix is
/// a sequence diagram. Anything else is unrecognized.
#[must_use]
pub fn detect(code: &str) -> Option<DiagramType> {
    let first = code.lines().map(str::trim).find(|l| !l.is_empty())?;
    let lower = first.to_ascii_lowercase();

    let detected = if lower.starts_with("flowchart") || lower.starts_with("graph") {
        Some(DiagramType::Flowchart)
    } else if lower.starts_with("sequencediagram") {
        Some(DiagramType::Sequence)
    } else {
        None
    };

    tracing::trace!(dialect = ?detected, "detected diagram dialect");
    detected
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
