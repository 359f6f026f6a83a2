//! Formatting and structural editing for Mermaid diagram text.
//!
//! Two dialects are understood, `flowchart`/`graph` and `sequenceDiagram`.
//! Everything here is a pure function of its inputs: formatting returns new
//! text, queries return line numbers, and editor actions return an
//! [`EditPlan`] for the host to apply. Malformed diagram text never produces
//! an error; unrecognized input passes through unchanged.

pub mod actions;
pub mod classify;
pub mod config;
pub mod dialect;
pub mod document;
pub mod format;
mod patterns;
pub mod query;
pub mod snippet;
pub mod swap;

pub use actions::{ActionInfo, ActionKind, ActionOutcome, EditPlan, SessionContext, run};
pub use config::{ConfigError, EditorConfig};
pub use dialect::{DiagramType, detect};
pub use document::{Position, Range, TextBuffer, TextModel};
pub use format::{FormatOptions, prettify, prettify_with};
pub use query::{find_enclosing_block, find_enclosing_subgraph, generate_node_id};
pub use swap::swap_arrow_direction;
