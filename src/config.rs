//! Editor configuration parsed from environment variables.

use crate::actions::SessionContext;
use crate::dialect::{DiagramType, detect};
use crate::format::{DEFAULT_INDENT_WIDTH, FormatOptions};

pub const INDENT_WIDTH_VAR: &str = "MERMAID_INDENT_WIDTH";
pub const DIAGRAM_TYPE_VAR: &str = "MERMAID_DIAGRAM_TYPE";
pub const MAX_INDENT_WIDTH: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid MERMAID_INDENT_WIDTH '{0}' (expected 1..=8)")]
    InvalidIndentWidth(String),

    #[error("unknown MERMAID_DIAGRAM_TYPE '{0}' (expected 'flowchart' or 'sequence')")]
    UnknownDiagramType(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Dialect assumed when a document has no recognizable header.
    pub diagram_type: DiagramType,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { indent_width: DEFAULT_INDENT_WIDTH, diagram_type: DiagramType::Flowchart }
    }
}

impl EditorConfig {
    /// Build typed editor config from environment variables.
    ///
    /// Optional:
    /// - `MERMAID_INDENT_WIDTH`: `1..=8`, default 2
    /// - `MERMAID_DIAGRAM_TYPE`: `flowchart` (default) or `sequence`
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Build config from any key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`EditorConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let indent_width = parse_indent_width(lookup(INDENT_WIDTH_VAR).as_deref())?;
        let diagram_type = parse_diagram_type(lookup(DIAGRAM_TYPE_VAR).as_deref())?;
        Ok(Self { indent_width, diagram_type })
    }

    #[must_use]
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::with_width(self.indent_width)
    }

    /// Session for `text`: its detected dialect, or the configured default.
    #[must_use]
    pub fn session(&self, text: &str) -> SessionContext {
        let diagram_type = detect(text).unwrap_or(self.diagram_type);
        SessionContext::new(diagram_type).with_indent_unit(" ".repeat(self.indent_width))
    }
}

fn parse_indent_width(raw: Option<&str>) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_INDENT_WIDTH);
    };
    match raw.trim().parse::<usize>() {
        Ok(width) if (1..=MAX_INDENT_WIDTH).contains(&width) => Ok(width),
        _ => Err(ConfigError::InvalidIndentWidth(raw.to_owned())),
    }
}

fn parse_diagram_type(raw: Option<&str>) -> Result<DiagramType, ConfigError> {
    match raw {
        None => Ok(DiagramType::Flowchart),
        Some(raw) => DiagramType::from_id(raw).ok_or_else(|| ConfigError::UnknownDiagramType(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
