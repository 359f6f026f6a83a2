//! Edit templates with user-editable placeholder stops.
//!
//! A [`Snippet`] is rendered two ways: as TextMate snippet syntax for editors
//! that run their own rename interaction, and as resolved plain text plus the
//! character offsets of each stop for hosts that do not.

use serde::Serialize;

/// A transform applied to a stop's value where it is mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// `user_profile` becomes `User Profile`.
    TitleCase,
    /// Upper-cases the first character.
    CapitalizeFirst,
}

impl Transform {
    #[must_use]
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::TitleCase => title_case(input),
            Self::CapitalizeFirst => capitalize_first(input),
        }
    }

    fn template(self, index: u32) -> String {
        match self {
            Self::TitleCase => format!("${{{index}/([a-z]+)(_)?/${{1:/capitalize}}${{2:+ }}/g}}"),
            Self::CapitalizeFirst => format!("${{{index}/^(.)/${{1:/upcase}}/}}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text { text: String },
    /// An editable stop. Repeated indices are linked occurrences.
    Stop { index: u32, default: String },
    /// A read-only copy of a stop's value.
    Mirror { index: u32, transform: Transform },
    /// Where the cursor lands once every stop is visited.
    Final,
}

/// A resolved stop: its default value and where it sits in [`Snippet::to_text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabStop {
    pub index: u32,
    pub default: String,
    /// Character offset of the first occurrence.
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snippet {
    segments: Vec<Segment>,
}

impl Snippet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A snippet with no stops.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        if let Some(Segment::Text { text: last }) = self.segments.last_mut() {
            last.push_str(&text);
        } else {
            self.segments.push(Segment::Text { text });
        }
        self
    }

    #[must_use]
    pub fn stop(mut self, index: u32, default: impl Into<String>) -> Self {
        self.segments.push(Segment::Stop { index, default: default.into() });
        self
    }

    #[must_use]
    pub fn mirror(mut self, index: u32, transform: Transform) -> Self {
        self.segments.push(Segment::Mirror { index, transform });
        self
    }

    #[must_use]
    pub fn finish(mut self) -> Self {
        self.segments.push(Segment::Final);
        self
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn has_stops(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Stop { .. }))
    }

    /// Plain text with every stop at its default value.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.segments.iter().map(|s| self.resolve(s)).collect()
    }

    /// TextMate snippet syntax (`${1:default}`, `$0`, regex transforms).
    #[must_use]
    pub fn to_template(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { text } => out.push_str(&escape(text)),
                Segment::Stop { index, default } => {
                    out.push_str(&format!("${{{index}:{}}}", escape(default)));
                }
                Segment::Mirror { index, transform } => out.push_str(&transform.template(*index)),
                Segment::Final => out.push_str("$0"),
            }
        }
        out
    }

    /// One entry per stop index, ordered by index, located at its first occurrence.
    #[must_use]
    pub fn tab_stops(&self) -> Vec<TabStop> {
        let mut stops: Vec<TabStop> = Vec::new();
        let mut offset = 0;
        for segment in &self.segments {
            let resolved = self.resolve(segment);
            let len = resolved.chars().count();
            if let Segment::Stop { index, default } = segment {
                if !stops.iter().any(|s| s.index == *index) {
                    stops.push(TabStop { index: *index, default: default.clone(), start: offset, end: offset + len });
                }
            }
            offset += len;
        }
        stops.sort_by_key(|s| s.index);
        stops
    }

    fn default_of(&self, index: u32) -> &str {
        self.segments
            .iter()
            .find_map(|s| match s {
                Segment::Stop { index: i, default } if *i == index => Some(default.as_str()),
                _ => None,
            })
            .unwrap_or_default()
    }

    fn resolve(&self, segment: &Segment) -> String {
        match segment {
            Segment::Text { text } => text.clone(),
            Segment::Stop { default, .. } => default.clone(),
            Segment::Mirror { index, transform } => transform.apply(self.default_of(*index)),
            Segment::Final => String::new(),
        }
    }
}

/// `user_profile` → `User Profile`.
#[must_use]
pub fn title_case(snake: &str) -> String {
    snake.split('_').map(capitalize_first).collect::<Vec<_>>().join(" ")
}

#[must_use]
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '$' | '}' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "snippet_test.rs"]
mod tests;
