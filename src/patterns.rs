//! Compiled line patterns shared by the classifier, formatters, swapper and planners.
//!
//! Every pattern is a literal, compiled once on first use.

use once_cell::sync::Lazy;
use regex::Regex;

/// Flowchart edge for normalization: `source[shape]? ARROW |label|? target...`.
///
/// A shape is a bracket run such as `[..]`, `((..))`, `[(..)]` or `{{..}}`.
///
/// The source is greedy but never ends in an arrow character, so `j---->k`
/// splits before the arrow; in `a-->b-->c` only the last arrow is normalized.
pub(crate) static FLOW_EDGE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^([^\s<]*[^\s<\-=.](?:[\[({]+[^\]})]*[\]})]+|>>[^>]*>>)?)\s*(--+>|--o|--x|<--+>|o--o|x--x|--+|-\.->|\.->|==+>|<==|==+)\s*(\|[^|]*\|)?\s*(.+)$",
    )
});

/// Flowchart edge for swapping, keeping every whitespace run as captured. The
/// target cannot start with `>` or contain `:`, which leaves sequence messages
/// to [`SEQ_SWAP`].
///
/// Groups: indent, source, ws, arrow, pipe label, ws, target, rest.
pub(crate) static FLOW_SWAP: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^(\s*)([^\s\[({<]*[^\s\[({<\-=.](?:[\[({]+[^\]})]*[\]})]+)?)(\s*)(-->|--o|--x|<-->|o--o|x--x|---|-\.->|==>)(\|[^|]*\|)?(\s*)([^\s\[({:|>\-][^\s\[({:|]*(?:[\[({]+[^\]})]*[\]})]+)?)(.*)$",
    )
});

/// Sequence message for normalization: `source ARROW target: message`.
pub(crate) static SEQ_MESSAGE: Lazy<Regex> =
    Lazy::new(|| compile(r"^(\S+?)\s*(->>|-->>|->|-->|-x|--x|-\)|--\))\s*([^\s:]+)\s*:\s*(.*)$"));

/// Sequence message for swapping. Groups: indent, source, ws, arrow, ws, target, suffix.
pub(crate) static SEQ_SWAP: Lazy<Regex> =
    Lazy::new(|| compile(r"^(\s*)([^\s:]+?)(\s*)(-->>|->>|-->|->|--x|-x|--\)|-\))(\s*)([^:\s]+)(\s*:.*)?$"));

/// `participant|actor id [as alias]`, matched against a trimmed line.
pub(crate) static DECLARATION: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^(participant|actor)\s+(\S+)(?:\s+as\s+(.+))?$"));

/// A participant declaration anywhere in the document, indentation allowed.
pub(crate) static PARTICIPANT_LINE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^\s*(participant|actor)\s+"));

/// `note over|left of|right of participants: text`, matched against a trimmed line.
pub(crate) static NOTE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^(note)\s+(over|left of|right of)\s+(.+?):\s*(.*)$"));

/// Identifier immediately followed by a shape opener.
pub(crate) static NODE_SHAPE: Lazy<Regex> = Lazy::new(|| compile(r"^\s*[a-zA-Z_][a-zA-Z0-9_]*\s*[\[({>]"));

/// Any edge or message arrow token.
pub(crate) static EDGE_TOKEN: Lazy<Regex> =
    Lazy::new(|| compile(r"-->|---|-\.->|==>|-->>|->>|->|--\)|-\)|-x|--x"));

/// Generated node ids.
pub(crate) static TEMP_ID: Lazy<Regex> = Lazy::new(|| compile(r"\btemp(\d+)\b"));

/// Letters, digits and underscore, not digit-initial.
pub(crate) static BARE_IDENTIFIER: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z_][a-zA-Z0-9_]*$"));

/// A whole message line offered as a selection to the pair planners.
pub(crate) static SELECTED_MESSAGE: Lazy<Regex> = Lazy::new(|| {
    compile(r"^\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*(->>?|-->>?)\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*:\s*(.+?)\s*$")
});

pub(crate) static REQUEST_VERB: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^(Get|Fetch|Request|Load|Retrieve)\s+(.+)$"));

pub(crate) static ACTION_VERB: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^(Perform|Execute|Run|Process|Handle)\s+(.+)$"));

fn compile(pattern: &'static str) -> Regex {
    Regex::new(pattern).expect("static pattern compiles")
}
