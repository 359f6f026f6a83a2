//! Source/target swapping for a single edge or message line.

use std::borrow::Cow;

use crate::patterns::{FLOW_SWAP, SEQ_SWAP};

/// Swap the endpoints of a flowchart edge or sequence message.
///
/// The arrow, any `|label|` or `: message` suffix, and every whitespace run
/// stay where they were. Lines that match neither shape come back unchanged.
#[must_use]
pub fn swap_arrow_direction(line: &str) -> Cow<'_, str> {
    if let Some(caps) = FLOW_SWAP.captures(line) {
        let (indent, source, ws_before, arrow) = (&caps[1], &caps[2], &caps[3], &caps[4]);
        let label = caps.get(5).map_or("", |m| m.as_str());
        let (ws_after, target, rest) = (&caps[6], &caps[7], &caps[8]);
        return Cow::Owned(format!("{indent}{target}{ws_before}{arrow}{label}{ws_after}{source}{rest}"));
    }

    if let Some(caps) = SEQ_SWAP.captures(line) {
        let (indent, source, ws_before, arrow, ws_after, target) =
            (&caps[1], &caps[2], &caps[3], &caps[4], &caps[5], &caps[6]);
        let suffix = caps.get(7).map_or("", |m| m.as_str());
        return Cow::Owned(format!("{indent}{target}{ws_before}{arrow}{ws_after}{source}{suffix}"));
    }

    Cow::Borrowed(line)
}

#[cfg(test)]
#[path = "swap_test.rs"]
mod tests;
