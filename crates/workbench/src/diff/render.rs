//! Diff renderer — maps an edit script onto display lines.
//!
//! Presentation only: read-only over the script, no history access.

use serde::{Deserialize, Serialize};

use crate::diff::lcs::{DiffEntry, DiffTag};

/// Stand-in for a truly empty line so it stays visually present.
const EMPTY_LINE_PLACEHOLDER: &str = "\u{00A0}";

/// One renderable line of a diff view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    pub tag: DiffTag,
    /// Line text; a single non-breaking space stands in for an empty line.
    pub text: String,
}

impl RenderedLine {
    /// Display prefix convention: `+ ` added, `- ` removed, two spaces common.
    pub fn prefix(&self) -> &'static str {
        match self.tag {
            DiffTag::Added => "+ ",
            DiffTag::Removed => "- ",
            DiffTag::Common => "  ",
        }
    }

    /// The prefixed line as shown in the diff pane.
    pub fn display(&self) -> String {
        format!("{}{}", self.prefix(), self.text)
    }
}

/// Maps an edit script onto renderable lines, in script order.
pub fn render_diff(script: &[DiffEntry]) -> Vec<RenderedLine> {
    script
        .iter()
        .map(|entry| RenderedLine {
            tag: entry.tag,
            text: if entry.line.is_empty() {
                EMPTY_LINE_PLACEHOLDER.to_string()
            } else {
                entry.line.clone()
            },
        })
        .collect()
}
