//! Draft update orchestrator — the single write path into draft history.
//!
//! Accepts edits from the editor surface (manual) and from the redraft
//! workflow (generated); both push a complete snapshot. Commit granularity
//! is the caller's concern — this module does not debounce.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::diff::{compute_diff, DiffEntry};
use crate::errors::EngineError;
use crate::history::DraftHistory;

/// Where the most recent draft snapshot came from.
///
/// After a `Generated` push the UI defaults into diff view rather than edit
/// view. That is a presentation policy, not a core invariant — the two
/// sources are mechanically identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftSource {
    Manual,
    Generated,
}

/// Coordinates draft updates over a [`DraftHistory`].
#[derive(Debug, Clone)]
pub struct DraftEditor {
    history: DraftHistory,
    last_source: Option<DraftSource>,
}

impl DraftEditor {
    /// Starts a new editing cycle seeded with the original document.
    pub fn new(seed: impl Into<String>) -> Self {
        DraftEditor {
            history: DraftHistory::seeded(seed),
            last_source: None,
        }
    }

    /// Commits a manual edit as a new snapshot. Every call is a discrete
    /// commit. No validation — the empty string is a legal document.
    pub fn apply_manual_edit(&mut self, text: impl Into<String>) -> &str {
        self.last_source = Some(DraftSource::Manual);
        self.history.push(text)
    }

    /// Commits an AI-generated rewrite as a new snapshot. Identical
    /// mechanics to a manual edit; only the source tag differs.
    pub fn apply_generated_draft(&mut self, text: impl Into<String>) -> &str {
        self.last_source = Some(DraftSource::Generated);
        let text = text.into();
        info!(chars = text.len(), "Applying generated draft");
        self.history.push(text)
    }

    /// Reverts the most recent snapshot, if any. The source tag reflects the
    /// most recent push only, so a successful undo clears it.
    pub fn undo(&mut self) -> Result<&str, EngineError> {
        if self.history.can_undo() {
            self.last_source = None;
        }
        self.history.undo()
    }

    pub fn current(&self) -> Result<&str, EngineError> {
        self.history.current()
    }

    pub fn previous(&self) -> Result<&str, EngineError> {
        self.history.previous()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Source of the most recent push, if nothing was undone since.
    pub fn last_source(&self) -> Option<DraftSource> {
        self.last_source
    }

    /// Edit script between the previous and current snapshots.
    pub fn diff_against_previous(&self) -> Result<Vec<DiffEntry>, EngineError> {
        Ok(compute_diff(self.previous()?, self.current()?))
    }

    pub fn history(&self) -> &DraftHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffTag;

    #[test]
    fn test_manual_edit_pushes_snapshot() {
        let mut editor = DraftEditor::new("seed");
        assert_eq!(editor.apply_manual_edit("v1"), "v1");
        assert_eq!(editor.history().len(), 2);
        assert_eq!(editor.last_source(), Some(DraftSource::Manual));
    }

    #[test]
    fn test_generated_draft_sets_source_tag() {
        let mut editor = DraftEditor::new("seed");
        editor.apply_generated_draft("rewritten");
        assert_eq!(editor.last_source(), Some(DraftSource::Generated));
        assert_eq!(editor.current().unwrap(), "rewritten");
    }

    #[test]
    fn test_three_pushes_two_undos_returns_to_first_edit() {
        let mut editor = DraftEditor::new("seed");
        editor.apply_manual_edit("v1");
        editor.apply_manual_edit("v2");
        editor.apply_manual_edit("v3");

        editor.undo().unwrap();
        assert_eq!(editor.undo().unwrap(), "v1");
        assert_eq!(editor.current().unwrap(), "v1");
    }

    #[test]
    fn test_undo_clears_source_tag() {
        let mut editor = DraftEditor::new("seed");
        editor.apply_generated_draft("rewritten");
        editor.undo().unwrap();
        assert_eq!(editor.last_source(), None);
    }

    #[test]
    fn test_undo_at_floor_keeps_source_tag_and_seed() {
        let mut editor = DraftEditor::new("seed");
        assert_eq!(editor.undo().unwrap(), "seed");
        assert_eq!(editor.last_source(), None);
    }

    #[test]
    fn test_diff_against_previous_after_edit() {
        let mut editor = DraftEditor::new("A\nB\nC");
        editor.apply_manual_edit("A\nX\nC");

        let script = editor.diff_against_previous().unwrap();
        let tags: Vec<DiffTag> = script.iter().map(|e| e.tag).collect();
        assert_eq!(
            tags,
            vec![
                DiffTag::Common,
                DiffTag::Removed,
                DiffTag::Added,
                DiffTag::Common
            ]
        );
    }

    #[test]
    fn test_diff_before_first_edit_is_all_common() {
        let editor = DraftEditor::new("A\nB");
        let script = editor.diff_against_previous().unwrap();
        assert_eq!(script.len(), 2);
        assert!(script.iter().all(|e| e.tag == DiffTag::Common));
    }

    #[test]
    fn test_empty_seed_then_edit() {
        let mut editor = DraftEditor::new("");
        editor.apply_manual_edit("hello");
        let script = editor.diff_against_previous().unwrap();
        assert_eq!(script.len(), 1);
        assert_eq!(script[0].tag, DiffTag::Added);
        assert_eq!(script[0].line, "hello");
    }
}
