//! History store — append-only snapshots of the resume draft with linear undo.
//!
//! CRITICAL: This is append-only. `undo` is the only operation that removes
//! an entry, and only ever the newest one. The seed entry is never removed.

use tracing::debug;

use crate::errors::EngineError;

/// Ordered sequence of full-document snapshots for one narrative cycle.
///
/// Entry 0 is the seed document; the last entry is always the current draft.
/// Every snapshot is a complete copy — no patch representation. The history
/// lives in memory for one cycle and is discarded on reset; nothing is
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct DraftHistory {
    snapshots: Vec<String>,
}

impl DraftHistory {
    /// An uninitialized store. Queries on it return `EmptyHistory`.
    pub fn new() -> Self {
        DraftHistory::default()
    }

    /// A store seeded with the original document.
    pub fn seeded(seed: impl Into<String>) -> Self {
        DraftHistory {
            snapshots: vec![seed.into()],
        }
    }

    /// Resets the store to a single-element history holding `seed`.
    /// Called once per narrative-generation cycle.
    pub fn initialize(&mut self, seed: impl Into<String>) {
        self.snapshots.clear();
        self.snapshots.push(seed.into());
    }

    /// Appends a new snapshot unconditionally and returns the new current
    /// document. Identical no-op edits are kept, not deduplicated.
    pub fn push(&mut self, doc: impl Into<String>) -> &str {
        self.snapshots.push(doc.into());
        debug!(len = self.snapshots.len(), "Pushed draft snapshot");
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// The current draft (last snapshot).
    pub fn current(&self) -> Result<&str, EngineError> {
        self.snapshots
            .last()
            .map(String::as_str)
            .ok_or(EngineError::EmptyHistory)
    }

    /// The snapshot before the current one. Before the first edit there is
    /// no previous entry, so the seed itself is returned — diffing it
    /// against the current draft yields an all-Common script.
    pub fn previous(&self) -> Result<&str, EngineError> {
        match self.snapshots.len() {
            0 => Err(EngineError::EmptyHistory),
            1 => Ok(&self.snapshots[0]),
            n => Ok(&self.snapshots[n - 2]),
        }
    }

    /// Removes the newest snapshot and returns the new current draft. At a
    /// single entry this is a no-op: the seed can never be undone.
    pub fn undo(&mut self) -> Result<&str, EngineError> {
        if self.snapshots.is_empty() {
            return Err(EngineError::EmptyHistory);
        }
        if self.snapshots.len() > 1 {
            self.snapshots.pop();
            debug!(len = self.snapshots.len(), "Undid draft snapshot");
        }
        self.current()
    }

    /// Whether `undo` would remove an entry.
    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
