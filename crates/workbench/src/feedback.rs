//! Feedback board — selectable AI feedback cards with per-card user notes.
//!
//! The selected subset plus its notes feeds the next redraft. This module
//! owns selection state only; it never calls the model.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::chat::ChatMessage;

/// Snapshot of the selected cards and their notes, handed to the model seam
/// when the user asks for a redraft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSelection {
    /// Selected cards in transcript order.
    pub messages: Vec<ChatMessage>,
    /// User annotations, keyed by card id. Only selected cards appear here.
    pub notes: HashMap<Uuid, String>,
}

impl FeedbackSelection {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// The feedback chat transcript plus card selection state.
#[derive(Debug, Clone, Default)]
pub struct FeedbackBoard {
    messages: Vec<ChatMessage>,
    selected: HashSet<Uuid>,
    notes: HashMap<Uuid, String>,
}

impl FeedbackBoard {
    pub fn new() -> Self {
        FeedbackBoard::default()
    }

    /// The full transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends one message and returns its id.
    pub fn push_message(&mut self, message: ChatMessage) -> Uuid {
        let id = message.id;
        self.messages.push(message);
        id
    }

    /// Appends a batch of messages (a round of feedback cards).
    pub fn extend_messages(&mut self, messages: impl IntoIterator<Item = ChatMessage>) {
        self.messages.extend(messages);
    }

    /// Replaces the transcript wholesale (initial analysis discards any
    /// earlier round). Selection and notes refer to the old cards, so both
    /// are cleared.
    pub fn replace_messages(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
        self.selected.clear();
        self.notes.clear();
    }

    /// Toggles selection for a card. Unknown ids are ignored. Returns
    /// whether the id is selected after the call.
    pub fn toggle_selection(&mut self, id: Uuid) -> bool {
        if !self.messages.iter().any(|m| m.id == id) {
            return false;
        }
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
        self.selected.contains(&id)
    }

    /// Sets the user's note on a card. An empty note removes the entry.
    pub fn set_note(&mut self, id: Uuid, note: impl Into<String>) {
        let note = note.into();
        if note.is_empty() {
            self.notes.remove(&id);
        } else {
            self.notes.insert(id, note);
        }
    }

    pub fn selection_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    /// Selected cards in transcript order.
    pub fn selected_messages(&self) -> Vec<&ChatMessage> {
        self.messages
            .iter()
            .filter(|m| self.selected.contains(&m.id))
            .collect()
    }

    /// Snapshot for the redraft call: selected cards in transcript order
    /// plus only the notes attached to them.
    pub fn selection(&self) -> FeedbackSelection {
        let messages: Vec<ChatMessage> = self
            .messages
            .iter()
            .filter(|m| self.selected.contains(&m.id))
            .cloned()
            .collect();
        let notes = messages
            .iter()
            .filter_map(|m| self.notes.get(&m.id).map(|n| (m.id, n.clone())))
            .collect();
        FeedbackSelection { messages, notes }
    }

    /// Deselects everything. Called after a successful redraft.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Discards transcript, selection, and notes.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.selected.clear();
        self.notes.clear();
    }
}
