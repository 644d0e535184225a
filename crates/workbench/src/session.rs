//! Resume session — workbench state for one narrative-generation cycle.
//!
//! Replaces the web client's component-local + context-global state with an
//! explicit, independently testable state machine. The session owns the
//! draft editor, the feedback board, and the two persona transcripts; the
//! model is reached only through the `DraftModel` seam.
//!
//! CRITICAL: A failed model call must never corrupt draft history. Redraft
//! failures return before `push`; review failures leave at most the user's
//! own message in the transcript.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::diff::DiffEntry;
use crate::editor::{DraftEditor, DraftSource};
use crate::errors::EngineError;
use crate::feedback::FeedbackBoard;
use crate::generate::{DraftModel, ReviewOutput};
use crate::models::chat::ChatMessage;
use crate::models::narrative::{NarrativeOutput, StrategicAnalysis};

/// The two advisory personas surfaced alongside feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaKind {
    /// Empowering, big-picture reading of the user's path.
    Strategist,
    /// Grounding, cynical reading of the corporate framing.
    Realist,
}

/// Session policy knobs.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// When on, every review pass also appends both persona perspectives
    /// to their transcripts.
    pub automated_analysis: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            automated_analysis: true,
        }
    }
}

/// One user's workbench session.
///
/// Lifecycle: `begin_cycle` seeds the per-cycle state when a narrative is
/// accepted; edits and redrafts accumulate in the editor; `reset` (or the
/// next `begin_cycle`) discards everything. Nothing is persisted — the
/// session lives in memory for one cycle.
pub struct ResumeSession {
    model: Arc<dyn DraftModel>,
    config: SessionConfig,
    narrative: Option<NarrativeOutput>,
    editor: Option<DraftEditor>,
    feedback: FeedbackBoard,
    strategist_chat: Vec<ChatMessage>,
    realist_chat: Vec<ChatMessage>,
}

impl ResumeSession {
    pub fn new(model: Arc<dyn DraftModel>, config: SessionConfig) -> Self {
        ResumeSession {
            model,
            config,
            narrative: None,
            editor: None,
            feedback: FeedbackBoard::new(),
            strategist_chat: Vec::new(),
            realist_chat: Vec::new(),
        }
    }

    /// Starts a fresh narrative cycle: discards per-cycle state, seeds the
    /// draft history with the resume text, and seeds each persona
    /// transcript with the narrative's matching perspective.
    pub fn begin_cycle(&mut self, narrative: NarrativeOutput, resume_text: &str) {
        info!(chars = resume_text.len(), "Starting narrative cycle");
        self.reset();
        self.strategist_chat.push(ChatMessage::model(
            narrative.strategic_analysis.strategist_perspective.clone(),
        ));
        self.realist_chat.push(ChatMessage::model(
            narrative.strategic_analysis.realist_perspective.clone(),
        ));
        self.editor = Some(DraftEditor::new(resume_text));
        self.narrative = Some(narrative);
    }

    /// Initial analysis: reviews the current draft with an empty transcript
    /// and replaces the feedback board with the returned cards.
    pub async fn request_review(&mut self) -> Result<&[ChatMessage], EngineError> {
        let narrative = self.narrative.as_ref().ok_or(EngineError::EmptyHistory)?;
        let editor = self.editor.as_ref().ok_or(EngineError::EmptyHistory)?;
        let resume = editor.current()?;

        let output = self.model.review(narrative, resume, &[]).await?;

        let ReviewOutput {
            feedback,
            strategic_analysis,
        } = output;
        let cards: Vec<ChatMessage> = feedback.into_iter().map(ChatMessage::model).collect();
        info!(cards = cards.len(), "Initial review complete");
        self.feedback.replace_messages(cards);
        if self.config.automated_analysis {
            self.append_analysis(&strategic_analysis);
        }
        Ok(self.feedback.messages())
    }

    /// Sends a follow-up message into the feedback chat and appends the
    /// model's new cards. Blank messages are ignored. On model failure the
    /// user's message stays in the transcript and nothing else changes.
    pub async fn send_feedback_message(
        &mut self,
        text: &str,
    ) -> Result<&[ChatMessage], EngineError> {
        if text.trim().is_empty() {
            return Ok(self.feedback.messages());
        }
        if self.narrative.is_none() || self.editor.is_none() {
            return Err(EngineError::EmptyHistory);
        }
        self.feedback.push_message(ChatMessage::user(text));

        let narrative = self.narrative.as_ref().ok_or(EngineError::EmptyHistory)?;
        let editor = self.editor.as_ref().ok_or(EngineError::EmptyHistory)?;
        let resume = editor.current()?;

        let output = self
            .model
            .review(narrative, resume, self.feedback.messages())
            .await?;

        let ReviewOutput {
            feedback,
            strategic_analysis,
        } = output;
        let cards: Vec<ChatMessage> = feedback.into_iter().map(ChatMessage::model).collect();
        self.feedback.extend_messages(cards);
        if self.config.automated_analysis {
            self.append_analysis(&strategic_analysis);
        }
        Ok(self.feedback.messages())
    }

    /// Redrafts from the current selection. On success the result is pushed
    /// as a generated snapshot and the selection is cleared; on failure —
    /// nothing selected, or the model erroring — history is untouched.
    pub async fn update_draft(&mut self) -> Result<&str, EngineError> {
        let selection = self.feedback.selection();
        if selection.is_empty() {
            return Err(EngineError::NoSelection);
        }
        let editor = self.editor.as_ref().ok_or(EngineError::EmptyHistory)?;
        let current = editor.current()?;

        let new_draft = self.model.redraft(current, &selection).await?;

        info!(cards = selection.messages.len(), "Redraft accepted");
        let editor = self.editor.as_mut().ok_or(EngineError::EmptyHistory)?;
        editor.apply_generated_draft(new_draft);
        self.feedback.clear_selection();
        self.current_draft()
    }

    /// Commits a manual edit as a new snapshot.
    pub fn apply_manual_edit(&mut self, text: impl Into<String>) -> Result<&str, EngineError> {
        Ok(self
            .editor
            .as_mut()
            .ok_or(EngineError::EmptyHistory)?
            .apply_manual_edit(text))
    }

    /// Reverts the most recent draft snapshot. No-op at the seed.
    pub fn undo(&mut self) -> Result<&str, EngineError> {
        self.editor
            .as_mut()
            .ok_or(EngineError::EmptyHistory)?
            .undo()
    }

    pub fn current_draft(&self) -> Result<&str, EngineError> {
        self.editor
            .as_ref()
            .ok_or(EngineError::EmptyHistory)?
            .current()
    }

    pub fn previous_draft(&self) -> Result<&str, EngineError> {
        self.editor
            .as_ref()
            .ok_or(EngineError::EmptyHistory)?
            .previous()
    }

    pub fn can_undo(&self) -> bool {
        self.editor.as_ref().is_some_and(DraftEditor::can_undo)
    }

    /// Edit script between the previous and current snapshots.
    pub fn diff_against_previous(&self) -> Result<Vec<DiffEntry>, EngineError> {
        self.editor
            .as_ref()
            .ok_or(EngineError::EmptyHistory)?
            .diff_against_previous()
    }

    /// Source of the most recent draft push — lets the UI default into diff
    /// view after a generated rewrite.
    pub fn last_draft_source(&self) -> Option<DraftSource> {
        self.editor.as_ref().and_then(DraftEditor::last_source)
    }

    pub fn feedback(&self) -> &FeedbackBoard {
        &self.feedback
    }

    /// Toggles selection on a feedback card. Returns whether the card is
    /// selected after the call.
    pub fn toggle_feedback_selection(&mut self, id: Uuid) -> bool {
        self.feedback.toggle_selection(id)
    }

    /// Sets the user's note on a feedback card; empty removes it.
    pub fn set_feedback_note(&mut self, id: Uuid, note: impl Into<String>) {
        self.feedback.set_note(id, note);
    }

    pub fn persona_transcript(&self, persona: PersonaKind) -> &[ChatMessage] {
        match persona {
            PersonaKind::Strategist => &self.strategist_chat,
            PersonaKind::Realist => &self.realist_chat,
        }
    }

    pub fn narrative(&self) -> Option<&NarrativeOutput> {
        self.narrative.as_ref()
    }

    /// Discards all per-cycle state, ready for a new generation cycle.
    pub fn reset(&mut self) {
        self.narrative = None;
        self.editor = None;
        self.feedback.reset();
        self.strategist_chat.clear();
        self.realist_chat.clear();
    }

    fn append_analysis(&mut self, analysis: &StrategicAnalysis) {
        self.strategist_chat
            .push(ChatMessage::model(analysis.strategist_perspective.clone()));
        self.realist_chat
            .push(ChatMessage::model(analysis.realist_perspective.clone()));
    }
}
