//! Generative seam — the only boundary to the language model.
//!
//! The session holds an `Arc<dyn DraftModel>` and the pure core never
//! performs I/O. Prompt construction and transport belong to implementors
//! outside this crate; from the core's point of view, a complete new
//! document or review simply arrives, eventually.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::feedback::FeedbackSelection;
use crate::models::chat::ChatMessage;
use crate::models::narrative::{NarrativeOutput, StrategicAnalysis};

/// Structured result of one feedback review pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewOutput {
    /// New feedback cards for the board, one string per card.
    pub feedback: Vec<String>,
    /// Fresh persona perspectives accompanying the cards.
    pub strategic_analysis: StrategicAnalysis,
}

impl ReviewOutput {
    /// Parses a raw model JSON payload into a `ReviewOutput`.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Backend seam for all generative calls made on behalf of a session.
///
/// Implement this to swap model backends without touching the session or
/// the core. A failed call must simply return `Err` — the session
/// guarantees that failures never corrupt draft history.
#[async_trait]
pub trait DraftModel: Send + Sync {
    /// Reviews the current resume against the accepted narrative and the
    /// running feedback transcript. Returns new feedback cards plus the
    /// two persona perspectives.
    async fn review(
        &self,
        narrative: &NarrativeOutput,
        resume: &str,
        transcript: &[ChatMessage],
    ) -> Result<ReviewOutput, EngineError>;

    /// Produces a complete rewritten draft from the current draft and the
    /// selected feedback. The session pushes the result as a generated
    /// snapshot; a failure here leaves history untouched.
    async fn redraft(
        &self,
        current: &str,
        selection: &FeedbackSelection,
    ) -> Result<String, EngineError>;
}
