//! Workbench core — resume draft history, line diffing, and session state
//! for the narrative workbench.
//!
//! The pure core (diff, history, editor) is synchronous, in-memory, and
//! UI-agnostic; all operations complete within a single logical turn. The
//! generative model is reached only through the [`DraftModel`] seam, and a
//! failed model call never corrupts draft history.

pub mod diff;
pub mod editor;
pub mod errors;
pub mod feedback;
pub mod generate;
pub mod history;
pub mod models;
pub mod session;

// Re-export the public API consumed by frontends and model backends.
pub use diff::{compute_diff, render_diff, DiffEntry, DiffTag, RenderedLine};
pub use editor::{DraftEditor, DraftSource};
pub use errors::EngineError;
pub use feedback::{FeedbackBoard, FeedbackSelection};
pub use generate::{DraftModel, ReviewOutput};
pub use history::DraftHistory;
pub use models::{ChatMessage, NarrativeOutput, Role};
pub use session::{PersonaKind, ResumeSession, SessionConfig};
