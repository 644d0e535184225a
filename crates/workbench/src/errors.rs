use thiserror::Error;

/// Crate-level error type.
///
/// The pure core (diff, history, editor) is total over well-formed inputs;
/// everything here is either a lifecycle violation or a model-side failure
/// surfaced through the `DraftModel` seam.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A query reached the draft history before `initialize` was ever
    /// called. The session guarantees initialization precedes any query in
    /// normal operation, so hitting this is a programming error upstream.
    #[error("Draft history has not been initialized")]
    EmptyHistory,

    /// `update_draft` was called with no feedback cards selected.
    #[error("No feedback cards selected for redraft")]
    NoSelection,

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
