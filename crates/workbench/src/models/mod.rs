// Data models shared across the session: chat transcripts and the
// structured output of narrative generation.

pub mod chat;
pub mod narrative;

pub use chat::{ChatMessage, Role};
pub use narrative::{CorporateNarrative, KeyExperience, NarrativeOutput, StrategicAnalysis};
