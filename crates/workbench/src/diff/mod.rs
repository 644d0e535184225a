// Line-level diffing for the resume editor.
// `lcs` computes the edit script; `render` maps it onto display lines.

pub mod lcs;
pub mod render;

// Re-export the public API consumed by the editor and session.
pub use lcs::{compute_diff, DiffEntry, DiffTag};
pub use render::{render_diff, RenderedLine};
