//! Managed block editing for agent-instructions documents.
//!
//! A managed block is a machine-owned region of a human-edited document,
//! delimited by HTML-comment markers so it renders invisibly:
//!
//! ```text
//! <!-- AGENT-SKILL:START project-management-with-beads -->
//! Use skill at: .agent-skills/project-management-with-beads/SKILL.md
//! <!-- AGENT-SKILL:END project-management-with-beads -->
//! ```
//!
//! [`editor::apply`] inserts or refreshes such a block. Applying the same
//! block twice yields the same text, and everything outside the block is left
//! byte-for-byte intact, including the document's line-ending convention.

pub mod block;
pub mod editor;
pub mod eol;

pub use block::{ManagedBlock, Markers};
pub use editor::{apply, is_current, locate};
pub use eol::EndOfLineStyle;
