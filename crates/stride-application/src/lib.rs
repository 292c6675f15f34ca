//! View-state controllers for the Stride dashboard.
//!
//! Three independent controllers, one per panel, each injected with
//! the remote API client and the per-session identity. No state is
//! shared between them; each owns its own collection and reconciles it
//! against the backend after every mutation.

pub mod chat;
pub mod laurels;
pub mod progress;

#[cfg(test)]
mod test_support;

pub use chat::{ChatSession, ERROR_REPLY, FALLBACK_REPLY};
pub use laurels::LaurelBoard;
pub use progress::ProgressJournal;
