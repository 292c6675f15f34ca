pub mod api;
pub mod chat;
pub mod error;
pub mod identity;
pub mod laurel;
pub mod progress;

// Re-export common error type
pub use error::{CoachError, Result};

pub use api::CoachApi;
pub use chat::{ChatEntry, ChatReply, ChatRole};
pub use identity::Identity;
pub use laurel::{Laurel, LaurelKind};
pub use progress::{LogKind, ProgressForm, ProgressLog, ProgressPayload};
