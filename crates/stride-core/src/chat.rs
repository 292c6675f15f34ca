//! Chat transcript domain model.
//!
//! This module contains the entry type that makes up a chat transcript
//! and the reply shape returned by the coach endpoint.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The current time as an ISO 8601 string, the format the backend uses
/// for every `created_at` field.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// The role of a transcript entry's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single entry in a chat transcript.
///
/// Entries are immutable once created and are only ever appended; the
/// transcript lives for the duration of the session and is not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Opaque identifier, monotonic by creation order within a session.
    pub id: String,
    /// Who authored the entry.
    pub role: ChatRole,
    /// The entry text.
    pub text: String,
    /// Timestamp when the entry was created (ISO 8601 format).
    pub created_at: String,
}

/// A conversational reply from the coach backend.
///
/// The backend may answer with a question, a plan confirmation, or a
/// plain message; this client only consumes the text, which the server
/// is allowed to omit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: Option<String>,
}

impl ChatReply {
    /// Returns the reply text, or `None` when it is absent or blank.
    pub fn text_or_none(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_reply_text_counts_as_absent() {
        assert_eq!(ChatReply { text: None }.text_or_none(), None);
        assert_eq!(
            ChatReply {
                text: Some("   ".to_string())
            }
            .text_or_none(),
            None
        );
        assert_eq!(
            ChatReply {
                text: Some("Keep it up!".to_string())
            }
            .text_or_none(),
            Some("Keep it up!")
        );
    }
}
