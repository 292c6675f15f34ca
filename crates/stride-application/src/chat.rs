//! Chat session controller.
//!
//! Owns the ordered transcript and the pending-input draft, and
//! serializes conversation turns against the coach backend: one user
//! entry appended synchronously, one remote call, one assistant entry
//! (or the fixed apology line) when it resolves.

use std::sync::Arc;

use stride_core::chat::now_iso;
use stride_core::{ChatEntry, ChatRole, CoachApi, Identity};
use tokio::sync::RwLock;

/// Fallback reply shown when the coach answers without any text.
pub const FALLBACK_REPLY: &str = "I understand. Please continue.";

/// Fixed line appended to the transcript when the remote call fails.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Default)]
struct ChatState {
    transcript: Vec<ChatEntry>,
    draft: String,
    busy: bool,
    next_entry_id: u64,
}

impl ChatState {
    fn append(&mut self, role: ChatRole, text: impl Into<String>) {
        self.next_entry_id += 1;
        self.transcript.push(ChatEntry {
            id: format!("msg-{}", self.next_entry_id),
            role,
            text: text.into(),
            created_at: now_iso(),
        });
    }
}

/// View-state controller for the chat panel.
///
/// At most one remote call is in flight at a time: `submit` is a no-op
/// while a prior turn is unresolved, which keeps the transcript's
/// user/assistant pairing intact without any interleaving rules.
///
/// # Thread Safety
///
/// State lives behind a `tokio::sync::RwLock`, so the session can be
/// shared via `Arc` between an input loop and a renderer.
pub struct ChatSession {
    identity: Identity,
    api: Arc<dyn CoachApi>,
    state: RwLock<ChatState>,
}

impl ChatSession {
    /// Creates a new session with an empty transcript.
    pub fn new(identity: Identity, api: Arc<dyn CoachApi>) -> Self {
        Self {
            identity,
            api,
            state: RwLock::new(ChatState::default()),
        }
    }

    /// The identity this session is scoped to.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Submits one conversational turn.
    ///
    /// A whitespace-only `text`, or a call while a prior turn is still
    /// in flight, is a silent no-op: the transcript is untouched and no
    /// remote call is issued. Otherwise the user entry is appended and
    /// the draft cleared before the remote call starts, and exactly one
    /// assistant entry is appended when it resolves - the reply text,
    /// [`FALLBACK_REPLY`] if the reply carries none, or [`ERROR_REPLY`]
    /// on any failure. Failures are logged and never re-thrown; the
    /// busy flag clears on every path.
    pub async fn submit(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        // Check-and-set under one write lock so concurrent submits
        // cannot both pass the busy gate.
        {
            let mut state = self.state.write().await;
            if state.busy {
                return;
            }
            state.busy = true;
            state.append(ChatRole::User, text);
            state.draft.clear();
        }

        let reply_text = match self.api.send_message(&self.identity, text).await {
            Ok(reply) => reply
                .text_or_none()
                .unwrap_or(FALLBACK_REPLY)
                .to_string(),
            Err(err) => {
                tracing::error!("Chat turn failed: {}", err);
                ERROR_REPLY.to_string()
            }
        };

        let mut state = self.state.write().await;
        state.append(ChatRole::Assistant, reply_text);
        state.busy = false;
    }

    /// Submits whatever is currently in the draft.
    pub async fn submit_draft(&self) {
        let draft = self.state.read().await.draft.clone();
        self.submit(&draft).await;
    }

    /// Replaces the pending input draft.
    pub async fn set_draft(&self, draft: impl Into<String>) {
        self.state.write().await.draft = draft.into();
    }

    /// The current pending input.
    pub async fn draft(&self) -> String {
        self.state.read().await.draft.clone()
    }

    /// A snapshot of the transcript, oldest entry first.
    pub async fn transcript(&self) -> Vec<ChatEntry> {
        self.state.read().await.transcript.clone()
    }

    /// Whether a remote call is currently in flight.
    pub async fn is_busy(&self) -> bool {
        self.state.read().await.busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCoachApi, remote_failure};
    use stride_core::ChatReply;

    fn session() -> (Arc<MockCoachApi>, ChatSession) {
        let api = Arc::new(MockCoachApi::new());
        let session = ChatSession::new(Identity::from_raw("user-test"), api.clone());
        (api, session)
    }

    #[tokio::test]
    async fn submit_appends_a_user_and_assistant_pair() {
        let (api, session) = session();
        api.push_reply(Ok(ChatReply {
            text: Some("Great work!".to_string()),
        }));

        session.submit("Did my workout").await;

        let transcript = session.transcript().await;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, ChatRole::User);
        assert_eq!(transcript[0].text, "Did my workout");
        assert_eq!(transcript[1].role, ChatRole::Assistant);
        assert_eq!(transcript[1].text, "Great work!");
        assert!(!session.is_busy().await);
    }

    #[tokio::test]
    async fn blank_input_is_a_no_op() {
        let (api, session) = session();

        session.submit("").await;
        session.submit("   ").await;

        assert!(session.transcript().await.is_empty());
        assert_eq!(api.call_count("send_message"), 0);
    }

    #[tokio::test]
    async fn reply_without_text_uses_the_fallback_line() {
        let (api, session) = session();
        api.push_reply(Ok(ChatReply { text: None }));

        session.submit("hello").await;

        let transcript = session.transcript().await;
        assert_eq!(transcript[1].text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn remote_failure_appends_the_apology_and_clears_busy() {
        let (api, session) = session();
        api.push_reply(Err(remote_failure()));

        session.submit("hello").await;

        let transcript = session.transcript().await;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].role, ChatRole::Assistant);
        assert_eq!(transcript[1].text, ERROR_REPLY);
        assert!(!session.is_busy().await);
    }

    #[tokio::test]
    async fn submit_while_busy_is_a_no_op() {
        let api = Arc::new(MockCoachApi::new());
        let gate = api.gate_chat();
        let session = Arc::new(ChatSession::new(
            Identity::from_raw("user-test"),
            api.clone(),
        ));

        let in_flight = {
            let session = session.clone();
            tokio::spawn(async move { session.submit("first").await })
        };

        // Wait until the first turn is parked inside the remote call.
        while api.call_count("send_message") == 0 {
            tokio::task::yield_now().await;
        }
        assert!(session.is_busy().await);

        session.submit("second").await;
        assert_eq!(api.call_count("send_message"), 1);
        assert_eq!(session.transcript().await.len(), 1);

        gate.notify_one();
        in_flight.await.unwrap();

        let transcript = session.transcript().await;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].text, "first");
        assert!(!session.is_busy().await);
    }

    #[tokio::test]
    async fn entry_ids_are_monotonic() {
        let (_, session) = session();

        session.submit("one").await;
        session.submit("two").await;

        let ids: Vec<String> = session
            .transcript()
            .await
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["msg-1", "msg-2", "msg-3", "msg-4"]);
    }

    #[tokio::test]
    async fn submit_draft_sends_and_clears_the_draft() {
        let (api, session) = session();
        session.set_draft("from the draft").await;

        session.submit_draft().await;

        assert_eq!(session.draft().await, "");
        assert_eq!(api.call_count("send_message"), 1);
        assert_eq!(session.transcript().await[0].text, "from the draft");
    }
}
