//! Hand-rolled `CoachApi` fake for controller tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stride_core::{
    ChatReply, CoachApi, CoachError, Identity, Laurel, LogKind, ProgressLog, ProgressPayload,
    Result,
};
use tokio::sync::Notify;

/// Scripted remote API: each operation pops the next scripted result,
/// falling back to a benign default when nothing is queued. Every call
/// is recorded by name so tests can assert exact call counts.
#[derive(Default)]
pub struct MockCoachApi {
    replies: Mutex<VecDeque<Result<ChatReply>>>,
    laurel_pages: Mutex<VecDeque<Result<Vec<Laurel>>>>,
    award_results: Mutex<VecDeque<Result<()>>>,
    log_pages: Mutex<VecDeque<Result<Vec<ProgressLog>>>>,
    log_results: Mutex<VecDeque<Result<()>>>,
    calls: Mutex<Vec<&'static str>>,
    // When set, send_message blocks until the gate is notified.
    chat_gate: Mutex<Option<Arc<Notify>>>,
}

impl MockCoachApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, reply: Result<ChatReply>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn push_laurels(&self, page: Result<Vec<Laurel>>) {
        self.laurel_pages.lock().unwrap().push_back(page);
    }

    pub fn push_award_result(&self, result: Result<()>) {
        self.award_results.lock().unwrap().push_back(result);
    }

    pub fn push_logs(&self, page: Result<Vec<ProgressLog>>) {
        self.log_pages.lock().unwrap().push_back(page);
    }

    pub fn push_log_result(&self, result: Result<()>) {
        self.log_results.lock().unwrap().push_back(result);
    }

    /// Makes `send_message` park until the returned gate is notified.
    pub fn gate_chat(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.chat_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Number of times the named operation was invoked.
    pub fn call_count(&self, name: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|&&c| c == name).count()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

#[async_trait]
impl CoachApi for MockCoachApi {
    async fn send_message(&self, _user: &Identity, _text: &str) -> Result<ChatReply> {
        self.record("send_message");
        let gate = self.chat_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(ChatReply {
                text: Some("Noted.".to_string()),
            })
        })
    }

    async fn laurels(&self, _user: &Identity) -> Result<Vec<Laurel>> {
        self.record("laurels");
        self.laurel_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn award_laurel(
        &self,
        _user: &Identity,
        _laurel_type: &str,
        _points: u32,
        _description: &str,
    ) -> Result<()> {
        self.record("award_laurel");
        self.award_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn progress_logs(&self, _user: &Identity) -> Result<Vec<ProgressLog>> {
        self.record("progress_logs");
        self.log_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn log_progress(
        &self,
        _user: &Identity,
        _kind: LogKind,
        _payload: &ProgressPayload,
    ) -> Result<()> {
        self.record("log_progress");
        self.log_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

pub fn remote_failure() -> CoachError {
    CoachError::remote("connection reset")
}

pub fn laurel(id: &str, laurel_type: &str, points: u32) -> Laurel {
    Laurel {
        id: id.to_string(),
        laurel_type: laurel_type.to_string(),
        points,
        description: None,
        created_at: "2025-01-01T00:00:00Z".to_string(),
    }
}

pub fn progress_log(id: &str, kind: LogKind) -> ProgressLog {
    ProgressLog {
        id: id.to_string(),
        kind,
        payload: ProgressPayload::default(),
        created_at: "2025-01-01T00:00:00Z".to_string(),
    }
}
