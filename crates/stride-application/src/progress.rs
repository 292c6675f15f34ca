//! Progress journal controller.
//!
//! Same fetch-and-replace shape as the laurel board, plus the entry
//! form: a free-text form that is parsed on submission, sent to the
//! backend, and reset once the list has been reconciled.

use std::sync::Arc;

use stride_core::{CoachApi, Identity, LogKind, ProgressForm, ProgressLog};
use tokio::sync::RwLock;

#[derive(Default)]
struct JournalState {
    logs: Vec<ProgressLog>,
    loading: bool,
    form: ProgressForm,
    form_open: bool,
}

/// View-state controller for the progress panel.
pub struct ProgressJournal {
    identity: Identity,
    api: Arc<dyn CoachApi>,
    state: RwLock<JournalState>,
}

impl ProgressJournal {
    pub fn new(identity: Identity, api: Arc<dyn CoachApi>) -> Self {
        Self {
            identity,
            api,
            state: RwLock::new(JournalState::default()),
        }
    }

    /// Fetches the full log list and replaces the in-memory one.
    ///
    /// Failure keeps the prior list and is logged, never surfaced.
    pub async fn load(&self) {
        self.state.write().await.loading = true;
        let result = self.api.progress_logs(&self.identity).await;
        let mut state = self.state.write().await;
        match result {
            Ok(logs) => state.logs = logs,
            Err(err) => tracing::warn!("Failed to fetch progress logs: {}", err),
        }
        state.loading = false;
    }

    /// Creates one log entry from an explicit form, then reloads.
    ///
    /// The form is parsed with [`ProgressForm::to_payload`]; nothing
    /// beyond that parsing is validated. Create failure is logged and
    /// swallowed, and the reload still runs.
    pub async fn log_entry(&self, kind: LogKind, form: &ProgressForm) {
        let payload = form.to_payload();
        if let Err(err) = self.api.log_progress(&self.identity, kind, &payload).await {
            tracing::warn!("Failed to log progress: {}", err);
        }
        self.load().await;
    }

    /// Submits the controller's own entry form, then resets and closes it.
    pub async fn submit_form(&self) {
        let form = self.state.read().await.form.clone();
        self.log_entry(form.kind, &form).await;

        let mut state = self.state.write().await;
        state.form = ProgressForm::default();
        state.form_open = false;
    }

    pub async fn open_form(&self) {
        self.state.write().await.form_open = true;
    }

    pub async fn close_form(&self) {
        self.state.write().await.form_open = false;
    }

    pub async fn is_form_open(&self) -> bool {
        self.state.read().await.form_open
    }

    /// A snapshot of the entry form as currently filled in.
    pub async fn form(&self) -> ProgressForm {
        self.state.read().await.form.clone()
    }

    /// Applies an edit to the entry form.
    pub async fn update_form(&self, edit: impl FnOnce(&mut ProgressForm)) {
        edit(&mut self.state.write().await.form);
    }

    /// A snapshot of the current log list.
    pub async fn logs(&self) -> Vec<ProgressLog> {
        self.state.read().await.logs.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.logs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.logs.is_empty()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }
}
