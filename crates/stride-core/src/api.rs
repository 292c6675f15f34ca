//! The remote coach API seam.
//!
//! All real computation (AI responses, point totals, persistence)
//! happens behind this trait. Controllers receive an `Arc<dyn CoachApi>`
//! so tests can substitute a scripted implementation.

use crate::chat::ChatReply;
use crate::error::Result;
use crate::identity::Identity;
use crate::laurel::Laurel;
use crate::progress::{LogKind, ProgressLog, ProgressPayload};

/// The five logical operations exposed by the coach backend.
///
/// Every operation fails by returning a [`crate::error::CoachError`];
/// no structured error payload beyond that is consumed at this layer.
#[async_trait::async_trait]
pub trait CoachApi: Send + Sync {
    /// Sends one conversational turn and returns the coach's reply.
    async fn send_message(&self, user: &Identity, text: &str) -> Result<ChatReply>;

    /// Fetches the full laurel list for the user.
    async fn laurels(&self, user: &Identity) -> Result<Vec<Laurel>>;

    /// Awards a laurel. The new record only becomes visible through a
    /// subsequent [`CoachApi::laurels`] call.
    async fn award_laurel(
        &self,
        user: &Identity,
        laurel_type: &str,
        points: u32,
        description: &str,
    ) -> Result<()>;

    /// Fetches the full progress log list for the user.
    async fn progress_logs(&self, user: &Identity) -> Result<Vec<ProgressLog>>;

    /// Creates a progress log entry.
    async fn log_progress(
        &self,
        user: &Identity,
        kind: LogKind,
        payload: &ProgressPayload,
    ) -> Result<()>;
}
