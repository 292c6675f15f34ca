//! Laurel board controller.
//!
//! Fetch-and-replace view state for the achievements panel: the list
//! is owned by the backend, refetched in full after every award, and
//! the point total is always derived from the list in hand.

use std::sync::Arc;

use stride_core::{laurel, CoachApi, Identity, Laurel};
use tokio::sync::RwLock;

#[derive(Default)]
struct BoardState {
    laurels: Vec<Laurel>,
    loading: bool,
}

/// View-state controller for the laurels panel.
pub struct LaurelBoard {
    identity: Identity,
    api: Arc<dyn CoachApi>,
    state: RwLock<BoardState>,
}

impl LaurelBoard {
    pub fn new(identity: Identity, api: Arc<dyn CoachApi>) -> Self {
        Self {
            identity,
            api,
            state: RwLock::new(BoardState::default()),
        }
    }

    /// Fetches the full laurel list and replaces the in-memory one.
    ///
    /// On failure the prior list (empty on first load) stays in place;
    /// the error is logged and swallowed. Overlapping loads are not
    /// serialized - the last resolution wins.
    pub async fn load(&self) {
        self.state.write().await.loading = true;
        let result = self.api.laurels(&self.identity).await;
        let mut state = self.state.write().await;
        match result {
            Ok(laurels) => state.laurels = laurels,
            Err(err) => tracing::warn!("Failed to fetch laurels: {}", err),
        }
        state.loading = false;
    }

    /// Awards a laurel, then reloads the list.
    ///
    /// No optimistic insertion happens; the new record only appears
    /// through the refetch. The reload runs even when the create call
    /// failed - it simply shows no new entry.
    pub async fn award(&self, laurel_type: &str, points: u32, description: &str) {
        if let Err(err) = self
            .api
            .award_laurel(&self.identity, laurel_type, points, description)
            .await
        {
            tracing::warn!("Failed to award laurel '{}': {}", laurel_type, err);
        }
        self.load().await;
    }

    /// Quick action: record a completed workout session.
    pub async fn log_workout(&self) {
        self.award("workout_completed", 10, "Completed a workout session")
            .await;
    }

    /// Quick action: record that a new fitness goal was set.
    pub async fn set_goal(&self) {
        self.award("goal_set", 5, "Set a new fitness goal").await;
    }

    /// Sum of points over the current list, recomputed on demand.
    pub async fn total_points(&self) -> u32 {
        laurel::total_points(&self.state.read().await.laurels)
    }

    /// A snapshot of the current laurel list.
    pub async fn laurels(&self) -> Vec<Laurel> {
        self.state.read().await.laurels.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.laurels.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.laurels.is_empty()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }
}
