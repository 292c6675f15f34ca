//! Laurel (achievement) domain model.

use serde::{Deserialize, Serialize};

/// An achievement record awarded to a user.
///
/// Laurels are owned by the backend; the client only reads them and
/// triggers creation. `laurel_type` is an open string on the wire (the
/// backend accepts any value), so it is kept raw here and classified
/// for display via [`LaurelKind::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laurel {
    /// Opaque identifier assigned by the backend.
    pub id: String,
    /// Raw laurel type, e.g. "first_plan" or "workout_completed".
    pub laurel_type: String,
    /// Points awarded with this laurel.
    pub points: u32,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Timestamp when the laurel was awarded (ISO 8601 format).
    pub created_at: String,
}

impl Laurel {
    /// Classifies the raw laurel type for display purposes.
    pub fn kind(&self) -> LaurelKind {
        LaurelKind::classify(&self.laurel_type)
    }
}

/// Display classification of a laurel type.
///
/// Unknown types fall back to [`LaurelKind::Other`] rather than
/// failing; the backend's type vocabulary is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaurelKind {
    FirstPlan,
    WorkoutStreak,
    GoalAchieved,
    Other,
}

impl LaurelKind {
    /// Maps a raw laurel type to its display classification.
    pub fn classify(laurel_type: &str) -> Self {
        match laurel_type {
            "first_plan" => Self::FirstPlan,
            "workout_streak" => Self::WorkoutStreak,
            "goal_achieved" => Self::GoalAchieved,
            _ => Self::Other,
        }
    }

    /// A small glyph for terminal rendering.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::FirstPlan => "🏆",
            Self::WorkoutStreak => "📈",
            Self::GoalAchieved => "🎖",
            Self::Other => "⭐",
        }
    }
}

/// Sums the points over a slice of laurels.
///
/// The total is always derived from the current list and never stored
/// independently, so it cannot drift from what is displayed.
pub fn total_points(laurels: &[Laurel]) -> u32 {
    laurels.iter().map(|l| l.points).sum()
}
