//! Progress log domain model and entry-form parsing.
//!
//! Progress logs are user-submitted records of workouts, measurements,
//! and goal events. The entry form is free text; [`ProgressForm`]
//! turns it into the structured payload the backend stores.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The kind of a progress log entry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LogKind {
    #[default]
    Workout,
    Measurement,
    Goal,
}

/// The loosely-typed payload of a progress log entry.
///
/// The backend stores this as a free-form JSON document; every field
/// defaults when absent so that older or hand-written records still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPayload {
    /// Duration in minutes.
    #[serde(default)]
    pub duration: u32,
    /// Exercises performed, in the order they were entered.
    #[serde(default)]
    pub exercises: Vec<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

/// A progress log record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressLog {
    /// Opaque identifier assigned by the backend.
    pub id: String,
    /// What kind of event this records.
    pub kind: LogKind,
    /// The structured payload.
    pub payload: ProgressPayload,
    /// Timestamp when the entry was logged (ISO 8601 format).
    pub created_at: String,
}

/// The raw entry form as the user fills it in.
///
/// Everything is a string until submission; [`ProgressForm::to_payload`]
/// applies the only parsing this client does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressForm {
    pub kind: LogKind,
    /// Duration in minutes, as typed.
    pub duration: String,
    /// Comma-separated exercise list, as typed.
    pub exercises: String,
    /// Free-form notes.
    pub notes: String,
}

impl Default for ProgressForm {
    fn default() -> Self {
        Self {
            kind: LogKind::Workout,
            duration: String::new(),
            exercises: String::new(),
            notes: String::new(),
        }
    }
}

impl ProgressForm {
    /// Converts the free-text form into a structured payload.
    ///
    /// Duration parses as an integer and defaults to 0 on failure.
    /// Exercises split on commas; each piece is trimmed and empty
    /// pieces are dropped, preserving order. Notes pass through
    /// verbatim. No further validation is applied.
    pub fn to_payload(&self) -> ProgressPayload {
        ProgressPayload {
            duration: self.duration.trim().parse().unwrap_or(0),
            exercises: self
                .exercises
                .split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect(),
            notes: self.notes.clone(),
        }
    }
}
