//! Wire DTOs for the coach backend's JSON surface.
//!
//! The backend speaks integer ids, raw `laurel_type`/`log_type`
//! strings, and a free-form `log_data` document; these types mirror
//! that shape exactly and convert into the domain models. A malformed
//! `log_data` degrades to an all-default payload instead of failing
//! the whole list.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use stride_core::{ChatReply, Laurel, LogKind, ProgressLog};

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequestDto {
    pub user_id: String,
    pub message: String,
}

/// Response body of `POST /chat`.
///
/// The backend also sends `type`, `field`, and `plan` depending on
/// which coaching flow answered; this client only consumes `text`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseDto {
    #[serde(default)]
    pub text: Option<String>,
}

impl From<ChatResponseDto> for ChatReply {
    fn from(dto: ChatResponseDto) -> Self {
        ChatReply { text: dto.text }
    }
}

/// One laurel record as returned by `GET /laurels/{user_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LaurelDto {
    pub id: i64,
    pub laurel_type: String,
    pub points: u32,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
}

impl From<LaurelDto> for Laurel {
    fn from(dto: LaurelDto) -> Self {
        Laurel {
            id: dto.id.to_string(),
            laurel_type: dto.laurel_type,
            points: dto.points,
            // The backend defaults missing descriptions to "".
            description: dto.description.filter(|d| !d.is_empty()),
            created_at: dto.created_at,
        }
    }
}

/// One progress record as returned by `GET /progress/{user_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressLogDto {
    pub id: i64,
    pub log_type: String,
    #[serde(default)]
    pub log_data: serde_json::Value,
    pub created_at: String,
}

impl From<ProgressLogDto> for ProgressLog {
    fn from(dto: ProgressLogDto) -> Self {
        ProgressLog {
            id: dto.id.to_string(),
            kind: LogKind::from_str(&dto.log_type).unwrap_or_default(),
            payload: serde_json::from_value(dto.log_data).unwrap_or_default(),
            created_at: dto.created_at,
        }
    }
}

/// Request body for `POST /progress`.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressLogRequestDto {
    pub user_id: String,
    pub log_type: String,
    pub log_data: serde_json::Value,
}
