//! HTTP implementation of the coach API.
//!
//! Talks to the Stride backend's REST surface with reqwest. Transport
//! and server failures both map onto `CoachError::Remote`; no retries
//! and no client-side timeout live at this layer.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use stride_core::{
    ChatReply, CoachApi, CoachError, Identity, Laurel, LogKind, ProgressLog, ProgressPayload,
    Result,
};

use crate::dto::{ChatRequestDto, ChatResponseDto, LaurelDto, ProgressLogDto, ProgressLogRequestDto};

/// `CoachApi` implementation over the backend's REST endpoints.
#[derive(Clone)]
pub struct HttpCoachApi {
    client: Client,
    base_url: String,
}

impl HttpCoachApi {
    /// Creates a client against the given base URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(CoachError::remote_status(status, body));
        }

        response.json().await.map_err(|err| CoachError::Serialization {
            format: "JSON".to_string(),
            message: format!("Failed to parse backend response: {err}"),
        })
    }

    async fn read_status(response: reqwest::Response) -> Result<()> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(CoachError::remote_status(status, body));
        }
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> CoachError {
    CoachError::remote(format!("Backend request failed: {err}"))
}

#[async_trait]
impl CoachApi for HttpCoachApi {
    async fn send_message(&self, user: &Identity, text: &str) -> Result<ChatReply> {
        let body = ChatRequestDto {
            user_id: user.to_string(),
            message: text.to_string(),
        };
        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let dto: ChatResponseDto = Self::read_json(response).await?;
        Ok(dto.into())
    }

    async fn laurels(&self, user: &Identity) -> Result<Vec<Laurel>> {
        let response = self
            .client
            .get(format!("{}/laurels/{}", self.base_url, user))
            .send()
            .await
            .map_err(transport_error)?;

        let dtos: Vec<LaurelDto> = Self::read_json(response).await?;
        Ok(dtos.into_iter().map(Laurel::from).collect())
    }

    async fn award_laurel(
        &self,
        user: &Identity,
        laurel_type: &str,
        points: u32,
        description: &str,
    ) -> Result<()> {
        // The backend takes award parameters as query strings.
        let response = self
            .client
            .post(format!("{}/laurels/{}/award", self.base_url, user))
            .query(&[
                ("laurel_type", laurel_type),
                ("points", &points.to_string()),
                ("description", description),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_status(response).await
    }

    async fn progress_logs(&self, user: &Identity) -> Result<Vec<ProgressLog>> {
        let response = self
            .client
            .get(format!("{}/progress/{}", self.base_url, user))
            .send()
            .await
            .map_err(transport_error)?;

        let dtos: Vec<ProgressLogDto> = Self::read_json(response).await?;
        Ok(dtos.into_iter().map(ProgressLog::from).collect())
    }

    async fn log_progress(
        &self,
        user: &Identity,
        kind: LogKind,
        payload: &ProgressPayload,
    ) -> Result<()> {
        let body = ProgressLogRequestDto {
            user_id: user.to_string(),
            log_type: kind.to_string(),
            log_data: serde_json::to_value(payload)?,
        };
        let response = self
            .client
            .post(format!("{}/progress", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_status(response).await
    }
}
