use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::features::assignments::dtos::{AssignUserDto, AssignedUserDto};
use crate::features::comments::dtos::{CommentResponseDto, CreateCommentDto};
use crate::features::risks::dtos::{
    CreateRiskDto, RiskListItemDto, RiskResponseDto, UpdateRiskDto,
};
use crate::features::users::dtos::UserResponseDto;
use crate::shared::types::ApiResponse;

/// Errors surfaced by [`RiskApiClient`].
///
/// Callers can distinguish "the server said no" (with the server's own
/// message) from "the request never completed", instead of collapsing both
/// into an empty result.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server rejected request ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Typed HTTP client for the risk register API, one method per endpoint.
/// No retries, no timeouts beyond reqwest's defaults, no caching.
pub struct RiskApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl RiskApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn list_users(&self) -> ClientResult<Vec<UserResponseDto>> {
        self.get_json("/users").await
    }

    pub async fn list_risks(&self) -> ClientResult<Vec<RiskListItemDto>> {
        self.get_json("/risks").await
    }

    pub async fn create_risk(&self, risk: &CreateRiskDto) -> ClientResult<RiskResponseDto> {
        self.post_json("/risks", risk).await
    }

    pub async fn update_risk(&self, id: i32, risk: &UpdateRiskDto) -> ClientResult<RiskResponseDto> {
        let response = self
            .http
            .put(self.url(&format!("/risks/{}", id)))
            .json(risk)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn delete_risk(&self, id: i32) -> ClientResult<()> {
        self.delete(&format!("/risks/{}", id)).await
    }

    pub async fn list_comments(&self, risk_id: i32) -> ClientResult<Vec<CommentResponseDto>> {
        self.get_json(&format!("/risks/{}/comments", risk_id)).await
    }

    pub async fn add_comment(
        &self,
        risk_id: i32,
        comment: &CreateCommentDto,
    ) -> ClientResult<CommentResponseDto> {
        self.post_json(&format!("/risks/{}/comments", risk_id), comment)
            .await
    }

    pub async fn delete_comment(&self, risk_id: i32, comment_id: i32) -> ClientResult<()> {
        self.delete(&format!("/risks/{}/comments/{}", risk_id, comment_id))
            .await
    }

    pub async fn list_assignments(&self, risk_id: i32) -> ClientResult<Vec<AssignedUserDto>> {
        self.get_json(&format!("/risks/{}/assignments", risk_id))
            .await
    }

    pub async fn assign_user(&self, risk_id: i32, user_id: i32) -> ClientResult<AssignedUserDto> {
        self.post_json(
            &format!("/risks/{}/assignments", risk_id),
            &AssignUserDto { user_id },
        )
        .await
    }

    pub async fn unassign_user(&self, risk_id: i32, user_id: i32) -> ClientResult<()> {
        self.delete(&format!("/risks/{}/assignments/{}", risk_id, user_id))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.http.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status, response).await);
        }
        Ok(())
    }

    /// Unwrap the `ApiResponse` envelope, turning non-success statuses and
    /// missing payloads into `ClientError::Api`
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status, response).await);
        }

        let envelope: ApiResponse<T> = response.json().await?;
        envelope.data.ok_or(ClientError::Api {
            status,
            message: "response contained no data".to_string(),
        })
    }

    async fn api_error(status: StatusCode, response: reqwest::Response) -> ClientError {
        let message = response
            .json::<ApiResponse<serde_json::Value>>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("request failed with status {}", status));
        ClientError::Api { status, message }
    }
}
