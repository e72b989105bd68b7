// src/tasks/client.rs
//! HTTP client for the remote task API.
//!
//! `TaskApi` is the seam the controller is written against; `HttpTaskApi`
//! is the real implementation, one instance per session token.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::models::{Task, TaskCreate, TaskListResponse, TaskUpdate, TokenValidation};
use crate::common::ClientError;

/// Remote task API surface consumed by the controller.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list_tasks(&self) -> Result<TaskListResponse, ClientError>;
    async fn get_task(&self, id: i64) -> Result<Task, ClientError>;
    async fn create_task(&self, payload: &TaskCreate) -> Result<Task, ClientError>;
    async fn update_task(&self, id: i64, payload: &TaskUpdate) -> Result<Task, ClientError>;
    async fn delete_task(&self, id: i64) -> Result<(), ClientError>;
    async fn validate_token(&self) -> Result<TokenValidation, ClientError>;
}

/// Error body the backend uses for every non-2xx response; the wrapper also
/// carries a `code` field we have no use for.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// `TaskApi` over HTTP, authenticated with the session token as a bearer
/// credential on every request.
pub struct HttpTaskApi {
    http: Client,
    base_url: String,
    token: String,
}

impl HttpTaskApi {
    pub fn new(http: Client, base_url: String, token: String) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Maps the response status before touching the body: 401/403 become the
    /// typed auth failure, other non-2xx carry the backend's message through.
    async fn ensure_success(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!(status = %status, "Task API rejected the session token");
            return Err(ClientError::AuthRequired);
        }
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| format!("Request failed with status {}", status));
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        Ok(Self::ensure_success(response).await?.json::<T>().await?)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<TaskListResponse, ClientError> {
        let response = self
            .http
            .get(self.url("/tasks"))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get_task(&self, id: i64) -> Result<Task, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/tasks/{}", id)))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn create_task(&self, payload: &TaskCreate) -> Result<Task, ClientError> {
        let response = self
            .http
            .post(self.url("/tasks"))
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update_task(&self, id: i64, payload: &TaskUpdate) -> Result<Task, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/tasks/{}", id)))
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_task(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/tasks/{}", id)))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn validate_token(&self) -> Result<TokenValidation, ClientError> {
        let response = self
            .http
            .get(self.url("/tasks/validate-token"))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::decode(response).await
    }
}
