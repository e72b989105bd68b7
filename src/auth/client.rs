// src/auth/client.rs
//! Thin client for the authentication provider's email endpoints.
//!
//! The provider owns accounts, password checks, and session issuance; all we
//! do here is relay credentials and hand the opaque token to the cookie.

use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use super::models::{SessionResponse, SignInRequest, SignUpRequest};
use crate::common::ClientError;

/// Error body shape the provider uses; `message` is all we care about.
#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

pub struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn sign_in(&self, payload: &SignInRequest) -> Result<SessionResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/sign-in/email"))
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn sign_up(&self, payload: &SignUpRequest) -> Result<SessionResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/sign-up/email"))
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// A provider 401 here means bad credentials, not a missing session, so
    /// it stays an `Api` error and its message reaches the rewording layer.
    async fn decode(response: Response) -> Result<SessionResponse, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ProviderError>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("Request failed with status {}", status));
            debug!(status = %status, message = %message, "Auth provider rejected the request");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<SessionResponse>().await?)
    }
}
