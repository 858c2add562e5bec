//! HTTP client for login and password-reset endpoints.

use crate::chat_api::{decode, read_body, require, transport_error};
use domain::error::ApiError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
struct RawLoginResponse {
    access_token: Option<String>,
}

// The identity-check and reset endpoints disagree on body casing.
#[derive(Serialize)]
struct VerifyUserBody<'a> {
    emp_id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordBody<'a> {
    emp_id: &'a str,
    new_password: &'a str,
}

#[derive(Deserialize)]
struct ErrorDetail {
    detail: Option<String>,
}

#[derive(Clone)]
pub struct AuthApiClient {
    client: Arc<Client>,
    base_url: String,
}

impl AuthApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: base_url.into(),
        }
    }

    /// `POST /login` with a form-encoded body; returns the access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/login", self.base_url);
        tracing::debug!(%url, "logging in");

        let response = self
            .client
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(transport_error)?;
        let (status, body) = read_body(response).await?;
        let raw: RawLoginResponse = decode(status, &body)?;
        require(raw.access_token, "access_token", status)
    }

    /// `POST /api/verify-user`: confirms the employee id / name pair before a
    /// password reset. The server reports failures in a `detail` field.
    pub async fn verify_user(&self, emp_id: &str, name: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/verify-user", self.base_url);
        tracing::debug!(%url, "verifying user identity");

        let response = self
            .client
            .post(&url)
            .json(&VerifyUserBody { emp_id, name })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorDetail>(&text)
                .ok()
                .and_then(|e| e.detail)
                .unwrap_or(text);
            return Err(ApiError::ServerRejected {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(())
    }

    /// `POST /reset-password` for a verified employee.
    pub async fn reset_password(&self, emp_id: &str, new_password: &str) -> Result<(), ApiError> {
        let url = format!("{}/reset-password", self.base_url);
        tracing::debug!(%url, "resetting password");

        let response = self
            .client
            .post(&url)
            .json(&ResetPasswordBody {
                emp_id,
                new_password,
            })
            .send()
            .await
            .map_err(transport_error)?;
        read_body(response).await?;
        Ok(())
    }
}
