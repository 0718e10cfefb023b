//! API client for the DMS backend HTTP API.
//!
//! This module provides the `ApiClient` struct for the login call and the
//! two OCR reprocess triggers. The backend runs OCR asynchronously, so the
//! trigger endpoints acknowledge immediately and the client never waits for
//! processing to finish.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::auth::SessionData;

use super::ApiError;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

/// Acknowledgement returned by the reprocess endpoints.
///
/// The backend replies with a human-readable `message` and a `status` of
/// `"processing"`; both are optional here so an empty or non-JSON body from
/// an older backend is not treated as a failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReprocessAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "documentId")]
    pub document_id: Option<i64>,
}

/// API client for the DMS backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    ///
    /// No request timeout is configured; a hung backend hangs the call,
    /// matching how the trigger has always behaved.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(), // Cheap clone, shares connection pool
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    /// Authenticate against the backend and return session data.
    ///
    /// Any non-2xx response or transport error comes back as an `ApiError`;
    /// the caller decides whether to try another candidate password.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionData, ApiError> {
        let url = self.login_url();
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        debug!(%url, username, "sending login request");

        let response = self.client.post(&url).json(&body).send().await?;
        let response = Self::check_response(response).await?;

        let text = response.text().await?;
        let auth: LoginResponse = serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("login body did not parse: {e}")))?;

        debug!(username = ?auth.username, role = ?auth.role, "login accepted");

        Ok(SessionData {
            token: auth.token,
            username: auth.username,
            role: auth.role,
        })
    }

    /// Trigger OCR reprocessing for every document in the system.
    pub async fn reprocess_all(&self) -> Result<ReprocessAck, ApiError> {
        self.trigger(self.reprocess_all_url()).await
    }

    /// Trigger OCR reprocessing for a single document.
    /// The id is passed through into the URL path unvalidated.
    pub async fn reprocess_document(&self, document_id: &str) -> Result<ReprocessAck, ApiError> {
        self.trigger(self.reprocess_document_url(document_id)).await
    }

    async fn trigger(&self, url: String) -> Result<ReprocessAck, ApiError> {
        debug!(%url, "sending reprocess request");

        let mut request = self.client.post(&url);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let response = Self::check_response(response).await?;

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(ReprocessAck::default());
        }

        match serde_json::from_str(&text) {
            Ok(ack) => Ok(ack),
            Err(e) => {
                debug!(error = %e, "reprocess acknowledgement was not JSON");
                Ok(ReprocessAck::default())
            }
        }
    }

    /// Check if response is successful, returning an error with status and body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    fn login_url(&self) -> String {
        format!("{}/api/auth/login", self.base_url)
    }

    fn reprocess_all_url(&self) -> String {
        format!("{}/api/documents/reprocess-ocr/all", self.base_url)
    }

    fn reprocess_document_url(&self, document_id: &str) -> String {
        format!("{}/api/documents/{}/reprocess-ocr", self.base_url, document_id)
    }
}
