// src/services/functions.rs
//! Remote content-generation functions
//!
//! The tool pages are thin clients: each endpoint forwards a JSON body to a
//! named remote function and hands the JSON response back. The function
//! slugs are whatever the deployment registered them under.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Function slug performing niche analysis
pub const NICHE_FUNCTION: &str = "dynamic-handler";
/// Function slug performing thumbnail image generation
pub const THUMBNAIL_FUNCTION: &str = "dynamic-api";
/// Function slug performing video transcription / metadata extraction
pub const VIDEO_META_FUNCTION: &str = "transcribe-video";

#[derive(Debug, thiserror::Error)]
pub enum FunctionsError {
    #[error("function endpoint unreachable: {0}")]
    RequestFailed(String),

    #[error("function returned error status {status}: {body}")]
    ErrorStatus { status: u16, body: String },

    #[error("invalid response from function: {0}")]
    InvalidResponse(String),
}

pub struct FunctionsService {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl FunctionsService {
    pub fn new(http: Client, base_url: String, anon_key: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    /// Invoke a remote function on behalf of an authenticated user.
    pub async fn invoke(
        &self,
        name: &str,
        access_token: &str,
        body: &Value,
    ) -> Result<Value, FunctionsError> {
        let url = format!("{}/functions/v1/{}", self.base_url, name);

        debug!(function = %name, "Invoking remote function");

        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await
            .map_err(|e| FunctionsError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(function = %name, http_status = %status, "Remote function returned error");
            return Err(FunctionsError::ErrorStatus {
                status: status.as_u16(),
                body,
            });
        }

        resp.json()
            .await
            .map_err(|e| FunctionsError::InvalidResponse(e.to_string()))
    }
}
