// src/services/supabase.rs
//! Auth provider client (Supabase GoTrue)
//!
//! The rest of the crate consumes the provider through the `AuthApi` trait:
//! "exchange code for session" and "get current user" are the only two
//! operations, both opaque contracts. Session issuance, OAuth and magic
//! links all live on the provider's side.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth provider unreachable: {0}")]
    RequestFailed(String),

    #[error("code exchange rejected: {0}")]
    ExchangeRejected(String),

    #[error("invalid response from auth provider: {0}")]
    InvalidResponse(String),
}

/// User identity as reported by the auth provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

/// Session returned by a successful code exchange
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// Operations this service needs from the auth provider.
///
/// Handlers receive the provider as an explicit trait object rather than
/// reading ambient SDK state, so tests can substitute a stub.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange an authorization code for a session.
    async fn exchange_code(&self, code: &str) -> Result<AuthSession, AuthError>;

    /// Resolve the user behind an access token. `Ok(None)` means the token
    /// no longer identifies anyone (expired, revoked, garbage).
    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AuthError>;
}

pub struct SupabaseService {
    http: Client,
    base_url: String,
    anon_key: String,
}

#[derive(Serialize)]
struct ExchangeRequest<'a> {
    auth_code: &'a str,
}

impl SupabaseService {
    pub fn new(http: Client, base_url: String, anon_key: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }
}

#[async_trait]
impl AuthApi for SupabaseService {
    async fn exchange_code(&self, code: &str) -> Result<AuthSession, AuthError> {
        let url = format!("{}/auth/v1/token?grant_type=pkce", self.base_url);

        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&ExchangeRequest { auth_code: code })
            .send()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(http_status = %status, "Code exchange rejected by auth provider");
            return Err(AuthError::ExchangeRejected(format!(
                "{}: {}",
                status, body
            )));
        }

        let session: AuthSession = resp
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        debug!("Code exchange succeeded");

        Ok(session)
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AuthError> {
        let url = format!("{}/auth/v1/user", self.base_url);

        let resp = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                debug!("Access token no longer identifies a user");
                Ok(None)
            }
            status if status.is_success() => {
                let user: AuthUser = resp
                    .json()
                    .await
                    .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
                Ok(Some(user))
            }
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(AuthError::InvalidResponse(format!("{}: {}", status, body)))
            }
        }
    }
}
