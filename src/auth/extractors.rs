//! Session extractors for Axum
//!
//! The session is the provider-issued access token, carried in the
//! `yts_session` cookie (set by the auth callback) or an Authorization
//! bearer header. Resolution always round-trips to the auth provider;
//! nothing about the token is trusted locally.

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::redirect::cookie_value;
use crate::common::{ApiError, AppState};
use crate::services::AuthUser;

/// Cookie holding the provider access token for the browser session
pub const SESSION_COOKIE: &str = "yts_session";

const DEFAULT_SESSION_MAX_AGE: u64 = 3600;

/// Authenticated session context: the user plus the access token that
/// proves it (the token is forwarded to upstream functions).
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user: AuthUser,
    pub access_token: String,
}

/// Set-Cookie value installing the session after a successful callback.
pub fn session_cookie(access_token: &str, expires_in: Option<u64>) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        SESSION_COOKIE,
        access_token,
        expires_in.unwrap_or(DEFAULT_SESSION_MAX_AGE)
    )
}

/// Set-Cookie value clearing the session (logout).
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", SESSION_COOKIE)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Resolve the current session from request headers, or `None`.
///
/// Every failure mode (no token, provider says unknown, provider
/// unreachable) collapses to `None`: access decisions built on top of this
/// must fail closed, never open.
pub async fn resolve_session(state: &AppState, headers: &HeaderMap) -> Option<SessionUser> {
    let token = bearer_token(headers).or_else(|| cookie_value(headers, SESSION_COOKIE))?;

    match state.auth.get_user(&token).await {
        Ok(Some(user)) => {
            debug!(user_id = %user.id, "Session resolved");
            Some(SessionUser {
                user,
                access_token: token,
            })
        }
        Ok(None) => {
            debug!("Session token no longer valid");
            None
        }
        Err(e) => {
            warn!(error = %e, "Auth provider error during session resolution");
            None
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // The access gate resolves the session once per request and caches
        // it in extensions; reuse that instead of a second provider call.
        if let Some(cached) = parts.extensions.get::<SessionUser>() {
            return Ok(cached.clone());
        }

        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        match resolve_session(&app_state, &parts.headers).await {
            Some(session) => Ok(session),
            None => {
                warn!("Authentication failed: no valid session");
                Err(ApiError::Unauthorized("no valid session".into()))
            }
        }
    }
}
