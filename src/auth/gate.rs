//! Route-level access gate for the protected area
//!
//! Runs on every request under the /saas prefix. Requires a valid session
//! and a profile that passes `has_pro_access`; anything less redirects to
//! the pricing page. A profile lookup failure is treated identically to
//! "no profile" - the gate fails closed on every path.

use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::extractors::resolve_session;
use crate::access::{fetch_profile_or_none, has_pro_access};
use crate::common::AppState;

/// Where denied requests are sent
pub const DENIED_REDIRECT: &str = "/pricing";

pub async fn require_pro_access(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    mut req: Request,
    next: Next,
) -> Response {
    let state = state_lock.read().await.clone();

    let Some(session) = resolve_session(&state, req.headers()).await else {
        debug!(path = %req.uri().path(), "Gate denied: no session");
        return Redirect::to(DENIED_REDIRECT).into_response();
    };

    let Some(profile) = fetch_profile_or_none(&state.db, &session.user.id).await else {
        info!(user_id = %session.user.id, "Gate denied: no profile");
        return Redirect::to(DENIED_REDIRECT).into_response();
    };

    if !has_pro_access(Some(&profile), Utc::now()) {
        info!(
            user_id = %session.user.id,
            subscription_status = ?profile.subscription_status,
            "Gate denied: no pro access"
        );
        return Redirect::to(DENIED_REDIRECT).into_response();
    }

    req.extensions_mut().insert(session);
    req.extensions_mut().insert(profile);

    next.run(req).await
}
