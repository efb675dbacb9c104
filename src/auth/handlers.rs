//! Authentication handlers

use axum::{
    extract::{Extension, Query},
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    Json,
};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::extractors::{clear_session_cookie, session_cookie, SessionUser};
use super::redirect::{
    redirect_cookie, resolve_destination, resolve_intent, CLEAR_REDIRECT_COOKIE,
};
use crate::access::{fetch_profile_or_none, has_pro_access};
use crate::common::{safe_email_log, ApiError, AppState};
use crate::services::AuthUser;

/// Redirect that also expires the redirect-intent cookie. Every exit from
/// the callback goes through this, so the cookie never survives a
/// callback round-trip, whichever branch was taken.
fn clearing_redirect(location: &str) -> Response {
    (
        AppendHeaders([(header::SET_COOKIE, CLEAR_REDIRECT_COOKIE.to_string())]),
        Redirect::to(location),
    )
        .into_response()
}

/// GET /auth/callback
///
/// Post-authentication landing point. Exchanges the authorization code for
/// a session, then decides where to send the user:
/// - missing code -> /login
/// - exchange failed -> /login?error=auth
/// - no user behind the session -> /login
/// - otherwise: intent (query > cookie > /saas) filtered through the
///   business override, and the session cookie is installed.
pub async fn auth_callback(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let state = state_lock.read().await.clone();
    let origin = state.public_origin.trim_end_matches('/');

    let redirect_from_query = params.get("redirect_to").cloned();
    let redirect_from_cookie = redirect_cookie(&headers);
    let initial = resolve_intent(
        redirect_from_query.as_deref(),
        redirect_from_cookie.as_deref(),
    );

    let Some(code) = params.get("code") else {
        info!("Auth callback without code");
        return clearing_redirect(&format!("{}/login", origin));
    };

    let session = match state.auth.exchange_code(code).await {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "Code exchange failed");
            return clearing_redirect(&format!("{}/login?error=auth", origin));
        }
    };

    // The exchange response usually carries the user; fall back to an
    // explicit lookup when it does not.
    let user: Option<AuthUser> = match session.user.clone() {
        Some(user) => Some(user),
        None => state
            .auth
            .get_user(&session.access_token)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "User lookup failed after code exchange");
                None
            }),
    };

    let Some(user) = user else {
        warn!("Code exchange produced no authenticated user");
        return clearing_redirect(&format!("{}/login", origin));
    };

    // Lookup errors fold into "no profile": a user the billing store does
    // not know is routed like any other free user.
    let profile = fetch_profile_or_none(&state.db, &user.id).await;

    let destination = resolve_destination(profile.as_ref(), &initial);

    info!(
        user_id = %user.id,
        email = %user.email.as_deref().map(safe_email_log).unwrap_or_default(),
        intent = %initial,
        destination = %destination,
        "Auth callback resolved"
    );

    (
        AppendHeaders([
            (header::SET_COOKIE, CLEAR_REDIRECT_COOKIE.to_string()),
            (
                header::SET_COOKIE,
                session_cookie(&session.access_token, session.expires_in),
            ),
        ]),
        Redirect::to(&format!("{}{}", origin, destination)),
    )
        .into_response()
}

/// GET /api/me
/// Returns the current authenticated user, their profile, and whether they
/// hold pro access right now.
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let profile = fetch_profile_or_none(&state.db, &session.user.id).await;
    let pro = has_pro_access(profile.as_ref(), Utc::now());

    let resp = serde_json::json!({
        "user": session.user,
        "profile": profile,
        "has_pro_access": pro,
    });
    Ok(Json(resp))
}

/// POST /api/auth/logout
/// Clears the session cookie; the provider-side session simply expires.
pub async fn logout_handler(_session: SessionUser) -> Response {
    info!("User logout successful");
    (
        AppendHeaders([(header::SET_COOKIE, clear_session_cookie())]),
        Json(serde_json::json!({ "message": "Logout successful" })),
    )
        .into_response()
}
