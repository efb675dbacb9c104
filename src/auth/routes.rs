//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /auth/callback` - Post-login callback (code exchange + redirect)
/// - `GET /api/me` - Current user, profile and access state
/// - `POST /api/auth/logout` - Clear the session cookie
pub fn auth_routes() -> Router {
    Router::new()
        .route("/auth/callback", get(handlers::auth_callback))
        .route("/api/me", get(handlers::me_handler))
        .route("/api/auth/logout", post(handlers::logout_handler))
}
