//! Protected-area routes
//!
//! Everything under /saas sits behind the pro-access gate.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::auth::require_pro_access;

/// Creates and returns the protected /saas router
///
/// # Routes
/// - `GET /saas` - Dashboard summary
/// - `POST /saas/api/niches` - Niche analysis
/// - `POST /saas/api/thumbnail` - Thumbnail generation
/// - `POST /saas/api/video-meta` - Video metadata extraction
pub fn saas_routes() -> Router {
    Router::new()
        .route("/saas", get(handlers::dashboard))
        .route("/saas/api/niches", post(handlers::analyze_niche))
        .route("/saas/api/thumbnail", post(handlers::generate_thumbnail))
        .route("/saas/api/video-meta", post(handlers::extract_video_meta))
        .layer(middleware::from_fn(require_pro_access))
}
