//! Content tool handlers
//!
//! Thin clients over the remote content-generation functions. Every route
//! here sits behind the pro-access gate, which has already resolved the
//! session and profile into request extensions.

use axum::{extract::Extension, Json};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

use super::models::{NicheRequest, ThumbnailRequest, VideoMetaRequest};
use crate::access::{has_pro_access, Profile};
use crate::auth::SessionUser;
use crate::common::{ApiError, AppState};
use crate::services::functions::{
    FunctionsError, NICHE_FUNCTION, THUMBNAIL_FUNCTION, VIDEO_META_FUNCTION,
};

impl From<FunctionsError> for ApiError {
    fn from(e: FunctionsError) -> Self {
        error!(error = %e, "Remote function call failed");
        ApiError::Upstream("content function failed".to_string())
    }
}

/// GET /saas
/// Dashboard summary for the protected landing page.
pub async fn dashboard(
    session: SessionUser,
    Extension(profile): Extension<Profile>,
) -> Json<Value> {
    Json(serde_json::json!({
        "user": session.user,
        "profile": profile,
        "has_pro_access": has_pro_access(Some(&profile), Utc::now()),
    }))
}

/// POST /saas/api/niches
/// Niche analysis: aggregate stats plus top videos/channels for a query.
pub async fn analyze_niche(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionUser,
    Json(payload): Json<NicheRequest>,
) -> Result<Json<Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let body = serde_json::to_value(&payload)
        .map_err(|e| ApiError::InternalServer(e.to_string()))?;

    let result = state
        .functions
        .invoke(NICHE_FUNCTION, &session.access_token, &body)
        .await?;

    Ok(Json(result))
}

/// POST /saas/api/thumbnail
/// Thumbnail image generation; responds with base64 image data.
pub async fn generate_thumbnail(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionUser,
    Json(payload): Json<ThumbnailRequest>,
) -> Result<Json<Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let body = serde_json::to_value(&payload)
        .map_err(|e| ApiError::InternalServer(e.to_string()))?;

    let result = state
        .functions
        .invoke(THUMBNAIL_FUNCTION, &session.access_token, &body)
        .await?;

    // The function signals some failures inside a 200 body
    if result.get("error").map_or(false, |e| !e.is_null()) {
        return Err(ApiError::Upstream("thumbnail generation failed".to_string()));
    }
    if result.get("imageBase64").map_or(true, Value::is_null) {
        return Err(ApiError::Upstream("no image in function response".to_string()));
    }

    Ok(Json(result))
}

/// POST /saas/api/video-meta
/// Video metadata extraction (title, description, tags, transcript).
pub async fn extract_video_meta(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionUser,
    Json(payload): Json<VideoMetaRequest>,
) -> Result<Json<Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let body = serde_json::to_value(&payload)
        .map_err(|e| ApiError::InternalServer(e.to_string()))?;

    let result = state
        .functions
        .invoke(VIDEO_META_FUNCTION, &session.access_token, &body)
        .await?;

    if result.get("error").map_or(false, |e| !e.is_null()) {
        return Err(ApiError::Upstream("video analysis failed".to_string()));
    }

    Ok(Json(result))
}
