//! Request shapes for the content tools
//!
//! Field names follow the remote functions' contracts (camelCase), so a
//! request body deserialized here can be forwarded as-is.

use serde::{Deserialize, Serialize};

/// Niche analysis request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheRequest {
    pub query: String,
    #[serde(default)]
    pub filters: NicheFilters,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_shorts: Option<bool>,
}

/// Thumbnail generation request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRequest {
    pub user_text: String,
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub realism: Option<bool>,
    /// Base64 reference image for edit mode
    #[serde(default)]
    pub reference_image: Option<String>,
}

/// Video metadata extraction request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetaRequest {
    pub youtube_url: String,
}
