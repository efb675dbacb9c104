//! Tests for the tools module

#[cfg(test)]
mod tests {
    use super::super::models::*;

    #[test]
    fn test_niche_request_uses_function_field_names() {
        let req = NicheRequest {
            query: "woodworking".to_string(),
            filters: NicheFilters {
                order: Some("viewCount".to_string()),
                video_duration: Some("short".to_string()),
                min_views: Some(10_000),
                region_code: Some("US".to_string()),
                only_shorts: Some(true),
            },
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["query"], "woodworking");
        assert_eq!(value["filters"]["videoDuration"], "short");
        assert_eq!(value["filters"]["minViews"], 10_000);
        assert_eq!(value["filters"]["onlyShorts"], true);
    }

    #[test]
    fn test_niche_filters_default_to_empty_object() {
        let req: NicheRequest = serde_json::from_str(r#"{ "query": "asmr" }"#).unwrap();
        let value = serde_json::to_value(&req).unwrap();
        // Unset filters are omitted entirely, not sent as nulls
        assert_eq!(value["filters"], serde_json::json!({}));
    }

    #[test]
    fn test_thumbnail_request_round_trip() {
        let req: ThumbnailRequest = serde_json::from_str(
            r#"{ "userText": "red arrow, shocked face", "niche": null, "realism": true }"#,
        )
        .unwrap();
        assert_eq!(req.user_text, "red arrow, shocked face");
        assert_eq!(req.realism, Some(true));
        assert!(req.reference_image.is_none());

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["userText"], "red arrow, shocked face");
    }

    #[test]
    fn test_video_meta_request_field_name() {
        let req: VideoMetaRequest =
            serde_json::from_str(r#"{ "youtubeUrl": "https://youtu.be/abc123" }"#).unwrap();
        assert_eq!(req.youtube_url, "https://youtu.be/abc123");
    }
}
