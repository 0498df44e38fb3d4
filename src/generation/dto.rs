use serde::Deserialize;

/// Request body for POST /api/generate-images.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImagesRequest {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub ad_type: String,
}

/// Request body for POST /api/generate-video.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoRequest {
    #[serde(default)]
    pub image_url: String,
    pub video_style: Option<String>,
    pub custom_prompt: Option<String>,
}
