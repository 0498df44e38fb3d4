use axum::async_trait;

use super::{GeneratedImage, GeneratedVideo, ImageProvider, VideoProvider};

/// Deterministic placeholder images, used both as the keyless provider and
/// as the fallback when a real provider fails.
pub fn mock_images(count: usize) -> Vec<GeneratedImage> {
    (0..count)
        .map(|i| GeneratedImage {
            id: format!("mock-{i}"),
            url: format!(
                "https://via.placeholder.com/1024x1024?text=Mock+Image+{}",
                i + 1
            ),
            prompt: "Mock generated image".to_string(),
        })
        .collect()
}

pub fn mock_video() -> GeneratedVideo {
    GeneratedVideo {
        id: "mock-video".to_string(),
        url: "https://example.com/sample-video.mp4".to_string(),
        status: "processing".to_string(),
        message: Some(
            "Mock video generation (use real Kling credentials to generate actual videos)"
                .to_string(),
        ),
    }
}

pub struct MockImageProvider;

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn generate(&self, _prompt: &str, count: usize) -> anyhow::Result<Vec<GeneratedImage>> {
        Ok(mock_images(count))
    }
}

pub struct MockVideoProvider;

#[async_trait]
impl VideoProvider for MockVideoProvider {
    async fn generate(&self, _image_url: &str, _prompt: &str) -> anyhow::Result<GeneratedVideo> {
        Ok(mock_video())
    }
}
