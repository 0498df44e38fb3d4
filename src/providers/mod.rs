use axum::async_trait;
use serde::{Deserialize, Serialize};

pub mod kling;
pub mod mock;
pub mod replicate;

/// One generated image descriptor as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub prompt: String,
}

/// One generated (or queued) video descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedVideo {
    pub id: String,
    pub url: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// External image-generation provider. Implementations issue a single
/// bounded-timeout call per image and never retry; callers own the
/// fallback policy.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate(&self, prompt: &str, count: usize) -> anyhow::Result<Vec<GeneratedImage>>;
}

/// External image-to-video provider.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    async fn generate(&self, image_url: &str, prompt: &str) -> anyhow::Result<GeneratedVideo>;
}
