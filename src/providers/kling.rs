use std::time::Duration;

use anyhow::Context;
use axum::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use super::{GeneratedVideo, VideoProvider};

const GENERATE_URL: &str = "https://api.klingai.com/v1/videos/generate";

/// Image-to-video generation via the Kling API.
pub struct KlingProvider {
    http: reqwest::Client,
    access_key: String,
    secret_key: String,
    timeout: Duration,
}

impl KlingProvider {
    pub fn new(
        http: reqwest::Client,
        access_key: String,
        secret_key: String,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            access_key,
            secret_key,
            timeout,
        }
    }
}

#[async_trait]
impl VideoProvider for KlingProvider {
    async fn generate(&self, image_url: &str, prompt: &str) -> anyhow::Result<GeneratedVideo> {
        let body = json!({
            "image_url": image_url,
            "prompt": prompt,
            "duration": 5,
            "aspect_ratio": "16:9",
        });

        let resp = self
            .http
            .post(GENERATE_URL)
            .header("Authorization", format!("Bearer {}", self.access_key))
            .header("X-API-Key", &self.secret_key)
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .context("kling request failed")?
            .error_for_status()
            .context("kling returned error status")?;

        let payload = resp
            .json::<Value>()
            .await
            .context("kling response was not JSON")?;

        let video = payload
            .get("video")
            .cloned()
            .context("kling response missing video")?;
        let video: GeneratedVideo =
            serde_json::from_value(video).context("kling video had unexpected shape")?;
        debug!(video_id = %video.id, status = %video.status, "kling video accepted");
        Ok(video)
    }
}
