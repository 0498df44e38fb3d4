use std::time::Duration;

use anyhow::Context;
use axum::async_trait;
use serde_json::{json, Value};
use time::OffsetDateTime;
use tracing::{debug, warn};

use super::{GeneratedImage, ImageProvider};

const PREDICTIONS_URL: &str = "https://api.replicate.com/v1/predictions";

/// Stable Diffusion model pin on Replicate.
const MODEL_VERSION: &str = "a9d47cee2f51b56e9280ce2ff0af282ef61d0b6379a53e5bba3ee62628a139b3";

/// Image generation via the Replicate predictions API. One POST per
/// requested image, each with its own bounded timeout.
pub struct ReplicateProvider {
    http: reqwest::Client,
    api_key: String,
    timeout: Duration,
}

impl ReplicateProvider {
    pub fn new(http: reqwest::Client, api_key: String, timeout: Duration) -> Self {
        Self {
            http,
            api_key,
            timeout,
        }
    }

    async fn predict(&self, prompt: &str) -> anyhow::Result<Value> {
        let body = json!({
            "version": MODEL_VERSION,
            "input": {
                "prompt": prompt,
                "width": 768,
                "height": 768,
                "num_outputs": 1,
                "num_inference_steps": 50,
                "guidance_scale": 7.5,
            }
        });

        let resp = self
            .http
            .post(PREDICTIONS_URL)
            .header("Authorization", format!("Token {}", self.api_key))
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .context("replicate request failed")?
            .error_for_status()
            .context("replicate returned error status")?;

        resp.json::<Value>()
            .await
            .context("replicate response was not JSON")
    }
}

#[async_trait]
impl ImageProvider for ReplicateProvider {
    async fn generate(&self, prompt: &str, count: usize) -> anyhow::Result<Vec<GeneratedImage>> {
        let now_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let mut images = Vec::with_capacity(count);

        for i in 0..count {
            let prediction = match self.predict(prompt).await {
                Ok(v) => v,
                Err(e) => {
                    warn!(error = %e, attempt = i, "replicate prediction failed");
                    continue;
                }
            };
            for (idx, url) in output_urls(&prediction).into_iter().enumerate() {
                images.push(GeneratedImage {
                    id: format!("rep-{now_ms}-{i}-{idx}"),
                    url,
                    prompt: prompt.to_string(),
                });
            }
        }

        anyhow::ensure!(!images.is_empty(), "replicate returned no usable images");
        images.truncate(count);
        debug!(count = images.len(), "replicate images generated");
        Ok(images)
    }
}

/// `output` is either a single URL string or an array of URL strings.
fn output_urls(prediction: &Value) -> Vec<String> {
    match prediction.get("output") {
        Some(Value::String(url)) => vec![url.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_urls_handles_string_and_array() {
        let single = json!({ "output": "https://a/1.png" });
        assert_eq!(output_urls(&single), vec!["https://a/1.png"]);

        let many = json!({ "output": ["https://a/1.png", "https://a/2.png"] });
        assert_eq!(output_urls(&many).len(), 2);

        let missing = json!({ "status": "failed" });
        assert!(output_urls(&missing).is_empty());

        let junk = json!({ "output": [1, null, "https://a/3.png"] });
        assert_eq!(output_urls(&junk), vec!["https://a/3.png"]);
    }
}
