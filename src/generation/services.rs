use tracing::{error, info, warn};

use super::prompt::{build_image_prompt, AdType, DEFAULT_VIDEO_PROMPT};
use super::repo;
use crate::auth::repo_types::User;
use crate::error::ApiError;
use crate::providers::mock::{mock_images, mock_video};
use crate::providers::{GeneratedImage, GeneratedVideo};
use crate::state::AppState;

/// Images returned per request, provider or mock alike.
const IMAGE_COUNT: usize = 3;

/// Take one credit, record the attempt, then call the provider. Provider
/// failures are absorbed into the mock set; only credit and storage errors
/// reach the caller.
pub async fn generate_images(
    st: &AppState,
    user_id: i64,
    product_name: &str,
    product_description: &str,
    ad_type: &str,
) -> Result<Vec<GeneratedImage>, ApiError> {
    User::adjust_credits(&st.db, user_id, -1).await?;

    let prompt = build_image_prompt(product_name, product_description, AdType::from_name(ad_type));
    repo::record_generation(&st.db, user_id, &prompt).await?;

    let images = match st.image_provider.generate(&prompt, IMAGE_COUNT).await {
        Ok(images) if !images.is_empty() => images,
        Ok(_) => {
            warn!(user_id, "image provider returned nothing, using mocks");
            mock_images(IMAGE_COUNT)
        }
        Err(e) => {
            error!(user_id, error = %e, "image provider failed, using mocks");
            mock_images(IMAGE_COUNT)
        }
    };

    info!(user_id, count = images.len(), "images generated");
    Ok(images)
}

pub async fn generate_video(
    st: &AppState,
    user_id: i64,
    image_url: &str,
    video_style: Option<&str>,
    custom_prompt: Option<&str>,
) -> Result<GeneratedVideo, ApiError> {
    User::adjust_credits(&st.db, user_id, -1).await?;

    let prompt = video_style
        .or(custom_prompt)
        .unwrap_or(DEFAULT_VIDEO_PROMPT)
        .to_string();
    repo::record_generation(&st.db, user_id, &prompt).await?;

    let video = match st.video_provider.generate(image_url, &prompt).await {
        Ok(video) => video,
        Err(e) => {
            error!(user_id, error = %e, "video provider failed, using mock");
            mock_video()
        }
    };

    info!(user_id, video_id = %video.id, status = %video.status, "video generated");
    Ok(video)
}
