use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::instrument;

use super::dto::{GenerateImagesRequest, GenerateVideoRequest};
use super::services;
use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

#[instrument(skip(state, payload))]
pub async fn generate_images(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<GenerateImagesRequest>,
) -> Result<Json<Value>, ApiError> {
    if payload.product_name.is_empty() || payload.ad_type.is_empty() {
        return Err(ApiError::Validation(
            "productName and adType required".into(),
        ));
    }

    let images = services::generate_images(
        &state,
        user_id,
        &payload.product_name,
        &payload.product_description,
        &payload.ad_type,
    )
    .await?;

    Ok(Json(json!({ "success": true, "data": images })))
}

#[instrument(skip(state, payload))]
pub async fn generate_video(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<GenerateVideoRequest>,
) -> Result<Json<Value>, ApiError> {
    if payload.image_url.is_empty() {
        return Err(ApiError::Validation("imageUrl required".into()));
    }

    let video = services::generate_video(
        &state,
        user_id,
        &payload.image_url,
        payload.video_style.as_deref(),
        payload.custom_prompt.as_deref(),
    )
    .await?;

    Ok(Json(json!({ "success": true, "data": video })))
}
