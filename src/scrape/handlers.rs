use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{instrument, warn};

use super::dto::ScrapeRequest;
use super::services;
use crate::error::ApiError;
use crate::state::AppState;

#[instrument(skip(state, payload))]
pub async fn scrape(
    State(state): State<AppState>,
    Json(payload): Json<ScrapeRequest>,
) -> Result<Json<Value>, ApiError> {
    if payload.url.is_empty() {
        return Err(ApiError::Validation("URL required".into()));
    }

    let product = services::scrape_product(&state.http, &payload.url)
        .await
        .map_err(|e| {
            warn!(url = %payload.url, error = %e, "scrape failed");
            ApiError::Upstream(format!("Failed to scrape URL: {e}"))
        })?;

    Ok(Json(json!({ "success": true, "data": product })))
}
