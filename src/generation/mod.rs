use crate::state::AppState;
use axum::{routing::post, Router};

pub mod dto;
pub mod handlers;
pub mod prompt;
pub mod repo;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-images", post(handlers::generate_images))
        .route("/generate-video", post(handlers::generate_video))
}
