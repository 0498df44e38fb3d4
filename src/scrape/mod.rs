use crate::state::AppState;
use axum::{routing::post, Router};

pub mod dto;
pub mod handlers;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new().route("/scrape", post(handlers::scrape))
}
