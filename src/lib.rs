//! adflow - credit-gated product ad generation backend.
//!
//! Email+password auth issuing JWT bearer tokens, a per-user credit
//! balance, a product-page scraper, and image/video generation endpoints
//! that proxy external providers with deterministic mock fallbacks.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod generation;
pub mod providers;
pub mod scrape;
pub mod state;
