use serde::{Deserialize, Serialize};

/// Request body for POST /api/scrape.
#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: String,
}

/// Product metadata extracted from a page.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapedProduct {
    pub title: String,
    pub description: String,
    pub price: String,
    pub images: Vec<String>,
    pub url: String,
}
