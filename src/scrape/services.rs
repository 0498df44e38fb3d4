use anyhow::Context;
use scraper::{Html, Selector};
use tracing::debug;

use super::dto::ScrapedProduct;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const MAX_IMAGES: usize = 3;

pub async fn scrape_product(http: &reqwest::Client, url: &str) -> anyhow::Result<ScrapedProduct> {
    let body = http
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .context("fetch url")?
        .error_for_status()
        .context("fetch url")?
        .text()
        .await
        .context("read body")?;

    let product = extract_product(&body, url);
    debug!(url, title = %product.title, images = product.images.len(), "product scraped");
    Ok(product)
}

/// Generic selectors that work on most e-commerce pages. Parsing is kept
/// synchronous: `Html` is not `Send` and must not cross an await point.
fn extract_product(html: &str, url: &str) -> ScrapedProduct {
    let doc = Html::parse_document(html);

    let title = select_text(&doc, "h1")
        .or_else(|| select_text(&doc, "title"))
        .unwrap_or_else(|| "Unnamed Product".to_string());

    let description = select_text(&doc, "p")
        .or_else(|| select_attr(&doc, r#"meta[name="description"]"#, "content"))
        .unwrap_or_else(|| "No description available".to_string());

    let price = select_text(&doc, r#"[class*="price"]"#)
        .unwrap_or_else(|| "Price not available".to_string());

    let img_sel = Selector::parse("img").expect("static selector");
    let images: Vec<String> = doc
        .select(&img_sel)
        .filter_map(|el| {
            el.value()
                .attr("src")
                .or_else(|| el.value().attr("data-src"))
        })
        .filter(|src| src.contains("product") || src.contains("image"))
        .map(str::to_string)
        .take(MAX_IMAGES)
        .collect();

    ScrapedProduct {
        title,
        description,
        price,
        images,
        url: url.to_string(),
    }
}

fn select_text(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let text: String = doc.select(&sel).next()?.text().collect();
    let text = text.trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn select_attr(doc: &Html, selector: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let value = doc.select(&sel).next()?.value().attr(attr)?.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_title_description_price_and_images() {
        let html = r#"
            <html><head><title>Fallback</title></head><body>
            <h1> Desk Lamp </h1>
            <p>A warm desk lamp.</p>
            <span class="product-price">$19.99</span>
            <img src="/cdn/product-1.jpg">
            <img src="/cdn/logo.svg">
            <img data-src="/cdn/image-2.jpg">
            <img src="/cdn/product-3.jpg">
            <img src="/cdn/product-4.jpg">
            </body></html>
        "#;
        let p = extract_product(html, "https://shop.test/lamp");
        assert_eq!(p.title, "Desk Lamp");
        assert_eq!(p.description, "A warm desk lamp.");
        assert_eq!(p.price, "$19.99");
        assert_eq!(
            p.images,
            vec!["/cdn/product-1.jpg", "/cdn/image-2.jpg", "/cdn/product-3.jpg"]
        );
        assert_eq!(p.url, "https://shop.test/lamp");
    }

    #[test]
    fn falls_back_to_title_tag_and_meta_description() {
        let html = r#"
            <html><head>
            <title>Store Page</title>
            <meta name="description" content="From the meta tag">
            </head><body></body></html>
        "#;
        let p = extract_product(html, "https://shop.test/x");
        assert_eq!(p.title, "Store Page");
        assert_eq!(p.description, "From the meta tag");
        assert_eq!(p.price, "Price not available");
        assert!(p.images.is_empty());
    }

    #[test]
    fn empty_page_uses_placeholders() {
        let p = extract_product("<html></html>", "https://shop.test/y");
        assert_eq!(p.title, "Unnamed Product");
        assert_eq!(p.description, "No description available");
        assert_eq!(p.price, "Price not available");
    }
}
