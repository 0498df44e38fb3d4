/// Ad placement styles with a fixed prompt template each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdType {
    Facebook,
    Instagram,
    Tiktok,
    Luxury,
    Minimalist,
    Trendy,
}

impl AdType {
    /// Unrecognized names fall back to the facebook template rather than
    /// failing the request.
    pub fn from_name(name: &str) -> AdType {
        match name {
            "instagram" => AdType::Instagram,
            "tiktok" => AdType::Tiktok,
            "luxury" => AdType::Luxury,
            "minimalist" => AdType::Minimalist,
            "trendy" => AdType::Trendy,
            _ => AdType::Facebook,
        }
    }

    fn template(&self) -> (&'static str, &'static str) {
        match self {
            AdType::Facebook => (
                "Create a lifestyle product photo for Facebook ads.",
                "professional, lifestyle, modern",
            ),
            AdType::Instagram => (
                "Create an Instagram-ready lifestyle product image.",
                "trendy, aesthetic, high-quality",
            ),
            AdType::Tiktok => (
                "Create a TikTok-style product showcase image.",
                "dynamic, engaging, vibrant",
            ),
            AdType::Luxury => (
                "Create a luxury product lifestyle image.",
                "premium, elegant, sophisticated",
            ),
            AdType::Minimalist => (
                "Create a minimalist product image.",
                "clean, simple, modern",
            ),
            AdType::Trendy => (
                "Create a trendy product image.",
                "contemporary, stylish, fashionable",
            ),
        }
    }
}

pub fn build_image_prompt(product_name: &str, product_description: &str, ad_type: AdType) -> String {
    let (lead, style) = ad_type.template();
    format!("{lead} Product: {product_name}. {product_description}. Style: {style}")
}

/// Default phrase when neither videoStyle nor customPrompt is supplied.
pub const DEFAULT_VIDEO_PROMPT: &str = "product showcase, smooth transitions, professional";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ad_types_resolve() {
        assert_eq!(AdType::from_name("facebook"), AdType::Facebook);
        assert_eq!(AdType::from_name("instagram"), AdType::Instagram);
        assert_eq!(AdType::from_name("tiktok"), AdType::Tiktok);
        assert_eq!(AdType::from_name("luxury"), AdType::Luxury);
        assert_eq!(AdType::from_name("minimalist"), AdType::Minimalist);
        assert_eq!(AdType::from_name("trendy"), AdType::Trendy);
    }

    #[test]
    fn unknown_ad_type_falls_back_to_facebook() {
        let ad_type = AdType::from_name("unknown-type");
        assert_eq!(ad_type, AdType::Facebook);
        let prompt = build_image_prompt("Lamp", "A desk lamp", ad_type);
        assert!(prompt.contains("Facebook ads"));
    }

    #[test]
    fn prompt_embeds_product_fields() {
        let prompt = build_image_prompt("Lamp", "A warm desk lamp", AdType::Luxury);
        assert!(prompt.contains("Product: Lamp."));
        assert!(prompt.contains("A warm desk lamp"));
        assert!(prompt.contains("premium, elegant, sophisticated"));
    }
}
