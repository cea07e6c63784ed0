use seoscope::models::{AnalysisInput, OpenGraphTags, TwitterCardTags};

pub const GOOD_TITLE: &str = "Example Website - Your Digital Presence Starts Here";
pub const GOOD_DESCRIPTION: &str = "Discover amazing products and services on our example website. We offer the best solutions for your needs with excellent customer service.";

/// A page that passes every check and triggers no advisories.
#[allow(dead_code)]
pub fn good_seo_input() -> AnalysisInput {
    AnalysisInput {
        url: "https://example.com/".to_string(),
        title: GOOD_TITLE.to_string(),
        description: GOOD_DESCRIPTION.to_string(),
        keywords: "example, website, products, services, digital".to_string(),
        canonical: "https://example.com/".to_string(),
        robots: "index, follow".to_string(),
        viewport: "width=device-width, initial-scale=1.0".to_string(),
        has_viewport_meta: true,
        open_graph: OpenGraphTags {
            og_title: GOOD_TITLE.to_string(),
            og_description: "Discover amazing products and services on our example website."
                .to_string(),
            og_image: "https://example.com/og.jpg".to_string(),
            og_url: "https://example.com/".to_string(),
            og_type: "website".to_string(),
            og_site_name: "Example Website".to_string(),
        },
        twitter: TwitterCardTags {
            twitter_card: "summary_large_image".to_string(),
            twitter_title: "Example Website - Your Digital Presence".to_string(),
            twitter_description: "Discover amazing products and services.".to_string(),
            twitter_image: "https://example.com/og.jpg".to_string(),
            twitter_site: "@example".to_string(),
        },
        favicon: "/favicon.ico".to_string(),
        h1_count: 1,
        image_count: 12,
        images_without_alt: 0,
    }
}

/// Partial tags: short description, two H1s, no og:image, three images without alt.
#[allow(dead_code)]
pub fn medium_seo_input() -> AnalysisInput {
    let mut input = good_seo_input();
    input.description = "Short desc".to_string();
    input.h1_count = 2;
    input.open_graph.og_image = String::new();
    input.twitter.twitter_description = String::new();
    input.images_without_alt = 3;
    input
}

/// Almost nothing set.
#[allow(dead_code)]
pub fn bad_seo_input() -> AnalysisInput {
    AnalysisInput {
        url: "https://example.com/bad-seo".to_string(),
        title: "Page".to_string(),
        image_count: 5,
        images_without_alt: 5,
        ..Default::default()
    }
}
