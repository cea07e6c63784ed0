use crate::models::{AnalysisInput, OpenGraphTags, TwitterCardTags};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

// Cached selectors to avoid repeated parsing and eliminate unwrap() calls
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector should be valid"));
static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta").expect("meta selector should be valid"));
static H1_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("h1 selector should be valid"));
static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("img selector should be valid"));
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("link[rel][href]").expect("link selector should be valid"));

/// Read-only view over a parsed HTML document.
pub struct PageDocument {
    document: Html,
}

impl PageDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub fn title(&self) -> Option<String> {
        self.document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    /// Looks up a meta tag by its `name` or `property` attribute. The first
    /// tag with non-empty content wins.
    pub fn meta(&self, name_or_property: &str) -> Option<String> {
        self.document
            .select(&META_SELECTOR)
            .filter(|el| {
                let value = el.value();
                [value.attr("name"), value.attr("property")]
                    .into_iter()
                    .flatten()
                    .any(|key| key.trim().eq_ignore_ascii_case(name_or_property))
            })
            .filter_map(|el| el.value().attr("content"))
            .map(|content| content.trim().to_string())
            .find(|content| !content.is_empty())
    }

    pub fn has_meta(&self, name: &str) -> bool {
        self.document.select(&META_SELECTOR).any(|el| {
            el.value()
                .attr("name")
                .is_some_and(|key| key.trim().eq_ignore_ascii_case(name))
        })
    }

    pub fn h1_count(&self) -> usize {
        self.document.select(&H1_SELECTOR).count()
    }

    pub fn image_count(&self) -> usize {
        self.document.select(&IMG_SELECTOR).count()
    }

    /// Images whose alt attribute is absent or blank.
    pub fn images_without_alt(&self) -> usize {
        self.document
            .select(&IMG_SELECTOR)
            .filter(|el| el.value().attr("alt").is_none_or(|alt| alt.trim().is_empty()))
            .count()
    }

    pub fn canonical(&self) -> Option<String> {
        self.link_href(|rel| rel.iter().any(|token| *token == "canonical"))
    }

    pub fn favicon(&self) -> Option<String> {
        self.link_href(|rel| rel.iter().any(|token| *token == "icon"))
    }

    fn link_href(&self, matches: impl Fn(&[String]) -> bool) -> Option<String> {
        self.document
            .select(&LINK_SELECTOR)
            .filter(|el| matches(rel_tokens(el).as_slice()))
            .filter_map(|el| el.value().attr("href"))
            .map(|href| href.trim().to_string())
            .find(|href| !href.is_empty())
    }

    /// Builds the engine input. `url` is echoed as-is.
    pub fn to_input(&self, url: &str) -> AnalysisInput {
        let meta = |name: &str| self.meta(name).unwrap_or_default();
        let viewport = meta("viewport");

        AnalysisInput {
            url: url.to_string(),
            title: self.title().unwrap_or_default(),
            description: meta("description"),
            keywords: meta("keywords"),
            canonical: self.canonical().unwrap_or_default(),
            robots: meta("robots"),
            has_viewport_meta: !viewport.is_empty() || self.has_meta("viewport"),
            viewport,
            open_graph: OpenGraphTags {
                og_title: meta("og:title"),
                og_description: meta("og:description"),
                og_image: meta("og:image"),
                og_url: meta("og:url"),
                og_type: meta("og:type"),
                og_site_name: meta("og:site_name"),
            },
            twitter: TwitterCardTags {
                twitter_card: meta("twitter:card"),
                twitter_title: meta("twitter:title"),
                twitter_description: meta("twitter:description"),
                twitter_image: meta("twitter:image"),
                twitter_site: meta("twitter:site"),
            },
            favicon: self.favicon().unwrap_or_default(),
            h1_count: self.h1_count(),
            image_count: self.image_count(),
            images_without_alt: self.images_without_alt(),
        }
    }
}

fn rel_tokens(element: &ElementRef) -> Vec<String> {
    element
        .value()
        .attr("rel")
        .unwrap_or("")
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_matches_name_and_property() {
        let doc = PageDocument::parse(
            r#"<html><head>
                <meta name="Description" content=" A page ">
                <meta property="og:title" content="OG">
                <meta name="twitter:card" content="summary">
            </head></html>"#,
        );

        assert_eq!(doc.meta("description"), Some("A page".to_string()));
        assert_eq!(doc.meta("og:title"), Some("OG".to_string()));
        assert_eq!(doc.meta("twitter:card"), Some("summary".to_string()));
        assert_eq!(doc.meta("keywords"), None);
    }

    #[test]
    fn test_meta_skips_empty_content() {
        let doc = PageDocument::parse(
            r#"<head><meta name="description" content=""><meta name="description" content="second"></head>"#,
        );
        assert_eq!(doc.meta("description"), Some("second".to_string()));
    }

    #[test]
    fn test_images_without_alt_counts_blank_alt() {
        let doc = PageDocument::parse(
            r#"<body><img src="a.png" alt="A"><img src="b.png"><img src="c.png" alt="  "></body>"#,
        );
        assert_eq!(doc.image_count(), 3);
        assert_eq!(doc.images_without_alt(), 2);
    }

    #[test]
    fn test_link_lookups() {
        let doc = PageDocument::parse(
            r#"<head>
                <link rel="stylesheet" href="/style.css">
                <link rel="canonical" href="https://example.com/page">
                <link rel="shortcut icon" href="/favicon.ico">
            </head>"#,
        );
        assert_eq!(doc.canonical(), Some("https://example.com/page".to_string()));
        assert_eq!(doc.favicon(), Some("/favicon.ico".to_string()));
    }

    #[test]
    fn test_empty_document_yields_empty_input() {
        let input = PageDocument::parse("").to_input("");
        assert_eq!(input, AnalysisInput::default());
    }
}
