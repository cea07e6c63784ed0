use crate::models::AnalysisInput;
use serde::{Deserialize, Serialize};
use url::Url;

const UNTITLED: &str = "Untitled Page";
const NO_DESCRIPTION: &str = "No description available for this page.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Mobile,
    Desktop,
}

impl Device {
    /// (title, description) character limits before truncation.
    pub fn limits(&self) -> (usize, usize) {
        match self {
            Device::Mobile => (40, 80),
            Device::Desktop => (60, 120),
        }
    }
}

/// How the page would appear as a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPreview {
    pub display_url: String,
    pub title: String,
    pub description: String,
    pub title_length: usize,
    pub description_length: usize,
}

impl SearchPreview {
    pub fn from_input(input: &AnalysisInput) -> Self {
        let title = first_present(&[&input.title]).unwrap_or(UNTITLED).to_string();
        let description = first_present(&[&input.description])
            .unwrap_or(NO_DESCRIPTION)
            .to_string();

        Self {
            display_url: display_url(&input.url),
            title_length: title.chars().count(),
            description_length: description.chars().count(),
            title,
            description,
        }
    }

    /// Title and description as shown on `device`.
    pub fn for_device(&self, device: Device) -> (String, String) {
        let (title_max, description_max) = device.limits();
        (
            truncate(&self.title, title_max),
            truncate(&self.description, description_max),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Facebook,
    Twitter,
    LinkedIn,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Facebook, Network::Twitter, Network::LinkedIn];

    pub fn name(&self) -> &'static str {
        match self {
            Network::Facebook => "Facebook",
            Network::Twitter => "Twitter",
            Network::LinkedIn => "LinkedIn",
        }
    }
}

/// Share card as a social network would build it from the page's tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialCard {
    pub network: Network,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub domain: String,
}

impl SocialCard {
    pub fn for_network(input: &AnalysisInput, network: Network) -> Self {
        let og = &input.open_graph;
        let tw = &input.twitter;

        let (title, description, image) = match network {
            Network::Twitter => (
                first_present(&[&tw.twitter_title, &og.og_title, &input.title]),
                first_present(&[&tw.twitter_description, &og.og_description, &input.description]),
                first_present(&[&tw.twitter_image, &og.og_image]),
            ),
            Network::Facebook | Network::LinkedIn => (
                first_present(&[&og.og_title, &input.title]),
                first_present(&[&og.og_description, &input.description]),
                first_present(&[&og.og_image]),
            ),
        };

        let domain = first_present(&[&og.og_url, &input.url])
            .map(host_of)
            .unwrap_or_default();

        Self {
            network,
            title: title.unwrap_or(UNTITLED).to_string(),
            description: description.unwrap_or(NO_DESCRIPTION).to_string(),
            image: image.map(str::to_string),
            domain,
        }
    }

    pub fn all(input: &AnalysisInput) -> Vec<Self> {
        Network::ALL
            .iter()
            .map(|&network| Self::for_network(input, network))
            .collect()
    }
}

/// Cuts `text` to `max` characters, appending `...` when anything was removed.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut)
}

/// URL without scheme or trailing slash, e.g. `example.com/blog`.
pub fn display_url(url: &str) -> String {
    let url = url.trim();
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    stripped.strip_suffix('/').unwrap_or(stripped).to_string()
}

fn host_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().unwrap_or_default().to_string(),
        Err(_) => display_url(url)
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

fn first_present<'a>(candidates: &[&'a String]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}
