use crate::models::{
    AnalysisInput, AnalysisResult, Categories, CategoryResult, Difficulty, FieldScore,
    FieldScores, IssueSeverity, Priority, Recommendation, SeoCategory, SeoIssue, Status,
};
use serde::{Deserialize, Serialize};

/// Length thresholds used by the title and description checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub title_min: usize,
    pub title_max: usize,
    pub description_min: usize,
    pub description_max: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            title_min: 30,
            title_max: 60,
            description_min: 120,
            description_max: 160,
        }
    }
}

/// A failed check or an advisory. Carries what both the issue and the
/// recommendation are built from.
struct Finding {
    id: &'static str,
    category: SeoCategory,
    priority: Priority,
    rank: u8,
    title: String,
    description: String,
    how_to_fix: String,
    impact: &'static str,
    estimated_time: &'static str,
    difficulty: Difficulty,
}

impl Finding {
    fn to_issue(&self) -> SeoIssue {
        let severity = match self.priority {
            Priority::High => IssueSeverity::Error,
            Priority::Medium | Priority::Low => IssueSeverity::Warning,
        };

        SeoIssue {
            severity,
            title: self.title.clone(),
            description: self.description.clone(),
            impact: self.priority,
            remediation: self.how_to_fix.clone(),
            priority: self.rank,
        }
    }

    fn into_recommendation(self) -> Recommendation {
        Recommendation {
            id: self.id.to_string(),
            category: self.category,
            priority: self.priority,
            title: self.title,
            description: self.description,
            impact: self.impact.to_string(),
            how_to_fix: self.how_to_fix,
            estimated_time: self.estimated_time.to_string(),
            difficulty: self.difficulty,
        }
    }
}

/// One scored rule. `None` means the rule passed.
struct Check {
    category: SeoCategory,
    failure: Option<Finding>,
    recommended: bool,
}

impl Check {
    fn new(category: SeoCategory, failure: Option<Finding>) -> Self {
        Self {
            category,
            failure,
            recommended: true,
        }
    }

    /// A failure that follows from another failed check. It counts against
    /// the score and is listed as an issue, but the fix lives on the other
    /// check's recommendation.
    fn dependent(category: SeoCategory, failure: Option<Finding>) -> Self {
        Self {
            recommended: false,
            ..Self::new(category, failure)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeoAnalyzer {
    policy: ScoringPolicy,
}

/// Analyzes `input` with the default policy.
pub fn analyze(input: AnalysisInput) -> AnalysisResult {
    SeoAnalyzer::default().analyze(input)
}

impl SeoAnalyzer {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn analyze(&self, input: AnalysisInput) -> AnalysisResult {
        let scores = self.field_scores(&input);
        let checks = self.run_checks(&input);

        let categories = Categories {
            meta_tags: Self::aggregate(SeoCategory::Meta, &checks),
            social_media: Self::aggregate(SeoCategory::Social, &checks),
            technical: Self::aggregate(SeoCategory::Technical, &checks),
            mobile: Self::aggregate(SeoCategory::Mobile, &checks),
        };

        let overall = overall_score([
            categories.meta_tags.score,
            categories.social_media.score,
            categories.technical.score,
            categories.mobile.score,
        ]);

        let mut recommendations: Vec<Recommendation> = checks
            .into_iter()
            .filter(|check| check.recommended)
            .filter_map(|check| check.failure)
            .chain(Self::advisories(&input))
            .map(Finding::into_recommendation)
            .collect();
        sort_by_priority(&mut recommendations);

        tracing::debug!(
            overall,
            recommendations = recommendations.len(),
            "SEO analysis complete"
        );

        AnalysisResult {
            input,
            categories,
            scores,
            overall,
            recommendations,
        }
    }

    pub fn field_scores(&self, input: &AnalysisInput) -> FieldScores {
        let og = &input.open_graph;
        let og_present = [&og.og_title, &og.og_description, &og.og_image]
            .iter()
            .filter(|value| is_present(value))
            .count();

        FieldScores {
            title: length_tier(&input.title, self.policy.title_min, self.policy.title_max),
            description: length_tier(
                &input.description,
                self.policy.description_min,
                self.policy.description_max,
            ),
            open_graph: match og_present {
                3 => FieldScore::Good,
                0 => FieldScore::Error,
                _ => FieldScore::Warning,
            },
            twitter: if is_present(&input.twitter.twitter_card) {
                FieldScore::Good
            } else {
                FieldScore::Warning
            },
            mobile: if input.has_viewport_meta {
                FieldScore::Good
            } else {
                FieldScore::Error
            },
        }
    }

    fn aggregate(category: SeoCategory, checks: &[Check]) -> CategoryResult {
        let in_category: Vec<&Check> = checks.iter().filter(|c| c.category == category).collect();
        let total = in_category.len();
        let passed = in_category.iter().filter(|c| c.failure.is_none()).count();

        let mut issues: Vec<SeoIssue> = in_category
            .iter()
            .filter_map(|c| c.failure.as_ref().map(Finding::to_issue))
            .collect();
        issues.sort_by_key(|issue| issue.priority);

        let score = category_score(passed, total);

        CategoryResult {
            category,
            name: category.display_name().to_string(),
            score,
            status: Status::from_score(score),
            issues,
            passed,
            total,
        }
    }

    fn run_checks(&self, input: &AnalysisInput) -> Vec<Check> {
        vec![
            Check::new(SeoCategory::Meta, self.check_title(input)),
            Check::new(SeoCategory::Meta, self.check_description(input)),
            Check::new(SeoCategory::Meta, Self::check_h1(input)),
            Check::new(SeoCategory::Social, Self::check_og_title(input)),
            Check::new(SeoCategory::Social, Self::check_og_description(input)),
            Check::new(SeoCategory::Social, Self::check_og_image(input)),
            Check::new(SeoCategory::Social, Self::check_twitter_card(input)),
            Check::new(SeoCategory::Technical, Self::check_canonical(input)),
            Check::new(SeoCategory::Technical, Self::check_robots(input)),
            Check::new(SeoCategory::Technical, Self::check_image_alt(input)),
            Check::new(SeoCategory::Mobile, Self::check_viewport(input)),
            Self::zoom_check(input),
        ]
    }

    fn check_title(&self, input: &AnalysisInput) -> Option<Finding> {
        let (min, max) = (self.policy.title_min, self.policy.title_max);
        let len = char_len(&input.title);

        if len == 0 {
            return Some(Finding {
                id: "title-missing",
                category: SeoCategory::Meta,
                priority: Priority::High,
                rank: 1,
                title: "Add a title tag".to_string(),
                description: "Page is missing a title tag".to_string(),
                how_to_fix: format!(
                    "Add a descriptive <title> between {}-{} characters inside <head>",
                    min, max
                ),
                impact: "Titles are the headline of every search result; a missing title can cut click-through rate by 20-30%",
                estimated_time: "5 minutes",
                difficulty: Difficulty::Easy,
            });
        }

        if len < min {
            Some(Finding {
                id: "title-length",
                category: SeoCategory::Meta,
                priority: Priority::Medium,
                rank: 3,
                title: format!("Lengthen title tag to {}-{} characters", min, max),
                description: format!(
                    "Title is too short ({} chars, recommended: {}-{})",
                    len, min, max
                ),
                how_to_fix: "Expand the title with the page's primary keyword and brand name"
                    .to_string(),
                impact: "A descriptive title can improve click-through rate by 5-10%",
                estimated_time: "5 minutes",
                difficulty: Difficulty::Easy,
            })
        } else if len > max {
            Some(Finding {
                id: "title-length",
                category: SeoCategory::Meta,
                priority: Priority::Medium,
                rank: 3,
                title: format!("Shorten title tag to under {} characters", max),
                description: format!(
                    "Title is too long ({} chars, recommended: {}-{})",
                    len, min, max
                ),
                how_to_fix: "Move the most important words to the front and trim the rest"
                    .to_string(),
                impact: "Prevents truncation in search results",
                estimated_time: "5 minutes",
                difficulty: Difficulty::Easy,
            })
        } else {
            None
        }
    }

    fn check_description(&self, input: &AnalysisInput) -> Option<Finding> {
        let (min, max) = (self.policy.description_min, self.policy.description_max);
        let len = char_len(&input.description);

        if len == 0 {
            return Some(Finding {
                id: "description-missing",
                category: SeoCategory::Meta,
                priority: Priority::High,
                rank: 2,
                title: "Add a meta description".to_string(),
                description: "Page is missing a meta description".to_string(),
                how_to_fix: format!(
                    "Add <meta name=\"description\" content=\"...\"> with {}-{} characters summarising the page",
                    min, max
                ),
                impact: "Search engines show the description under the title; pages without one get auto-generated snippets",
                estimated_time: "10 minutes",
                difficulty: Difficulty::Easy,
            });
        }

        if len < min {
            Some(Finding {
                id: "description-length",
                category: SeoCategory::Meta,
                priority: Priority::Medium,
                rank: 4,
                title: format!("Expand meta description to {}-{} characters", min, max),
                description: format!(
                    "Meta description is too short ({} chars, recommended: {}-{})",
                    len, min, max
                ),
                how_to_fix: "Describe the page's value and include a call to action".to_string(),
                impact: "A complete description can improve click-through rate by 5-15%",
                estimated_time: "10 minutes",
                difficulty: Difficulty::Easy,
            })
        } else if len > max {
            Some(Finding {
                id: "description-length",
                category: SeoCategory::Meta,
                priority: Priority::Medium,
                rank: 4,
                title: format!("Shorten meta description to under {} characters", max),
                description: format!(
                    "Meta description is too long ({} chars, recommended: {}-{})",
                    len, min, max
                ),
                how_to_fix: "Keep the key message within the first sentence and trim the rest"
                    .to_string(),
                impact: "Prevents truncation in search results",
                estimated_time: "5 minutes",
                difficulty: Difficulty::Easy,
            })
        } else {
            None
        }
    }

    fn check_h1(input: &AnalysisInput) -> Option<Finding> {
        match input.h1_count {
            1 => None,
            0 => Some(Finding {
                id: "h1-missing",
                category: SeoCategory::Meta,
                priority: Priority::Medium,
                rank: 5,
                title: "Add an H1 heading".to_string(),
                description: "Page is missing an H1 tag".to_string(),
                how_to_fix: "Wrap the main page heading in a single <h1> element".to_string(),
                impact: "Helps search engines understand the page topic",
                estimated_time: "5 minutes",
                difficulty: Difficulty::Easy,
            }),
            count => Some(Finding {
                id: "h1-multiple",
                category: SeoCategory::Meta,
                priority: Priority::Low,
                rank: 6,
                title: "Use a single H1 heading".to_string(),
                description: format!("Page has multiple H1 tags ({})", count),
                how_to_fix: "Keep one <h1> for the main heading and demote the others to <h2>/<h3>"
                    .to_string(),
                impact: "Clarifies the content hierarchy",
                estimated_time: "15 minutes",
                difficulty: Difficulty::Easy,
            }),
        }
    }

    fn check_og_title(input: &AnalysisInput) -> Option<Finding> {
        if is_present(&input.open_graph.og_title) {
            return None;
        }

        Some(Finding {
            id: "og-title-missing",
            category: SeoCategory::Social,
            priority: Priority::Medium,
            rank: 2,
            title: "Add an Open Graph title".to_string(),
            description: "Page is missing the og:title tag".to_string(),
            how_to_fix: "Add <meta property=\"og:title\" content=\"...\"> to <head>".to_string(),
            impact: "Controls the headline shown when the page is shared",
            estimated_time: "5 minutes",
            difficulty: Difficulty::Easy,
        })
    }

    fn check_og_description(input: &AnalysisInput) -> Option<Finding> {
        if is_present(&input.open_graph.og_description) {
            return None;
        }

        Some(Finding {
            id: "og-description-missing",
            category: SeoCategory::Social,
            priority: Priority::Medium,
            rank: 3,
            title: "Add an Open Graph description".to_string(),
            description: "Page is missing the og:description tag".to_string(),
            how_to_fix: "Add <meta property=\"og:description\" content=\"...\"> to <head>"
                .to_string(),
            impact: "Controls the summary shown when the page is shared",
            estimated_time: "5 minutes",
            difficulty: Difficulty::Easy,
        })
    }

    fn check_og_image(input: &AnalysisInput) -> Option<Finding> {
        if is_present(&input.open_graph.og_image) {
            return None;
        }

        Some(Finding {
            id: "og-image-missing",
            category: SeoCategory::Social,
            priority: Priority::High,
            rank: 1,
            title: "Add an Open Graph image".to_string(),
            description: "Page is missing the og:image tag; shares will render without a preview image"
                .to_string(),
            how_to_fix: "Add <meta property=\"og:image\" content=\"...\"> pointing to a 1200x630 image"
                .to_string(),
            impact: "Posts with images get up to 2x more engagement on social platforms",
            estimated_time: "20 minutes",
            difficulty: Difficulty::Medium,
        })
    }

    fn check_twitter_card(input: &AnalysisInput) -> Option<Finding> {
        if is_present(&input.twitter.twitter_card) {
            return None;
        }

        Some(Finding {
            id: "twitter-card-missing",
            category: SeoCategory::Social,
            priority: Priority::Low,
            rank: 4,
            title: "Add Twitter Card meta tags".to_string(),
            description: "Page is missing the twitter:card tag; Twitter will fall back to Open Graph"
                .to_string(),
            how_to_fix: "Add <meta name=\"twitter:card\" content=\"summary_large_image\">"
                .to_string(),
            impact: "Enables rich previews on Twitter",
            estimated_time: "5 minutes",
            difficulty: Difficulty::Easy,
        })
    }

    fn check_canonical(input: &AnalysisInput) -> Option<Finding> {
        if is_present(&input.canonical) {
            return None;
        }

        Some(Finding {
            id: "canonical-missing",
            category: SeoCategory::Technical,
            priority: Priority::Medium,
            rank: 2,
            title: "Add a canonical URL".to_string(),
            description: "Page has no <link rel=\"canonical\"> element".to_string(),
            how_to_fix: "Add <link rel=\"canonical\" href=\"...\"> with the preferred URL"
                .to_string(),
            impact: "Consolidates ranking signals across duplicate URLs",
            estimated_time: "10 minutes",
            difficulty: Difficulty::Easy,
        })
    }

    fn check_robots(input: &AnalysisInput) -> Option<Finding> {
        if !input.robots.to_lowercase().contains("noindex") {
            return None;
        }

        Some(Finding {
            id: "robots-noindex",
            category: SeoCategory::Technical,
            priority: Priority::High,
            rank: 1,
            title: "Remove the noindex directive".to_string(),
            description: format!(
                "Meta robots is \"{}\"; search engines will drop this page from results",
                input.robots.trim()
            ),
            how_to_fix: "Change the robots meta tag to \"index, follow\" or remove it".to_string(),
            impact: "The page cannot rank at all while noindex is set",
            estimated_time: "5 minutes",
            difficulty: Difficulty::Easy,
        })
    }

    fn check_image_alt(input: &AnalysisInput) -> Option<Finding> {
        let missing = input.images_without_alt;
        if missing == 0 {
            return None;
        }

        Some(Finding {
            id: "image-alt-missing",
            category: SeoCategory::Technical,
            priority: Priority::Medium,
            rank: 3,
            title: format!("Add alt text to {} images", missing),
            description: format!(
                "{} of {} image(s) missing alt text",
                missing,
                input.image_count.max(missing)
            ),
            how_to_fix: "Add a short alt attribute describing each image's content".to_string(),
            impact: "Improves accessibility and image search visibility",
            estimated_time: "15 minutes",
            difficulty: Difficulty::Easy,
        })
    }

    fn check_viewport(input: &AnalysisInput) -> Option<Finding> {
        if input.has_viewport_meta {
            return None;
        }

        Some(Finding {
            id: "viewport-missing",
            category: SeoCategory::Mobile,
            priority: Priority::High,
            rank: 1,
            title: "Add a viewport meta tag".to_string(),
            description: "Page has no viewport meta tag and will render as desktop on phones"
                .to_string(),
            how_to_fix: "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
                .to_string(),
            impact: "Mobile-friendliness is a ranking factor under mobile-first indexing",
            estimated_time: "5 minutes",
            difficulty: Difficulty::Easy,
        })
    }

    fn zoom_check(input: &AnalysisInput) -> Check {
        if !input.has_viewport_meta {
            return Check::dependent(
                SeoCategory::Mobile,
                Some(Finding {
                    id: "viewport-zoom-disabled",
                    category: SeoCategory::Mobile,
                    priority: Priority::Medium,
                    rank: 2,
                    title: "Allow users to zoom".to_string(),
                    description: "Zoom cannot be verified without a viewport meta tag".to_string(),
                    how_to_fix: "Add a viewport meta tag that keeps user-scalable and a maximum-scale of at least 2"
                        .to_string(),
                    impact: "Improves accessibility for users with low vision",
                    estimated_time: "5 minutes",
                    difficulty: Difficulty::Easy,
                }),
            );
        }

        Check::new(SeoCategory::Mobile, Self::check_zoom(input))
    }

    fn check_zoom(input: &AnalysisInput) -> Option<Finding> {
        if !viewport_disables_zoom(&input.viewport) {
            return None;
        }

        Some(Finding {
            id: "viewport-zoom-disabled",
            category: SeoCategory::Mobile,
            priority: Priority::Medium,
            rank: 2,
            title: "Allow users to zoom".to_string(),
            description: format!(
                "Viewport \"{}\" prevents pinch-zoom",
                input.viewport.trim()
            ),
            how_to_fix: "Remove user-scalable=no and raise maximum-scale to at least 2".to_string(),
            impact: "Improves accessibility for users with low vision",
            estimated_time: "5 minutes",
            difficulty: Difficulty::Easy,
        })
    }

    /// Recommendations that do not correspond to a scored check.
    fn advisories(input: &AnalysisInput) -> Vec<Finding> {
        let mut advisories = Vec::new();
        let og = &input.open_graph;
        let twitter = &input.twitter;

        if is_present(&twitter.twitter_card)
            && (!is_present(&twitter.twitter_title) || !is_present(&twitter.twitter_description))
        {
            advisories.push(Finding {
                id: "twitter-content-missing",
                category: SeoCategory::Social,
                priority: Priority::Low,
                rank: 5,
                title: "Add Twitter-specific title and description".to_string(),
                description: "Twitter Card is declared without twitter:title or twitter:description"
                    .to_string(),
                how_to_fix: "Add twitter:title and twitter:description tailored to Twitter's audience"
                    .to_string(),
                impact: "Better engagement on Twitter shares",
                estimated_time: "10 minutes",
                difficulty: Difficulty::Easy,
            });
        }

        let core_present = [&og.og_title, &og.og_description, &og.og_image]
            .iter()
            .any(|value| is_present(value));
        let extended_missing: Vec<&str> = [
            ("og:url", &og.og_url),
            ("og:type", &og.og_type),
            ("og:site_name", &og.og_site_name),
        ]
        .into_iter()
        .filter(|(_, value)| !is_present(value))
        .map(|(name, _)| name)
        .collect();

        if core_present && !extended_missing.is_empty() {
            advisories.push(Finding {
                id: "og-metadata-incomplete",
                category: SeoCategory::Social,
                priority: Priority::Low,
                rank: 6,
                title: "Complete Open Graph metadata".to_string(),
                description: format!("Missing {}", extended_missing.join(", ")),
                how_to_fix: "Add the missing og:* properties to <head>".to_string(),
                impact: "Gives social platforms full context about the shared page",
                estimated_time: "10 minutes",
                difficulty: Difficulty::Easy,
            });
        }

        if !is_present(&input.favicon) {
            advisories.push(Finding {
                id: "favicon-missing",
                category: SeoCategory::Technical,
                priority: Priority::Low,
                rank: 4,
                title: "Add a favicon".to_string(),
                description: "Page does not declare an icon link".to_string(),
                how_to_fix: "Add <link rel=\"icon\" href=\"/favicon.ico\">".to_string(),
                impact: "Search results and browser tabs show the site icon",
                estimated_time: "15 minutes",
                difficulty: Difficulty::Easy,
            });
        }

        advisories
    }
}

/// `round(100 * passed / total)`; an empty category scores 0.
pub fn category_score(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let passed = passed.min(total);
    ((passed as f64 * 100.0) / total as f64).round() as u8
}

/// Equal-weight mean of the four category scores, rounded.
pub fn overall_score(scores: [u8; 4]) -> u8 {
    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    (f64::from(sum) / 4.0).round() as u8
}

/// Stable sort, high priority first.
pub fn sort_by_priority(recommendations: &mut [Recommendation]) {
    recommendations.sort_by_key(|rec| rec.priority);
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

fn length_tier(value: &str, min: usize, max: usize) -> FieldScore {
    let len = char_len(value);
    if len == 0 {
        FieldScore::Error
    } else if (min..=max).contains(&len) {
        FieldScore::Good
    } else {
        FieldScore::Warning
    }
}

fn viewport_disables_zoom(viewport: &str) -> bool {
    viewport
        .split([',', ';'])
        .filter_map(|directive| directive.split_once('='))
        .any(|(key, value)| {
            let key = key.trim().to_lowercase();
            let value = value.trim().to_lowercase();
            match key.as_str() {
                "user-scalable" => value == "no" || value == "0",
                "maximum-scale" => value.parse::<f64>().is_ok_and(|scale| scale < 2.0),
                _ => false,
            }
        })
}
