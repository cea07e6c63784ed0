use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fields extracted from a page, as handed to the scoring engine.
/// Empty strings and zero counts mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisInput {
    pub url: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    pub robots: String,
    pub viewport: String,
    pub has_viewport_meta: bool,
    pub open_graph: OpenGraphTags,
    pub twitter: TwitterCardTags,
    pub favicon: String,
    pub h1_count: usize,
    pub image_count: usize,
    pub images_without_alt: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraphTags {
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_url: String,
    pub og_type: String,
    pub og_site_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterCardTags {
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: String,
    pub twitter_site: String,
}

/// Tier for a single scored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldScore {
    Good,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Excellent,
    Good,
    NeedsImprovement,
    Critical,
}

impl Status {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Status::Excellent,
            70..=89 => Status::Good,
            50..=69 => Status::NeedsImprovement,
            _ => Status::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Excellent => "Excellent",
            Status::Good => "Good",
            Status::NeedsImprovement => "Needs Improvement",
            Status::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

/// Impact / priority tier. Declaration order is urgency order, so sorting
/// ascending puts `High` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// The four scored dimensions. Also used as the recommendation category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoCategory {
    Meta,
    Social,
    Technical,
    Mobile,
}

impl SeoCategory {
    pub const ALL: [SeoCategory; 4] = [
        SeoCategory::Meta,
        SeoCategory::Social,
        SeoCategory::Technical,
        SeoCategory::Mobile,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SeoCategory::Meta => "Meta Tags",
            SeoCategory::Social => "Social Media",
            SeoCategory::Technical => "Technical SEO",
            SeoCategory::Mobile => "Mobile Optimization",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeoCategory::Meta => "meta",
            SeoCategory::Social => "social",
            SeoCategory::Technical => "technical",
            SeoCategory::Mobile => "mobile",
        }
    }
}

impl fmt::Display for SeoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeoCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meta" => Ok(SeoCategory::Meta),
            "social" => Ok(SeoCategory::Social),
            "technical" => Ok(SeoCategory::Technical),
            "mobile" => Ok(SeoCategory::Mobile),
            other => Err(format!(
                "unknown category '{}': expected meta, social, technical or mobile",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoIssue {
    pub severity: IssueSeverity,
    pub title: String,
    pub description: String,
    pub impact: Priority,
    pub remediation: String,
    /// Lower is more urgent.
    pub priority: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Stable across runs on the same input; callers key completion state on it.
    pub id: String,
    pub category: SeoCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub how_to_fix: String,
    pub estimated_time: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: SeoCategory,
    pub name: String,
    pub score: u8,
    pub status: Status,
    pub issues: Vec<SeoIssue>,
    pub passed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    pub meta_tags: CategoryResult,
    pub social_media: CategoryResult,
    pub technical: CategoryResult,
    pub mobile: CategoryResult,
}

impl Categories {
    pub fn iter(&self) -> impl Iterator<Item = &CategoryResult> {
        [&self.meta_tags, &self.social_media, &self.technical, &self.mobile].into_iter()
    }

    pub fn get(&self, category: SeoCategory) -> &CategoryResult {
        match category {
            SeoCategory::Meta => &self.meta_tags,
            SeoCategory::Social => &self.social_media,
            SeoCategory::Technical => &self.technical,
            SeoCategory::Mobile => &self.mobile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldScores {
    pub title: FieldScore,
    pub description: FieldScore,
    pub open_graph: FieldScore,
    pub twitter: FieldScore,
    pub mobile: FieldScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub input: AnalysisInput,
    pub categories: Categories,
    pub scores: FieldScores,
    pub overall: u8,
    pub recommendations: Vec<Recommendation>,
}

/// Headline counters for the summary block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStats {
    pub checks_passed: usize,
    pub checks_total: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub quick_fixes: usize,
}

impl AnalysisResult {
    pub fn status(&self) -> Status {
        Status::from_score(self.overall)
    }

    pub fn recommendations_in(&self, category: SeoCategory) -> Vec<&Recommendation> {
        self.recommendations
            .iter()
            .filter(|rec| rec.category == category)
            .collect()
    }

    pub fn quick_stats(&self) -> QuickStats {
        let count = |priority: Priority| {
            self.recommendations
                .iter()
                .filter(|rec| rec.priority == priority)
                .count()
        };

        QuickStats {
            checks_passed: self.categories.iter().map(|c| c.passed).sum(),
            checks_total: self.categories.iter().map(|c| c.total).sum(),
            high_priority: count(Priority::High),
            medium_priority: count(Priority::Medium),
            quick_fixes: self
                .recommendations
                .iter()
                .filter(|rec| rec.difficulty == Difficulty::Easy)
                .count(),
        }
    }
}
