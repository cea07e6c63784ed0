use crate::models::{
    AnalysisResult, CategoryResult, FieldScore, IssueSeverity, Priority, QuickStats, SeoCategory,
    Status,
};
use crate::preview::{Device, SearchPreview, SocialCard};
use crate::tracker::CompletionTracker;
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub url: String,
    pub result: AnalysisResult,
    pub summary: QuickStats,
    pub search_preview: SearchPreview,
    pub social_cards: Vec<SocialCard>,
    pub timestamp: String,
}

pub struct Reporter;

impl Reporter {
    pub fn generate_report(result: AnalysisResult) -> AnalysisReport {
        let timestamp = chrono::Utc::now().to_rfc3339();

        AnalysisReport {
            url: result.input.url.clone(),
            summary: result.quick_stats(),
            search_preview: SearchPreview::from_input(&result.input),
            social_cards: SocialCard::all(&result.input),
            result,
            timestamp,
        }
    }

    pub fn print_text_report(
        report: &AnalysisReport,
        filter: Option<SeoCategory>,
        tracker: &CompletionTracker,
    ) {
        let result = &report.result;

        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "Seoscope - SEO Report".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        if !report.url.is_empty() {
            println!("{}: {}", "URL".bright_white().bold(), report.url);
        }
        println!(
            "{}: {}",
            "Timestamp".bright_white().bold(),
            report.timestamp
        );
        println!();

        // Overall score
        let status = result.status();
        println!("{}", "SEO Score".bright_yellow().bold().underline());
        println!(
            "  {} / 100  {}",
            colorize_status(&result.overall.to_string(), status).bold(),
            colorize_status(status.label(), status)
        );
        println!();

        // Summary
        let summary = &report.summary;
        println!("{}", "Summary".bright_yellow().bold().underline());
        println!(
            "  Checks Passed:   {}",
            format!("{}/{}", summary.checks_passed, summary.checks_total).bright_green()
        );
        println!(
            "  Critical Issues: {}",
            if summary.high_priority > 0 {
                summary.high_priority.to_string().bright_red()
            } else {
                summary.high_priority.to_string().bright_green()
            }
        );
        println!(
            "  Warnings:        {}",
            if summary.medium_priority > 0 {
                summary.medium_priority.to_string().yellow()
            } else {
                summary.medium_priority.to_string().bright_green()
            }
        );
        println!(
            "  Quick Fixes:     {}",
            summary.quick_fixes.to_string().bright_cyan()
        );
        println!();

        // Field tiers
        println!("{}", "Tags".bright_yellow().bold().underline());
        let scores = &result.scores;
        let input = &result.input;
        Self::print_field(
            "Title",
            scores.title,
            &format!("{} chars", input.title.trim().chars().count()),
        );
        Self::print_field(
            "Description",
            scores.description,
            &format!("{} chars", input.description.trim().chars().count()),
        );
        Self::print_field("Open Graph", scores.open_graph, "");
        Self::print_field("Twitter Card", scores.twitter, "");
        Self::print_field("Mobile", scores.mobile, "");
        println!();

        // Categories
        println!("{}", "Categories".bright_yellow().bold().underline());
        match filter {
            Some(category) => Self::print_category(result.categories.get(category)),
            None => result.categories.iter().for_each(Self::print_category),
        }
        println!();

        // Previews
        println!("{}", "Search Preview".bright_yellow().bold().underline());
        let preview = &report.search_preview;
        for device in [Device::Desktop, Device::Mobile] {
            let (title, description) = preview.for_device(device);
            println!("  [{:?}]", device);
            if !preview.display_url.is_empty() {
                println!("    {}", preview.display_url.dimmed());
            }
            println!("    {}", title.bright_blue());
            println!("    {}", description);
        }
        println!();

        println!("{}", "Social Previews".bright_yellow().bold().underline());
        for card in &report.social_cards {
            println!(
                "  {} {}",
                format!("{}:", card.network.name()).bright_white().bold(),
                card.title
            );
            println!("    {}", card.description);
            println!(
                "    Image: {}",
                card.image
                    .as_deref()
                    .map(|image| image.normal())
                    .unwrap_or_else(|| "none".bright_red())
            );
        }
        println!();

        // Recommendations
        let recommendations: Vec<_> = match filter {
            Some(category) => result.recommendations_in(category),
            None => result.recommendations.iter().collect(),
        };

        println!(
            "{} ({}/{} completed, {}%)",
            "Recommendations".bright_yellow().bold().underline(),
            tracker.completed_in(result),
            result.recommendations.len(),
            tracker.progress(result)
        );

        if recommendations.is_empty() {
            println!("  {}", "No suggestions. All set!".bright_green());
        }

        for rec in recommendations {
            let priority_str = match rec.priority {
                Priority::High => "HIGH".bright_red(),
                Priority::Medium => "MED ".yellow(),
                Priority::Low => "LOW ".bright_cyan(),
            };
            let check = if tracker.is_complete(&rec.id) { "x" } else { " " };

            println!();
            println!(
                "  [{}] [{}] {} {}",
                check,
                priority_str,
                rec.title.bright_white().bold(),
                format!("({})", rec.id).dimmed()
            );
            println!("      {}", rec.description);
            println!("      Impact:     {}", rec.impact);
            println!("      How to fix: {}", rec.how_to_fix);
            println!(
                "      Effort:     {} ({}), category: {}",
                rec.estimated_time, rec.difficulty, rec.category
            );
        }

        println!();
        println!("{}", "=".repeat(80).bright_blue());
    }

    fn print_field(name: &str, score: FieldScore, detail: &str) {
        let label = match score {
            FieldScore::Good => "GOOD ".bright_green(),
            FieldScore::Warning => "WARN ".yellow(),
            FieldScore::Error => "ERROR".bright_red(),
        };
        println!("  [{}] {:<13} {}", label, name, detail.dimmed());
    }

    fn print_category(category: &CategoryResult) {
        println!(
            "  {:<20} {:>3}%  {:<18} {}/{} checks passed",
            category.name,
            category.score,
            colorize_status(category.status.label(), category.status),
            category.passed,
            category.total
        );

        for issue in &category.issues {
            let severity_str = match issue.severity {
                IssueSeverity::Error => "ERROR".bright_red(),
                IssueSeverity::Warning => "WARN ".yellow(),
                IssueSeverity::Info => "INFO ".bright_cyan(),
            };
            println!("      [{}] {}", severity_str, issue.description);
        }
    }

    pub fn save_json_report(report: &AnalysisReport, filename: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(filename)
            .with_context(|| format!("Failed to create report file: {}", filename))?;
        file.write_all(json.as_bytes())?;
        eprintln!("Report saved to: {}", filename.bright_green());
        Ok(())
    }
}

fn colorize_status(text: &str, status: Status) -> ColoredString {
    match status {
        Status::Excellent => text.bright_green(),
        Status::Good => text.bright_blue(),
        Status::NeedsImprovement => text.yellow(),
        Status::Critical => text.bright_red(),
    }
}
