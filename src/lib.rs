pub mod cli;
pub mod config;
pub mod extractor;
pub mod models;
pub mod preview;
pub mod reporter;
pub mod seo_analyzer;
pub mod source;
pub mod tracker;

use anyhow::{Context, Result};
use cli::Cli;
use colored::*;
use config::Config;
use reporter::Reporter;
use seo_analyzer::SeoAnalyzer;
use tracker::CompletionTracker;
use url::Url;

pub fn run(args: Cli) -> Result<()> {
    let config = Config::load(&args)?;
    let args = config.merge_with_cli(&args);
    let policy = config.scoring_policy()?;

    // Validate URL
    if let Some(url) = &args.url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("URL must start with http:// or https://");
        }
        Url::parse(url).context("Invalid URL")?;
    }

    let json_output = args.output == "json";

    if !json_output {
        println!(
            "{}",
            "Seoscope - Page SEO Analyzer".bright_cyan().bold()
        );
        println!("{}", "=".repeat(50).bright_blue());
        println!();
        println!("{} {}", "Analyzing:".bright_white().bold(), args.input);
    }

    let input = source::load_input(&args.input, args.url.as_deref())
        .with_context(|| format!("Could not load page from {}", args.input))?;

    tracing::info!(source = %args.input, url = %input.url, "Analyzing page");

    let analyzer = SeoAnalyzer::new(policy);
    tracing::debug!(policy = ?analyzer.policy(), "Scoring policy");
    let result = analyzer.analyze(input);

    tracing::info!(
        overall = result.overall,
        recommendations = result.recommendations.len(),
        "Analysis finished"
    );

    let report = Reporter::generate_report(result);
    let tracker = CompletionTracker::from_ids(args.done.iter().cloned());

    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        _ => {
            Reporter::print_text_report(&report, args.category, &tracker);
        }
    }

    if let Some(filename) = args.save {
        Reporter::save_json_report(&report, &filename)?;
    }

    Ok(())
}
