use crate::models::SeoCategory;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "seoscope")]
#[command(about = "Score a page's meta tags, social cards and mobile readiness", long_about = None)]
pub struct Cli {
    /// HTML file, JSON analysis input, or '-' to read HTML from stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// URL of the page, used for previews
    #[arg(short, long)]
    pub url: Option<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Save report to file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Only show recommendations in this category (meta, social, technical, mobile)
    #[arg(short, long)]
    pub category: Option<SeoCategory>,

    /// Mark a recommendation id as completed (repeatable)
    #[arg(long = "done", value_name = "ID")]
    pub done: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
