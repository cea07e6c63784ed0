use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::models::SeoCategory;
use crate::seo_analyzer::ScoringPolicy;

/// Settings read from `seoscope.{json,toml,yaml}`. Unset keys defer to the
/// command line.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// URL of the analyzed page
    pub url: Option<String>,

    /// Output format: text or json
    pub output: Option<String>,

    /// Save report to file
    pub save: Option<String>,

    /// Turn on debug logging
    pub verbose: Option<bool>,

    /// Only show recommendations in this category
    pub category: Option<SeoCategory>,

    /// Overrides for the scoring length thresholds
    pub thresholds: Option<Thresholds>,
}

/// Partial [`ScoringPolicy`]; unset fields keep their defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Thresholds {
    pub title_min: Option<usize>,
    pub title_max: Option<usize>,
    pub description_min: Option<usize>,
    pub description_max: Option<usize>,
}

/// Serialization used by a config file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Yaml => "YAML",
        };
        f.write_str(name)
    }
}

/// Lookup order for default config files.
static CONFIG_FORMATS: [ConfigFormat; 3] =
    [ConfigFormat::Json, ConfigFormat::Toml, ConfigFormat::Yaml];

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                "toml" => Some(ConfigFormat::Toml),
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                _ => None,
            })
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ConfigFormat::Json => &["json"],
            ConfigFormat::Toml => &["toml"],
            ConfigFormat::Yaml => &["yaml", "yml"],
        }
    }
}

impl Config {
    /// Parses one config file. The extension decides the parser.
    pub fn from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)
            .with_context(|| format!("Unsupported config file format: {}", path.display()))?;
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let parsed: Result<Self> = match format {
            ConfigFormat::Json => serde_json::from_str(&contents).map_err(Into::into),
            ConfigFormat::Toml => toml::from_str(&contents).map_err(Into::into),
            ConfigFormat::Yaml => serde_yaml::from_str(&contents).map_err(Into::into),
        };

        parsed.with_context(|| format!("Failed to parse {} config: {}", format, path.display()))
    }

    /// `./seoscope.*` first, then `$XDG_CONFIG_HOME/seoscope/config.*`
    /// (or `~/.config/seoscope/config.*`).
    pub fn default_paths() -> Vec<PathBuf> {
        let file_names = |stem: &str| -> Vec<String> {
            CONFIG_FORMATS
                .iter()
                .flat_map(|format| format.extensions().iter())
                .map(|ext| format!("{}.{}", stem, ext))
                .collect()
        };

        let mut paths: Vec<PathBuf> = file_names("seoscope")
            .into_iter()
            .map(PathBuf::from)
            .collect();

        let config_home = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

        if let Some(dir) = config_home.map(|home| home.join("seoscope")) {
            paths.extend(file_names("config").into_iter().map(|name| dir.join(name)));
        }

        paths
    }

    /// First existing file from [`Config::default_paths`].
    pub fn from_default_paths() -> Result<Option<Self>> {
        for path in Self::default_paths() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading config");
                return Ok(Some(Self::from_file(&path)?));
            }
        }
        Ok(None)
    }

    /// Loads the file named by `--config`, or the first default path found.
    pub fn load(cli: &Cli) -> Result<Self> {
        match &cli.config {
            Some(path) => Self::from_file(Path::new(path)),
            None => Ok(Self::from_default_paths()?.unwrap_or_default()),
        }
    }

    /// Fills CLI arguments left at their defaults from this file.
    pub fn merge_with_cli(&self, cli: &Cli) -> Cli {
        Cli {
            input: cli.input.clone(),
            url: cli.url.clone().or_else(|| self.url.clone()),
            output: if cli.output != "text" {
                cli.output.clone()
            } else {
                self.output.clone().unwrap_or_else(|| cli.output.clone())
            },
            save: cli.save.clone().or_else(|| self.save.clone()),
            category: cli.category.or(self.category),
            done: cli.done.clone(),
            verbose: if cli.verbose {
                cli.verbose
            } else {
                self.verbose.unwrap_or(cli.verbose)
            },
            config: cli.config.clone(),
        }
    }

    /// Whether debug logging should be on once the config file is applied.
    /// A config that fails to load falls back to the flag; `run` reports
    /// the load error itself.
    pub fn verbose_logging(cli: &Cli) -> bool {
        Self::load(cli)
            .map(|config| config.merge_with_cli(cli).verbose)
            .unwrap_or(cli.verbose)
    }

    /// Scoring policy with this file's threshold overrides applied.
    pub fn scoring_policy(&self) -> Result<ScoringPolicy> {
        let defaults = ScoringPolicy::default();
        let overrides = self.thresholds.unwrap_or_default();

        let policy = ScoringPolicy {
            title_min: overrides.title_min.unwrap_or(defaults.title_min),
            title_max: overrides.title_max.unwrap_or(defaults.title_max),
            description_min: overrides.description_min.unwrap_or(defaults.description_min),
            description_max: overrides.description_max.unwrap_or(defaults.description_max),
        };

        if policy.title_min > policy.title_max {
            bail!(
                "Invalid thresholds: title_min ({}) is greater than title_max ({})",
                policy.title_min,
                policy.title_max
            );
        }
        if policy.description_min > policy.description_max {
            bail!(
                "Invalid thresholds: description_min ({}) is greater than description_max ({})",
                policy.description_min,
                policy.description_max
            );
        }

        Ok(policy)
    }
}
