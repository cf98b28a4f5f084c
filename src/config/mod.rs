pub mod cli;
pub mod settings;
pub mod toml_config;

pub use settings::Settings;

#[cfg(feature = "cli")]
use crate::domain::model::{BoundaryRule, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hype-dial")]
#[command(about = "Measure AI hype in the latest Show HN posts and render it as a gauge")]
#[command(version)]
pub struct CliConfig {
    /// Path to a TOML profile
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Search endpoint (HN Algolia search_by_date compatible)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Post tag to sample
    #[arg(long)]
    pub tags: Option<String>,

    /// Number of pages to fetch
    #[arg(long)]
    pub pages: Option<usize>,

    /// Posts per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Keyword boundary rule
    #[arg(long, value_enum)]
    pub boundary: Option<BoundaryRule>,

    /// Layout width the gauge is sized from
    #[arg(long)]
    pub width: Option<f64>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output formats, comma separated
    #[arg(long, value_enum, value_delimiter = ',')]
    pub formats: Vec<OutputFormat>,

    /// Per-request timeout in seconds (0 disables)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Give up on pages still loading after this many seconds (0 disables)
    #[arg(long)]
    pub deadline_secs: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Show the resolved settings and page URLs without fetching
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 預設值 < TOML 檔 < 命令列參數
    pub fn resolve(&self) -> Result<Settings> {
        let base = match &self.config {
            Some(path) => toml_config::TomlConfig::from_file(path)?.to_settings(),
            None => Settings::default(),
        };
        Ok(self.apply_to(base))
    }

    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(tags) = &self.tags {
            settings.tags = tags.clone();
        }
        if let Some(pages) = self.pages {
            settings.num_pages = pages;
        }
        if let Some(page_size) = self.page_size {
            settings.page_size = page_size;
        }
        if let Some(boundary) = self.boundary {
            settings.boundary = boundary;
        }
        if let Some(width) = self.width {
            settings.viewport_width = width;
        }
        if let Some(output) = &self.output {
            settings.output_path = output.clone();
        }
        if !self.formats.is_empty() {
            settings.output_formats = self.formats.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            settings.timeout = (timeout > 0).then(|| Duration::from_secs(timeout));
        }
        if let Some(deadline) = self.deadline_secs {
            settings.deadline = (deadline > 0).then(|| Duration::from_secs(deadline));
        }
        settings
    }
}
