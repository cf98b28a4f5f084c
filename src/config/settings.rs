use crate::adapters::hn_search::{DEFAULT_ENDPOINT, DEFAULT_TAGS};
use crate::domain::model::{BoundaryRule, HypeLevelTable, KeywordSet, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{HypeError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range,
    validate_url, Validate,
};
use std::time::Duration;

pub const DEFAULT_NUM_PAGES: usize = 10;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 900.0;
pub const MAX_PAGE_SIZE: usize = 1000;
/// The search API stops paging after this many hits.
pub const MAX_SAMPLE_SIZE: usize = 1000;

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: String,
    pub tags: String,
    pub timeout: Option<Duration>,
    pub num_pages: usize,
    pub page_size: usize,
    pub deadline: Option<Duration>,
    pub keywords: KeywordSet,
    pub boundary: BoundaryRule,
    pub hype_levels: HypeLevelTable,
    pub viewport_width: f64,
    pub output_path: String,
    pub output_formats: Vec<OutputFormat>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            tags: DEFAULT_TAGS.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            num_pages: DEFAULT_NUM_PAGES,
            page_size: DEFAULT_PAGE_SIZE,
            deadline: None,
            keywords: KeywordSet::default(),
            boundary: BoundaryRule::default(),
            hype_levels: HypeLevelTable::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            output_path: "./output".to_string(),
            output_formats: vec![OutputFormat::Html],
        }
    }
}

impl Settings {
    pub fn sample_size(&self) -> usize {
        self.num_pages * self.page_size
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.endpoint)?;
        validate_non_empty_string("source.tags", &self.tags)?;
        validate_positive_number("sampling.num_pages", self.num_pages, 1)?;
        validate_range("sampling.page_size", self.page_size, 1, MAX_PAGE_SIZE)?;
        if self.sample_size() > MAX_SAMPLE_SIZE {
            return Err(HypeError::InvalidConfigValue {
                field: "sampling.num_pages".to_string(),
                value: self.num_pages.to_string(),
                reason: format!(
                    "num_pages x page_size = {} exceeds the {} posts the search API pages through",
                    self.sample_size(),
                    MAX_SAMPLE_SIZE
                ),
            });
        }

        if self.keywords.is_empty() {
            return Err(HypeError::ConfigValidation {
                field: "keywords.terms".to_string(),
                message: "At least one keyword is required".to_string(),
            });
        }
        for keyword in self.keywords.terms() {
            validate_non_empty_string("keywords.terms", keyword)?;
        }

        if self.hype_levels.is_empty() {
            return Err(HypeError::ConfigValidation {
                field: "hype.levels".to_string(),
                message: "At least one hype level is required".to_string(),
            });
        }
        for level in self.hype_levels.levels() {
            validate_range("hype.levels.lower_bound", level.lower_bound, 0.0, 1.0)?;
            validate_non_empty_string("hype.levels.label", &level.label)?;
        }

        validate_range("render.viewport_width", self.viewport_width, 100.0, 10_000.0)?;
        validate_path("output.path", &self.output_path)?;
        if self.output_formats.is_empty() {
            return Err(HypeError::MissingConfig {
                field: "output.formats".to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn tags(&self) -> &str {
        &self.tags
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn num_pages(&self) -> usize {
        self.num_pages
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    fn boundary(&self) -> BoundaryRule {
        self.boundary
    }

    fn hype_levels(&self) -> &HypeLevelTable {
        &self.hype_levels
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.output_formats
    }
}
