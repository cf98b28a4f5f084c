use crate::config::settings::Settings;
use crate::domain::model::{BoundaryRule, HypeLevel, HypeLevelTable, KeywordSet, OutputFormat};
use crate::utils::error::{HypeError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Profile file. Every section is optional; missing values fall back to
/// [`Settings::default`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub sampling: Option<SamplingConfig>,
    pub keywords: Option<KeywordsConfig>,
    pub hype: Option<HypeConfig>,
    pub render: Option<RenderConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub tags: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingConfig {
    pub num_pages: Option<usize>,
    pub page_size: Option<usize>,
    pub deadline_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordsConfig {
    pub terms: Option<Vec<String>>,
    pub boundary: Option<BoundaryRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HypeConfig {
    pub levels: Option<Vec<HypeLevel>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub viewport_width: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub formats: Option<Vec<OutputFormat>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HypeError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HypeError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HN_ENDPOINT})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HypeError::Config {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the file over the given base settings.
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(source) = &self.source {
            if let Some(endpoint) = &source.endpoint {
                settings.endpoint = endpoint.clone();
            }
            if let Some(tags) = &source.tags {
                settings.tags = tags.clone();
            }
            if let Some(timeout) = source.timeout_seconds {
                settings.timeout = (timeout > 0).then(|| Duration::from_secs(timeout));
            }
        }

        if let Some(sampling) = &self.sampling {
            if let Some(num_pages) = sampling.num_pages {
                settings.num_pages = num_pages;
            }
            if let Some(page_size) = sampling.page_size {
                settings.page_size = page_size;
            }
            if let Some(deadline) = sampling.deadline_seconds {
                settings.deadline = (deadline > 0).then(|| Duration::from_secs(deadline));
            }
        }

        if let Some(keywords) = &self.keywords {
            if let Some(terms) = &keywords.terms {
                settings.keywords = KeywordSet::new(terms);
            }
            if let Some(boundary) = keywords.boundary {
                settings.boundary = boundary;
            }
        }

        if let Some(levels) = self.hype.as_ref().and_then(|h| h.levels.clone()) {
            settings.hype_levels = HypeLevelTable::new(levels);
        }

        if let Some(width) = self.render.as_ref().and_then(|r| r.viewport_width) {
            settings.viewport_width = width;
        }

        if let Some(output) = &self.output {
            if let Some(path) = &output.path {
                settings.output_path = path.clone();
            }
            if let Some(formats) = &output.formats {
                settings.output_formats = formats.clone();
            }
        }

        settings
    }

    pub fn to_settings(&self) -> Settings {
        self.apply_to(Settings::default())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_settings().validate()
    }
}
