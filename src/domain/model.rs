use serde::{Deserialize, Serialize};

pub const DEFAULT_KEYWORDS: [&str; 7] = [
    "ai",
    "genai",
    "generative ai",
    "prompt",
    "prompt engineering",
    "gpt",
    "chatgpt",
];

/// 啟動時固定的關鍵字清單，一律轉為小寫
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet {
    terms: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|term| term.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(terms: Vec<String>) -> Self {
        Self::new(terms)
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.terms
    }
}

/// Which characters count as a token boundary around a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum BoundaryRule {
    Space,
    #[default]
    SpaceOrHyphen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypeLevel {
    pub lower_bound: f64,
    pub label: String,
}

impl HypeLevel {
    pub fn new(lower_bound: f64, label: impl Into<String>) -> Self {
        Self {
            lower_bound,
            label: label.into(),
        }
    }
}

/// Severity bands, kept sorted from the highest lower bound to the lowest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<HypeLevel>", into = "Vec<HypeLevel>")]
pub struct HypeLevelTable {
    levels: Vec<HypeLevel>,
}

impl HypeLevelTable {
    pub fn new(mut levels: Vec<HypeLevel>) -> Self {
        levels.sort_by(|a, b| b.lower_bound.total_cmp(&a.lower_bound));
        Self { levels }
    }

    pub fn levels(&self) -> &[HypeLevel] {
        &self.levels
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for HypeLevelTable {
    fn default() -> Self {
        Self::new(vec![
            HypeLevel::new(0.99, "CATASTROPHIC"),
            HypeLevel::new(0.74, "EXTREME"),
            HypeLevel::new(0.49, "SEVERE"),
            HypeLevel::new(0.24, "VERY HIGH"),
            HypeLevel::new(0.11, "HIGH"),
            HypeLevel::new(0.0, "LOW-MODERATE"),
        ])
    }
}

impl From<Vec<HypeLevel>> for HypeLevelTable {
    fn from(levels: Vec<HypeLevel>) -> Self {
        Self::new(levels)
    }
}

impl From<HypeLevelTable> for Vec<HypeLevel> {
    fn from(table: HypeLevelTable) -> Self {
        table.levels
    }
}

/// 單一頁面的抓取結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub page: usize,
    pub match_count: usize,
    pub title_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Fetched(PageResult),
    Failed { page: usize, reason: String },
}

impl PageOutcome {
    pub fn page(&self) -> usize {
        match self {
            PageOutcome::Fetched(result) => result.page,
            PageOutcome::Failed { page, .. } => *page,
        }
    }
}

/// Values recomputed on every merge; never stored between runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub matched: usize,
    pub sampled: usize,
    pub percent: f64,
    pub hype: f64,
    pub label: String,
    pub color: String,
    pub pages_resolved: usize,
    pub pages_failed: usize,
    pub pages_pending: usize,
}

impl DerivedMetrics {
    pub fn is_complete(&self) -> bool {
        self.pages_pending == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Svg,
    Html,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "hype_gauge.svg",
            OutputFormat::Html => "hype_gauge.html",
            OutputFormat::Json => "hype_report.json",
            OutputFormat::Csv => "hype_pages.csv",
        }
    }

    /// Gauge formats are rewritten on every update; reports only once at the end.
    pub fn is_gauge(&self) -> bool {
        matches!(self, OutputFormat::Svg | OutputFormat::Html)
    }
}
