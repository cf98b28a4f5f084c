use crate::core::counts::{CountsByPage, PageState};
use crate::domain::model::DerivedMetrics;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Fetched,
    Failed,
    Pending,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageRow {
    pub page: usize,
    pub status: PageStatus,
    pub match_count: Option<usize>,
    pub title_count: Option<usize>,
    pub reason: Option<String>,
}

/// End-of-run summary written as `hype_report.json`.
#[derive(Debug, Clone, Serialize)]
pub struct HypeReport {
    pub generated_at: DateTime<Utc>,
    pub endpoint: String,
    pub tags: String,
    pub num_pages: usize,
    pub page_size: usize,
    pub pages: Vec<PageRow>,
    pub metrics: DerivedMetrics,
}

impl HypeReport {
    pub fn new(endpoint: &str, tags: &str, counts: &CountsByPage, metrics: &DerivedMetrics) -> Self {
        Self {
            generated_at: Utc::now(),
            endpoint: endpoint.to_string(),
            tags: tags.to_string(),
            num_pages: counts.num_pages(),
            page_size: counts.page_size(),
            pages: page_rows(counts),
            metrics: metrics.clone(),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

pub fn page_rows(counts: &CountsByPage) -> Vec<PageRow> {
    (0..counts.num_pages())
        .map(|page| match counts.get(page) {
            Some(PageState::Fetched(result)) => PageRow {
                page,
                status: PageStatus::Fetched,
                match_count: Some(result.match_count),
                title_count: Some(result.title_count),
                reason: None,
            },
            Some(PageState::Failed(reason)) => PageRow {
                page,
                status: PageStatus::Failed,
                match_count: None,
                title_count: None,
                reason: Some(reason.clone()),
            },
            None => PageRow {
                page,
                status: PageStatus::Pending,
                match_count: None,
                title_count: None,
                reason: None,
            },
        })
        .collect()
}

/// `page,status,match_count,title_count,reason`
pub fn pages_csv(counts: &CountsByPage) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in page_rows(counts) {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| crate::utils::error::HypeError::Io(e.into_error()))
}
