use crate::domain::model::{
    BoundaryRule, DerivedMetrics, HypeLevelTable, KeywordSet, OutputFormat,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn tags(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn num_pages(&self) -> usize;
    fn page_size(&self) -> usize;
    fn deadline(&self) -> Option<Duration>;
    fn keywords(&self) -> &KeywordSet;
    fn boundary(&self) -> BoundaryRule;
    fn hype_levels(&self) -> &HypeLevelTable;
    fn viewport_width(&self) -> f64;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];
}

/// A paged source of post titles.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_titles(&self, page: usize) -> Result<Vec<String>>;
}

/// Receives every recomputed aggregate, starting with the empty state.
#[async_trait]
pub trait GaugeObserver: Send + Sync {
    async fn on_update(&self, metrics: &DerivedMetrics) -> Result<()>;
}
