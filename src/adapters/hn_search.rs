use crate::domain::ports::{ConfigProvider, PostSource};
use crate::utils::error::{HypeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search_by_date";
pub const DEFAULT_TAGS: &str = "show_hn";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: Option<String>,
}

/// Client for the HN Algolia `search_by_date` endpoint.
#[derive(Debug, Clone)]
pub struct HnSearchClient {
    client: Client,
    endpoint: Url,
    tags: String,
    page_size: usize,
    timeout: Option<Duration>,
}

impl HnSearchClient {
    pub fn new(endpoint: &str, tags: &str, page_size: usize) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| HypeError::InvalidConfigValue {
            field: "source.endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        Ok(Self {
            client: Client::new(),
            endpoint,
            tags: tags.to_string(),
            page_size,
            timeout: None,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(config.api_endpoint(), config.tags(), config.page_size())?
            .with_timeout(config.request_timeout()))
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// `?tags=…&page=…&hitsPerPage=…`, appended to any query already on the endpoint.
    pub fn page_url(&self, page: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("tags", &self.tags)
            .append_pair("page", &page.to_string())
            .append_pair("hitsPerPage", &self.page_size.to_string());
        url
    }
}

#[async_trait]
impl PostSource for HnSearchClient {
    async fn fetch_titles(&self, page: usize) -> Result<Vec<String>> {
        let url = self.page_url(page);
        tracing::debug!("Making API request to: {}", url);

        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        tracing::debug!("Page {} response status: {}", page, response.status());

        if !response.status().is_success() {
            return Err(HypeError::HttpStatus {
                page,
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| HypeError::Parse {
                page,
                message: e.to_string(),
            })?;

        let hit_count = parsed.hits.len();
        let titles: Vec<String> = parsed.hits.into_iter().filter_map(|hit| hit.title).collect();
        if titles.len() < hit_count {
            tracing::debug!(
                "Page {}: skipped {} hits without a title",
                page,
                hit_count - titles.len()
            );
        }

        Ok(titles)
    }
}
