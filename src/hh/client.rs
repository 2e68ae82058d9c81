//! HTTP client for the hh.ru vacancy search endpoint.

use crate::config::{Config, SearchParams};
use crate::hh::models::VacancyPage;
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;
use wreq::Client;

/// Failures while fetching a page of vacancies.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] wreq::Error),

    #[error("request failed with status: {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid client configuration: {0}")]
    Config(String),
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Source of vacancy pages - enables mocking for tests.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Fetches the zero-based `page` of search results.
    async fn fetch(&self, page: u32) -> FetchResult<VacancyPage>;
}

/// hh.ru API client.
pub struct HhClient {
    client: Client,
    base_url: String,
    user_agent: String,
    params: SearchParams,
}

impl HhClient {
    /// Creates a client for the configured API root.
    pub fn new(config: &Config, params: SearchParams) -> FetchResult<Self> {
        let mut builder = Client::builder().gzip(true).brotli(true);

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url)
                .map_err(|e| FetchError::Config(format!("bad proxy {}: {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            params,
        })
    }

    /// Builds the search URL for a page.
    fn page_url(&self, page: u32) -> String {
        format!(
            "{}/vacancies?text={}&per_page={}&page={}",
            self.base_url,
            urlencoding::encode(&self.params.text),
            self.params.per_page,
            page
        )
    }

    async fn get(&self, url: &str) -> FetchResult<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", self.user_agent.as_str())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl VacancySource for HhClient {
    async fn fetch(&self, page: u32) -> FetchResult<VacancyPage> {
        let body = self.get(&self.page_url(page)).await?;
        let page = VacancyPage::from_json(&body)?;
        debug!("Decoded {} vacancies ({} pages total)", page.items.len(), page.pages);
        Ok(page)
    }
}
