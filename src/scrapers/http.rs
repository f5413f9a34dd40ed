use crate::config::ScoutConfig;
use crate::error::{ScoutError, ScoutResult};
use crate::scrapers::traits::PageSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Page source doing plain HTTP GETs. Only useful for server-rendered pages.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &ScoutConfig) -> ScoutResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ScoutError::HttpClient)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> ScoutResult<String> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScoutError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status: {}", url, status);
            return Err(ScoutError::transport(url, format!("HTTP status {}", status)));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ScoutError::transport(url, e))?;

        debug!("Downloaded {} bytes of HTML", html.len());
        Ok(html)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
