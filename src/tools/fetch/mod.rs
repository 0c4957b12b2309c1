mod client;
mod headers;
mod utils;


pub(crate) use utils::describe_status;

use crate::{config::ScrapeConfig, error::*};
use client::build_client;
use headers::{headers_for_config, with_overrides};
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use utils::validate_status;

/// GET-only HTTP client with a fixed timeout and the shared outbound headers.
///
/// Each strategy owns one, built with its own timeout, so a slow rendering
/// proxy never stretches the budget of a vendor API call.
///
/// # Examples
/// ```no_run
/// use jobscrape::{config::ScrapeConfig, tools::fetch::HttpFetcher};
///
/// # async fn example() -> jobscrape::Result<()> {
/// let cfg = ScrapeConfig::default();
/// let fetcher = HttpFetcher::new(&cfg, cfg.api_timeout())?;
/// let html = fetcher.get_text("https://example.com", &[]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    headers: HeaderMap,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(cfg: &ScrapeConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            headers: headers_for_config(cfg)?,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch `url` as text. `extra` overrides shared headers for this request;
    /// names must be lowercase.
    pub async fn get_text(&self, url: &str, extra: &[(&'static str, &str)]) -> Result<String> {
        debug!(url = %url, timeout_ms = self.timeout.as_millis() as u64, "GET");
        let response = self
            .client
            .get(url)
            .headers(with_overrides(&self.headers, extra))
            .send()
            .await?;

        validate_status(url, response.status())?;
        Ok(response.text().await?)
    }

    /// Fetch `url` and parse the body as untyped JSON.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let body = self
            .get_text(url, &[("accept", "application/json")])
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}
