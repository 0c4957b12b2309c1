//! Rendering proxy fallback for JavaScript-heavy pages.
//!
//! The proxy renders the page and answers with plain text of the form
//! `Title: ...`, `URL Source: ...`, `Markdown Content:` followed by the body.

use super::Strategy;
use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::tools::clean::truncate_chars;
use crate::tools::extract::org_from_host;
use crate::tools::fetch::HttpFetcher;
use crate::tools::scrape::MAX_TEXT_CHARS;
use crate::types::{Attempt, PartialJob, RawExtraction, DEFAULT_TITLE};
use async_trait::async_trait;
use tracing::warn;
use url::Url;

const TITLE_PREFIX: &str = "Title:";
const CONTENT_MARKER: &str = "Markdown Content:";
const SOURCE_MARKER: &str = "URL Source:";

pub struct ReaderStrategy {
    fetcher: HttpFetcher,
    base: String,
}

impl ReaderStrategy {
    pub fn new(cfg: &ScrapeConfig) -> Result<Self> {
        Ok(Self {
            fetcher: HttpFetcher::new(cfg, cfg.render_timeout())?,
            base: cfg.endpoints.reader.clone(),
        })
    }
}

#[async_trait]
impl Strategy for ReaderStrategy {
    fn name(&self) -> &'static str {
        "reader"
    }

    /// Always succeeds; a proxy failure yields a placeholder pointing at the
    /// listing itself.
    async fn attempt(&self, url: &Url) -> Attempt {
        let proxied = format!("{}{}", self.base, url);
        let headers = [("accept", "text/plain"), ("x-return-format", "markdown")];
        match self.fetcher.get_text(&proxied, &headers).await {
            Ok(text) => Attempt::Success(parse_rendered(&text, url)),
            Err(e) => {
                warn!(url = %url, error = %e, "reader fetch failed, using placeholder");
                Attempt::Success(placeholder(url))
            }
        }
    }
}

/// Split proxy output into title and body.
///
/// The body starts after `Markdown Content:`, else after `URL Source:`, else
/// after the first line.
pub fn parse_rendered(text: &str, url: &Url) -> RawExtraction {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let marker = |m: &str| lines.iter().position(|line| line.starts_with(m));
    let body_start = marker(CONTENT_MARKER)
        .or_else(|| marker(SOURCE_MARKER))
        .map_or(1, |i| i + 1);

    let title = lines[..body_start.min(lines.len())]
        .iter()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE);

    let body = lines.get(body_start..).unwrap_or_default().join("\n");
    RawExtraction::new(
        fields(title, url),
        truncate_chars(&body, MAX_TEXT_CHARS),
    )
}

/// Record used when the proxy cannot be reached.
pub fn placeholder(url: &Url) -> RawExtraction {
    RawExtraction::new(
        fields(DEFAULT_TITLE, url),
        format!("See full listing at: {url}"),
    )
}

fn fields(title: &str, url: &Url) -> PartialJob {
    PartialJob {
        title: Some(title.to_string()),
        organization_name: Some(org_from_host(url)),
        application_url: Some(url.to_string()),
        ..Default::default()
    }
}
