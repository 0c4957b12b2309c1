//! One fetch of the posting page, shared by the JSON-LD, LinkedIn and
//! heuristic extractors.

use super::{heuristic, linkedin, structured, Strategy};
use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::tools::fetch::HttpFetcher;
use crate::types::Attempt;
use async_trait::async_trait;
use scraper::Html;
use tracing::debug;
use url::Url;

pub struct PageStrategy {
    fetcher: HttpFetcher,
}

impl PageStrategy {
    pub fn new(cfg: &ScrapeConfig) -> Result<Self> {
        Ok(Self {
            fetcher: HttpFetcher::new(cfg, cfg.api_timeout())?,
        })
    }
}

/// JSON-LD first, then LinkedIn top-card markup on LinkedIn job URLs, then
/// heuristics, all over the same parsed document.
pub fn extract_from_html(html: &str, url: &Url) -> Attempt {
    let doc = Html::parse_document(html);
    match structured::extract(&doc, url) {
        Attempt::Success(raw) => return Attempt::Success(raw),
        Attempt::Failed(reason) => debug!(url = %url, reason = %reason, "no usable JSON-LD"),
        Attempt::NotApplicable => {}
    }
    if linkedin::match_url(url) {
        match linkedin::extract(&doc, url) {
            Attempt::Success(raw) => return Attempt::Success(raw),
            Attempt::Failed(reason) => {
                debug!(url = %url, reason = %reason, "no LinkedIn top card")
            }
            Attempt::NotApplicable => {}
        }
    }
    heuristic::extract(&doc, url)
}

#[async_trait]
impl Strategy for PageStrategy {
    fn name(&self) -> &'static str {
        "page"
    }

    async fn attempt(&self, url: &Url) -> Attempt {
        match self.fetcher.get_text(url.as_str(), &[]).await {
            Ok(html) => extract_from_html(&html, url),
            Err(e) => {
                debug!(url = %url, error = %e, "page fetch failed");
                Attempt::failed(e.to_string())
            }
        }
    }
}
