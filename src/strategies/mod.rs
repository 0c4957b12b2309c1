//! Extraction strategies, cheapest first.
//!
//! Each strategy answers one question: does this URL (or page) have the shape
//! I understand, and if so, what can I pull out of it? Vendor strategies test
//! the URL shape before touching the network so a non-matching URL costs
//! nothing.

pub mod greenhouse;
pub mod heuristic;
pub mod lever;
pub mod linkedin;
pub mod page;
pub mod reader;
pub mod structured;

pub use greenhouse::GreenhouseStrategy;
pub use lever::LeverStrategy;
pub use page::PageStrategy;
pub use reader::ReaderStrategy;

use crate::{config::ScrapeConfig, error::*, types::Attempt};
use async_trait::async_trait;
use url::Url;

#[async_trait]
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Never errors: network and parse problems become [`Attempt::Failed`].
    async fn attempt(&self, url: &Url) -> Attempt;
}

/// The standard chain: Greenhouse, Lever, page (JSON-LD then heuristics),
/// rendering proxy.
pub fn default_chain(cfg: &ScrapeConfig) -> Result<Vec<Box<dyn Strategy>>> {
    Ok(vec![
        Box::new(GreenhouseStrategy::new(cfg)?),
        Box::new(LeverStrategy::new(cfg)?),
        Box::new(PageStrategy::new(cfg)?),
        Box::new(ReaderStrategy::new(cfg)?),
    ])
}

/// Non-empty path segments of a URL.
pub(crate) fn path_segments(url: &Url) -> Vec<&str> {
    url.path_segments()
        .map(|segs| segs.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

/// Join an API base and path parts with single slashes.
pub(crate) fn join_url(base: &str, parts: &[&str]) -> String {
    let mut out = base.trim_end_matches('/').to_string();
    for part in parts {
        out.push('/');
        out.push_str(part.trim_matches('/'));
    }
    out
}
