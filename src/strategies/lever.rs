//! Lever postings via the public postings API.

use super::{join_url, path_segments, Strategy};
use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::tools::extract::{json_str, org_from_slug};
use crate::tools::fetch::HttpFetcher;
use crate::tools::scrape::html_to_text;
use crate::types::{Attempt, PartialJob, RawExtraction};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

const HOST: &str = "jobs.lever.co";
const EU_HOST: &str = "jobs.eu.lever.co";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeverTarget {
    pub company: String,
    pub posting_id: String,
    pub eu: bool,
}

/// Pure URL-shape test: `jobs.lever.co/<company>/<posting-id>[/apply]`.
pub fn match_url(url: &Url) -> Option<LeverTarget> {
    let host = url.host_str()?;
    if host != HOST && host != EU_HOST {
        return None;
    }
    match path_segments(url).as_slice() {
        [company, posting_id, ..] => Some(LeverTarget {
            company: company.to_string(),
            posting_id: posting_id.to_string(),
            eu: host == EU_HOST,
        }),
        _ => None,
    }
}

/// Map a posting payload. The description is assembled from `description`,
/// each `lists` entry as a heading plus its items, then `additional`.
pub fn map_posting(posting: &Value, company: &str, url: &Url) -> RawExtraction {
    let mut html = vec![str_field(posting, "description")];
    if let Some(lists) = posting.get("lists").and_then(Value::as_array) {
        for list in lists {
            html.push(format!("<h3>{}</h3>", str_field(list, "text")));
            html.push(str_field(list, "content"));
        }
    }
    html.push(str_field(posting, "additional"));

    let categories = posting.get("categories").cloned().unwrap_or(Value::Null);
    let partial = PartialJob {
        title: json_str(posting, "text"),
        organization_name: Some(org_from_slug(company)),
        location: json_str(&categories, "location"),
        job_type: json_str(&categories, "commitment").map(|c| c.to_lowercase()),
        application_url: Some(url.to_string()),
        ..Default::default()
    };
    RawExtraction::new(partial, html_to_text(&html.join("\n")))
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub struct LeverStrategy {
    fetcher: HttpFetcher,
    api: String,
    eu_api: String,
}

impl LeverStrategy {
    pub fn new(cfg: &ScrapeConfig) -> Result<Self> {
        Ok(Self {
            fetcher: HttpFetcher::new(cfg, cfg.api_timeout())?,
            api: cfg.endpoints.lever_api.clone(),
            eu_api: cfg.endpoints.lever_eu_api.clone(),
        })
    }
}

#[async_trait]
impl Strategy for LeverStrategy {
    fn name(&self) -> &'static str {
        "lever"
    }

    async fn attempt(&self, url: &Url) -> Attempt {
        let Some(target) = match_url(url) else {
            return Attempt::NotApplicable;
        };
        let base = if target.eu { &self.eu_api } else { &self.api };
        let api_url = join_url(base, &[&target.company, &target.posting_id]);

        match self.fetcher.get_json(&api_url).await {
            Ok(posting) => Attempt::Success(map_posting(&posting, &target.company, url)),
            Err(e) => {
                debug!(url = %url, error = %e, "lever api failed");
                Attempt::failed(e.to_string())
            }
        }
    }
}
