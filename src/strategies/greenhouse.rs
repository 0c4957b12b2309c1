//! Greenhouse job boards via the public boards API.
//!
//! `https://boards.greenhouse.io/<company>/jobs/<id>` maps to
//! `GET {api}/<company>` (board name) and `GET {api}/<company>/jobs/<id>`.

use super::{join_url, path_segments, Strategy};
use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::tools::clean::decode_html_entities;
use crate::tools::extract::{json_str, org_from_slug};
use crate::tools::fetch::HttpFetcher;
use crate::tools::scrape::html_to_text;
use crate::types::{Attempt, PartialJob, RawExtraction};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

const HOSTS: [&str; 4] = [
    "boards.greenhouse.io",
    "boards.eu.greenhouse.io",
    "job-boards.greenhouse.io",
    "job-boards.eu.greenhouse.io",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreenhouseTarget {
    pub company: String,
    pub job_id: String,
    pub eu: bool,
}

/// Pure URL-shape test: known board host and `/<company>/jobs/<id>`.
pub fn match_url(url: &Url) -> Option<GreenhouseTarget> {
    let host = url.host_str()?;
    if !HOSTS.contains(&host) {
        return None;
    }
    match path_segments(url).as_slice() {
        [company, "jobs", job_id, ..] => Some(GreenhouseTarget {
            company: company.to_string(),
            job_id: job_id.to_string(),
            eu: host.contains(".eu."),
        }),
        _ => None,
    }
}

/// Map a job payload to a raw extraction. `content` arrives entity-escaped.
pub fn map_posting(job: &Value, organization: String, url: &Url) -> RawExtraction {
    let description = job
        .get("content")
        .and_then(Value::as_str)
        .map(|html| html_to_text(&decode_html_entities(html)))
        .unwrap_or_default();

    let partial = PartialJob {
        title: json_str(job, "title"),
        organization_name: Some(organization),
        location: job.get("location").and_then(|loc| json_str(loc, "name")),
        application_url: Some(url.to_string()),
        ..Default::default()
    };
    RawExtraction::new(partial, description)
}

pub struct GreenhouseStrategy {
    fetcher: HttpFetcher,
    api: String,
    eu_api: String,
}

impl GreenhouseStrategy {
    pub fn new(cfg: &ScrapeConfig) -> Result<Self> {
        Ok(Self {
            fetcher: HttpFetcher::new(cfg, cfg.api_timeout())?,
            api: cfg.endpoints.greenhouse_api.clone(),
            eu_api: cfg.endpoints.greenhouse_eu_api.clone(),
        })
    }

    async fn board_name(&self, base: &str, company: &str) -> Option<String> {
        match self.fetcher.get_json(&join_url(base, &[company])).await {
            Ok(board) => json_str(&board, "name"),
            Err(e) => {
                debug!(company = %company, error = %e, "greenhouse board lookup failed");
                None
            }
        }
    }
}

#[async_trait]
impl Strategy for GreenhouseStrategy {
    fn name(&self) -> &'static str {
        "greenhouse"
    }

    async fn attempt(&self, url: &Url) -> Attempt {
        let Some(target) = match_url(url) else {
            return Attempt::NotApplicable;
        };
        let base = if target.eu { &self.eu_api } else { &self.api };

        let organization = self
            .board_name(base, &target.company)
            .await
            .unwrap_or_else(|| org_from_slug(&target.company));

        let job_url = join_url(base, &[&target.company, "jobs", &target.job_id]);
        match self.fetcher.get_json(&job_url).await {
            Ok(job) => Attempt::Success(map_posting(&job, organization, url)),
            Err(e) => {
                debug!(url = %url, error = %e, "greenhouse api failed");
                Attempt::failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;
    use httpmock::prelude::*;
    use serde_json::json;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn matches_board_urls() {
        let t = match_url(&url("https://boards.greenhouse.io/acme/jobs/12345")).unwrap();
        assert_eq!(t.company, "acme");
        assert_eq!(t.job_id, "12345");
        assert!(!t.eu);

        let t = match_url(&url("https://job-boards.eu.greenhouse.io/acme/jobs/9?gh_src=x"))
            .unwrap();
        assert!(t.eu);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(match_url(&url("https://boards.greenhouse.io/acme")).is_none());
        assert!(match_url(&url("https://boards.greenhouse.io/acme/departments/1")).is_none());
        assert!(match_url(&url("https://greenhouse.io/acme/jobs/1")).is_none());
        assert!(match_url(&url("https://jobs.lever.co/acme/abc")).is_none());
    }

    #[test]
    fn maps_payload_deterministically() {
        let job = json!({
            "title": " Backend Engineer ",
            "location": {"name": "Remote"},
            "content": "&lt;p&gt;Build things&lt;/p&gt;&lt;p&gt;Ship &amp;amp; iterate&lt;/p&gt;"
        });
        let target = url("https://boards.greenhouse.io/acme/jobs/1");
        let first = map_posting(&job, "Acme Inc".into(), &target);
        let second = map_posting(&job, "Acme Inc".into(), &target);

        assert_eq!(first, second);
        assert_eq!(first.job.title.as_deref(), Some("Backend Engineer"));
        assert_eq!(first.job.location.as_deref(), Some("Remote"));
        assert_eq!(first.job.job_type, None);
        assert_eq!(first.description, "Build things\nShip & iterate");
    }

    #[tokio::test]
    async fn non_matching_url_makes_no_request() {
        let server = MockServer::start_async().await;
        let any = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(json!({}));
            })
            .await;

        let cfg = ScrapeConfig::default().with_endpoints(Endpoints {
            greenhouse_api: server.url("/v1/boards"),
            ..Endpoints::default()
        });
        let strategy = GreenhouseStrategy::new(&cfg).unwrap();
        let attempt = strategy.attempt(&url("https://example.com/jobs/1")).await;

        assert_eq!(attempt, Attempt::NotApplicable);
        assert_eq!(any.hits_async().await, 0);
    }

    #[tokio::test]
    async fn board_lookup_failure_falls_back_to_slug() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/boards/big-co");
                then.status(500);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/boards/big-co/jobs/7");
                then.status(200).json_body(json!({"title": "SRE"}));
            })
            .await;

        let cfg = ScrapeConfig::default().with_endpoints(Endpoints {
            greenhouse_api: server.url("/v1/boards"),
            ..Endpoints::default()
        });
        let strategy = GreenhouseStrategy::new(&cfg).unwrap();
        let attempt = strategy
            .attempt(&url("https://boards.greenhouse.io/big-co/jobs/7"))
            .await;

        match attempt {
            Attempt::Success(raw) => {
                assert_eq!(raw.job.organization_name.as_deref(), Some("Big Co"));
                assert_eq!(raw.job.title.as_deref(), Some("SRE"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn job_lookup_failure_is_failed_not_fatal() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/v1/boards/acme");
                then.status(503);
            })
            .await;

        let cfg = ScrapeConfig::default().with_endpoints(Endpoints {
            greenhouse_api: server.url("/v1/boards"),
            ..Endpoints::default()
        });
        let strategy = GreenhouseStrategy::new(&cfg).unwrap();
        let attempt = strategy
            .attempt(&url("https://boards.greenhouse.io/acme/jobs/1"))
            .await;
        assert!(matches!(attempt, Attempt::Failed(_)));
    }
}
