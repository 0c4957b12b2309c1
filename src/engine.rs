use crate::config::ScrapeConfig;
use crate::strategies::{default_chain, Strategy};
use crate::tools::extract::org_from_host;
use crate::types::*;
use crate::{error::*, tools::clean::clean_line};
use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info, warn};
use url::Url;

/// Ordered fallback over extraction strategies.
///
/// Strategies run one at a time; the first [`Attempt::Success`] wins and is
/// normalized into a complete [`JobRecord`]. The engine holds no per-run
/// state, so one instance can serve concurrent callers.
pub struct Engine {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Engine {
    /// Engine over the standard chain built from `cfg`.
    pub fn new(cfg: &ScrapeConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::with_strategies(default_chain(cfg)?))
    }

    pub fn with_strategies(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run the chain for `raw_url`. Fails early on a malformed URL and with
    /// [`ScrapeError::Exhausted`] when nothing succeeds.
    pub async fn scrape(&self, raw_url: &str) -> Result<Scraped> {
        let url = normalize_url(raw_url)?;

        for strategy in &self.strategies {
            match strategy.attempt(&url).await {
                Attempt::Success(raw) => {
                    info!(url = %url, strategy = strategy.name(), "extracted");
                    let record = normalize(raw.job, &raw.description, &url, Utc::now());
                    return Ok(Scraped {
                        record,
                        strategy: strategy.name().to_string(),
                    });
                }
                Attempt::NotApplicable => {
                    debug!(url = %url, strategy = strategy.name(), "not applicable");
                }
                Attempt::Failed(reason) => {
                    warn!(
                        url = %url,
                        strategy = strategy.name(),
                        reason = %reason,
                        "strategy failed"
                    );
                }
            }
        }

        Err(ScrapeError::Exhausted {
            url: url.to_string(),
        })
    }
}

/// Trim, default the scheme to `https://`, and require a host.
///
/// # Examples
/// ```
/// use jobscrape::engine::normalize_url;
///
/// let url = normalize_url("  jobs.lever.co/acme/123 ").unwrap();
/// assert_eq!(url.as_str(), "https://jobs.lever.co/acme/123");
/// ```
pub fn normalize_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScrapeError::InvalidUrl(raw.to_string()));
    }
    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|_| ScrapeError::InvalidUrl(raw.to_string()))?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(ScrapeError::MissingHost(raw.to_string())),
    }
}

/// Fill every missing field of a partial record.
///
/// Total and idempotent: feeding a normalized record back in (as a
/// [`PartialJob`] plus its description) returns it unchanged. `now` is only
/// used when `created_at` is absent and is truncated to whole seconds.
pub fn normalize(
    partial: PartialJob,
    description: &str,
    url: &Url,
    now: DateTime<Utc>,
) -> JobRecord {
    let text = |v: Option<String>| v.unwrap_or_default();
    let non_empty = |v: Option<String>| v.map(|s| clean_line(&s)).filter(|s| !s.is_empty());

    let description = description.trim();
    let description = if description.is_empty() {
        format!("See full listing at: {url}")
    } else {
        description.to_string()
    };

    JobRecord {
        title: non_empty(partial.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        organization_name: non_empty(partial.organization_name)
            .unwrap_or_else(|| org_from_host(url)),
        organization_logo: text(partial.organization_logo),
        location: text(partial.location),
        job_type: non_empty(partial.job_type).unwrap_or_else(|| DEFAULT_JOB_TYPE.to_string()),
        salary_range: text(partial.salary_range),
        expires_at: text(partial.expires_at),
        application_email: text(partial.application_email),
        application_url: non_empty(partial.application_url).unwrap_or_else(|| url.to_string()),
        application_instructions: text(partial.application_instructions),
        requirements: text(partial.requirements),
        description,
        created_at: partial.created_at.unwrap_or_else(|| now.trunc_subsecs(0)),
        views_count: partial.views_count.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn url() -> Url {
        Url::parse("https://www.acme.com/jobs/1").unwrap()
    }

    #[test]
    fn normalize_url_adds_scheme_and_trims() {
        assert_eq!(
            normalize_url(" boards.greenhouse.io/acme/jobs/1 ").unwrap().as_str(),
            "https://boards.greenhouse.io/acme/jobs/1"
        );
        assert_eq!(
            normalize_url("http://example.com/x").unwrap().as_str(),
            "http://example.com/x"
        );
    }

    #[test]
    fn normalize_url_rejects_garbage() {
        assert!(matches!(normalize_url("   "), Err(ScrapeError::InvalidUrl(_))));
        assert!(matches!(normalize_url("https://"), Err(ScrapeError::InvalidUrl(_))));
        assert!(matches!(
            normalize_url("http:// spaced host"),
            Err(ScrapeError::InvalidUrl(_))
        ));
    }

    #[test]
    fn normalize_fills_defaults() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let record = normalize(PartialJob::default(), "  ", &url(), now);

        assert_eq!(record.title, DEFAULT_TITLE);
        assert_eq!(record.organization_name, "Acme");
        assert_eq!(record.job_type, DEFAULT_JOB_TYPE);
        assert_eq!(record.application_url, "https://www.acme.com/jobs/1");
        assert_eq!(record.description, "See full listing at: https://www.acme.com/jobs/1");
        assert_eq!(record.views_count, 0);
        assert_eq!(record.location, "");
        assert_eq!(record.created_at_iso(), "2024-05-01T12:30:00Z");
    }

    #[test]
    fn normalize_is_idempotent() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let partial = PartialJob {
            title: Some(" Engineer ".into()),
            location: Some("Remote".into()),
            salary_range: Some("USD 1–2".into()),
            ..Default::default()
        };
        let once = normalize(partial, "Build things", &url(), now);
        let later = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let twice = normalize(once.clone().into(), &once.description, &url(), later);

        assert_eq!(once, twice);
        assert_eq!(once.title, "Engineer");
    }

    #[test]
    fn created_at_drops_subseconds() {
        let now = Utc.timestamp_opt(1_700_000_000, 987_654_321).unwrap();
        let record = normalize(PartialJob::default(), "x", &url(), now);
        assert_eq!(record.created_at.timestamp_subsec_nanos(), 0);
    }
}
