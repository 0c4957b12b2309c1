use crate::{error::*, types::HeaderSet};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "jobscrape/0.1";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_RENDER_TIMEOUT_MS: u64 = 45_000;

/// Base URLs of the services the strategies talk to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub greenhouse_api: String,
    pub greenhouse_eu_api: String,
    pub lever_api: String,
    pub lever_eu_api: String,
    /// Rendering proxy; the target URL is appended verbatim.
    pub reader: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            greenhouse_api: "https://boards-api.greenhouse.io/v1/boards".into(),
            greenhouse_eu_api: "https://boards-api.eu.greenhouse.io/v1/boards".into(),
            lever_api: "https://api.lever.co/v0/postings".into(),
            lever_eu_api: "https://api.eu.lever.co/v0/postings".into(),
            reader: "https://r.jina.ai/".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    pub user_agent: String,
    pub default_headers: HeaderSet,
    /// Vendor API and plain page fetches.
    pub api_timeout_ms: u64,
    /// Rendering proxy; slower than everything else.
    pub render_timeout_ms: u64,
    pub endpoints: Endpoints,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.into(),
            default_headers: HeaderSet::empty()
                .with("Accept", "text/html,application/xhtml+xml,application/json;q=0.9,*/*;q=0.8")
                .with("Accept-Language", "en-US,en;q=0.9"),
            api_timeout_ms: DEFAULT_API_TIMEOUT_MS,
            render_timeout_ms: DEFAULT_RENDER_TIMEOUT_MS,
            endpoints: Endpoints::default(),
        }
    }
}

impl ScrapeConfig {
    /// Defaults overridden by `JOBSCRAPE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(ua) = lookup("JOBSCRAPE_USER_AGENT") {
            cfg.user_agent = ua;
        }
        if let Some(ms) = lookup("JOBSCRAPE_API_TIMEOUT_MS") {
            cfg.api_timeout_ms = parse_ms("JOBSCRAPE_API_TIMEOUT_MS", &ms)?;
        }
        if let Some(ms) = lookup("JOBSCRAPE_RENDER_TIMEOUT_MS") {
            cfg.render_timeout_ms = parse_ms("JOBSCRAPE_RENDER_TIMEOUT_MS", &ms)?;
        }
        if let Some(reader) = lookup("JOBSCRAPE_READER_URL") {
            cfg.endpoints.reader = reader;
        }
        if let Some(base) = lookup("JOBSCRAPE_GREENHOUSE_API") {
            cfg.endpoints.greenhouse_api = base;
        }
        if let Some(base) = lookup("JOBSCRAPE_LEVER_API") {
            cfg.endpoints.lever_api = base;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn with_api_timeout_ms(mut self, ms: u64) -> Self {
        self.api_timeout_ms = ms;
        self
    }

    pub fn with_render_timeout_ms(mut self, ms: u64) -> Self {
        self.render_timeout_ms = ms;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_ms)
    }

    pub fn render_timeout(&self) -> Duration {
        Duration::from_millis(self.render_timeout_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(ScrapeError::Config("user agent cannot be empty".into()));
        }
        if self.api_timeout_ms == 0 || self.render_timeout_ms == 0 {
            return Err(ScrapeError::Config("timeouts must be greater than zero".into()));
        }
        Ok(())
    }
}

fn parse_ms(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| ScrapeError::Config(format!("{key}: {e}")))
}
