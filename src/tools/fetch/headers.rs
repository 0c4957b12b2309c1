use crate::{config::ScrapeConfig, error::*};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

/// Outbound headers shared by every strategy: configured defaults plus the
/// identifying User-Agent.
pub(crate) fn headers_for_config(cfg: &ScrapeConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (k, v) in &cfg.default_headers.0 {
        let name = HeaderName::from_bytes(k.as_bytes())
            .map_err(|e| ScrapeError::Config(format!("invalid header name {k}: {e}")))?;
        let value = HeaderValue::from_str(v)
            .map_err(|e| ScrapeError::Config(format!("invalid header value for {k}: {e}")))?;
        headers.insert(name, value);
    }
    let ua = HeaderValue::from_str(&cfg.user_agent)
        .map_err(|e| ScrapeError::Config(format!("invalid user agent: {e}")))?;
    headers.insert(USER_AGENT, ua);
    Ok(headers)
}

/// Per-request overrides on top of the shared headers.
pub(crate) fn with_overrides(base: &HeaderMap, extra: &[(&'static str, &str)]) -> HeaderMap {
    let mut headers = base.clone();
    for (k, v) in extra {
        if let Ok(value) = HeaderValue::from_str(v) {
            headers.insert(HeaderName::from_static(*k), value);
        }
    }
    headers
}
