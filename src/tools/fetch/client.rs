use crate::error::*;
use reqwest::{redirect, Client};
use std::time::Duration;

const REDIRECT_LIMIT: usize = 10;
const POOL_IDLE_TIMEOUT_SEC: u64 = 90;

/// Build a reqwest client whose every request is bounded by `timeout`.
pub(crate) fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(timeout)
        .connect_timeout(timeout)
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .build()
        .map_err(|e| ScrapeError::Config(format!("failed to build http client: {e}")))
}
