use crate::config::ScrapeConfig;
use crate::engine::{normalize_url, Engine};
use crate::services::log::ActivityLogger;
use crate::services::store::JobStore;
use crate::{error::*, runtime, types::*};
use std::time::Instant;

// Activity logging never breaks a run.
fn log_info(logger: Option<&ActivityLogger>, host: Option<&str>, event: &str, details: &str) {
    if let Some(logger) = logger {
        let _ = logger.info(host, event, Some(details));
    }
}

fn log_error(logger: Option<&ActivityLogger>, host: Option<&str>, event: &str, details: &str) {
    if let Some(logger) = logger {
        let _ = logger.error(host, event, Some(details));
    }
}

/// Logger at the default location, or none when the home directory is unusable.
fn default_logger() -> Option<ActivityLogger> {
    ActivityLogger::new().ok()
}

fn host_of(url: &str) -> Option<String> {
    normalize_url(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

/* ------------ extraction ------------ */

/// Run `engine` on `url` and record the outcome in the default activity log.
pub async fn scrape_url_with(engine: &Engine, url: &str) -> Result<Scraped> {
    scrape_url_logged(engine, url, default_logger().as_ref()).await
}

/// Run `engine` on `url`, recording the outcome in `logger` when given.
pub async fn scrape_url_logged(
    engine: &Engine,
    url: &str,
    logger: Option<&ActivityLogger>,
) -> Result<Scraped> {
    let start_time = Instant::now();
    let host = host_of(url);
    let result = engine.scrape(url).await;
    let elapsed = start_time.elapsed().as_millis();

    match &result {
        Ok(scraped) => {
            let details = format!("{} in {elapsed}ms", scraped.strategy);
            log_info(logger, host.as_deref(), "scrape_url", &details);
        }
        Err(e) => {
            let details = format!("failed in {elapsed}ms: {e}");
            log_error(logger, host.as_deref(), "scrape_url", &details);
        }
    }
    result
}

/// Extract one posting with the standard strategy chain.
///
/// # Examples
/// ```no_run
/// use jobscrape::{api, config::ScrapeConfig};
///
/// # async fn example() -> jobscrape::Result<()> {
/// let cfg = ScrapeConfig::default();
/// let scraped = api::scrape_url("https://jobs.lever.co/acme/123", &cfg).await?;
/// println!("{} via {}", scraped.record.title, scraped.strategy);
/// # Ok(())
/// # }
/// ```
pub async fn scrape_url(url: &str, cfg: &ScrapeConfig) -> Result<Scraped> {
    let engine = Engine::new(cfg)?;
    scrape_url_with(&engine, url).await
}

/// Blocking form of [`scrape_url`] for synchronous callers.
pub fn scrape_url_blocking(url: &str, cfg: &ScrapeConfig) -> Result<Scraped> {
    runtime::block_on(scrape_url(url, cfg))
}

/* ------------ persistence ------------ */

/// Extract, then hand the record and its body to `store`. Nothing is
/// persisted when extraction fails.
pub async fn scrape_and_store<S: JobStore + ?Sized>(
    url: &str,
    cfg: &ScrapeConfig,
    store: &S,
) -> Result<StoredJob> {
    let engine = Engine::new(cfg)?;
    scrape_and_store_with(&engine, url, store, default_logger().as_ref()).await
}

/// [`scrape_and_store`] over a prepared engine and an explicit logger.
pub async fn scrape_and_store_with<S: JobStore + ?Sized>(
    engine: &Engine,
    url: &str,
    store: &S,
    logger: Option<&ActivityLogger>,
) -> Result<StoredJob> {
    let scraped = scrape_url_logged(engine, url, logger).await?;
    store_scraped_logged(scraped, store, logger)
}

pub fn store_scraped<S: JobStore + ?Sized>(scraped: Scraped, store: &S) -> Result<StoredJob> {
    store_scraped_logged(scraped, store, default_logger().as_ref())
}

pub fn store_scraped_logged<S: JobStore + ?Sized>(
    scraped: Scraped,
    store: &S,
    logger: Option<&ActivityLogger>,
) -> Result<StoredJob> {
    let host = host_of(&scraped.record.application_url);
    match store.persist(&scraped.record, scraped.body()) {
        Ok(path) => {
            log_info(logger, host.as_deref(), "persist", &path.display().to_string());
            Ok(StoredJob { scraped, path })
        }
        Err(e) => {
            log_error(logger, host.as_deref(), "persist", &e.to_string());
            Err(e)
        }
    }
}
