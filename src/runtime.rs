//! Runtime behind the blocking entrypoints.

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .thread_name("jobscrape-worker")
        .enable_all()
        .build()
        .expect("failed to build jobscrape runtime")
});

/// Drive `future` to completion on the shared multi-thread runtime.
///
/// Must not be called from inside another tokio runtime; async callers use
/// the `async` entrypoints instead.
pub fn block_on<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    RUNTIME.block_on(future)
}
