//! Next-page Prefetch Task
//!
//! After a page request is served, the client will most likely ask for
//! `nextPage` next. Fetching it in the background means that request is
//! answered from the cache.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::photos::PageFetcher;

/// Spawns a detached task that warms the cache for `page`.
///
/// The task is not tied to any request's cancellation signal, so it keeps
/// running after the response that triggered it has been sent.
///
/// # Example
/// ```ignore
/// let handle = spawn_prefetch_task(state.fetcher.clone(), result.next_page);
/// ```
pub fn spawn_prefetch_task(fetcher: Arc<PageFetcher>, page: u32) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(page, "Prefetching next page");
        fetcher.prefetch(page).await;
    })
}
