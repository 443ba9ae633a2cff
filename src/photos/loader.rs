//! Pagination Loader
//!
//! Fans out one fetch per viewed page and hands back the pending results
//! without joining them, so each page can be rendered as soon as it settles.

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::{normalize_page, CancelSignal, PageFetcher};
use crate::error::{AppError, Result};
use crate::models::PhotoPage;

/// A page number paired with its in-flight fetch.
#[derive(Debug)]
pub struct PendingPage {
    page: u32,
    handle: JoinHandle<Result<PhotoPage>>,
}

impl PendingPage {
    pub fn page(&self) -> u32 {
        self.page
    }

    /// True once the fetch has settled, successfully or not.
    pub fn is_settled(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for this page's fetch.
    pub async fn resolve(self) -> Result<PhotoPage> {
        let page = self.page;
        match self.handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(AppError::Cancelled),
            Err(e) => Err(AppError::Internal(format!("fetch task for page {page} failed: {e}"))),
        }
    }
}

/// Output of [`PaginationLoader::load`].
#[derive(Debug)]
pub struct LoaderResult {
    /// Pages `1..=requested`, ascending
    pub pages: Vec<PendingPage>,
    /// Always `requested + 1`; the loader does not detect the end of the data
    pub next_page: u32,
}

impl LoaderResult {
    /// Waits for every page in order.
    pub async fn resolve_all(self) -> Vec<(u32, Result<PhotoPage>)> {
        let mut resolved = Vec::with_capacity(self.pages.len());
        for pending in self.pages {
            let page = pending.page();
            resolved.push((page, pending.resolve().await));
        }
        resolved
    }
}

/// Builds the list of pages to show for a request.
#[derive(Clone)]
pub struct PaginationLoader {
    fetcher: Arc<PageFetcher>,
}

impl PaginationLoader {
    pub fn new(fetcher: Arc<PageFetcher>) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &Arc<PageFetcher> {
        &self.fetcher
    }

    /// Starts fetches for pages `1..=requested` and returns immediately.
    ///
    /// `None` and `Some(0)` mean 1. Each fetch runs as its own task and
    /// observes `cancel`. Must be called from within a tokio runtime.
    pub fn load(&self, requested: Option<u32>, cancel: &CancelSignal) -> LoaderResult {
        let requested = normalize_page(requested);

        let pages = (1..=requested)
            .map(|page| {
                let fetcher = Arc::clone(&self.fetcher);
                let cancel = cancel.clone();
                let handle = tokio::spawn(async move { fetcher.fetch(Some(page), &cancel).await });
                PendingPage { page, handle }
            })
            .collect();

        LoaderResult {
            pages,
            next_page: requested.saturating_add(1),
        }
    }
}
