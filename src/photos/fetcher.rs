//! Page Fetcher
//!
//! Cache-first access to photo pages.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::{normalize_page, CancelSignal, PhotoSource};
use crate::cache::{CacheStats, PageCache};
use crate::error::{AppError, Result};
use crate::models::PhotoPage;

/// Serves photo pages from the page cache, falling back to a [`PhotoSource`].
///
/// One instance is built at startup and shared by every request handler.
pub struct PageFetcher {
    source: Arc<dyn PhotoSource>,
    cache: RwLock<PageCache>,
}

impl PageFetcher {
    pub fn new(source: Arc<dyn PhotoSource>, cache_capacity: usize) -> Self {
        Self {
            source,
            cache: RwLock::new(PageCache::new(cache_capacity)),
        }
    }

    /// Returns the photos for `page`. `None` and `Some(0)` mean page 1.
    ///
    /// A cached page is returned without touching the network, even if
    /// `cancel` has already fired. On a miss the upstream call races `cancel`
    /// and the validated result is cached before it is returned.
    pub async fn fetch(&self, page: Option<u32>, cancel: &CancelSignal) -> Result<PhotoPage> {
        let page = normalize_page(page);

        let cached = self.cache.write().await.get(page);
        if let Some(photos) = cached {
            info!(page, origin = "cache", "Fetched photos (page: {}) from cache", page);
            return Ok(photos);
        }

        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AppError::Cancelled),
            result = self.source.fetch_page(page) => result,
        };

        let photos = match fetched {
            Ok(photos) => photos,
            Err(AppError::Cancelled) => {
                debug!(page, "Fetch cancelled");
                return Err(AppError::Cancelled);
            }
            Err(e) => {
                warn!(page, error = %e, "Failed to fetch photos");
                return Err(e);
            }
        };

        let photos = self.cache.write().await.insert(page, Arc::new(photos));
        info!(page, origin = "network", "Fetched photos (page: {}) from network", page);

        Ok(photos)
    }

    /// Warms the cache for `page` unless it is already cached.
    ///
    /// Failures are logged and dropped; a later request simply retries.
    pub async fn prefetch(&self, page: u32) {
        if self.is_cached(page).await {
            debug!(page, "Prefetch skipped, page already cached");
            return;
        }

        if let Err(e) = self.fetch(Some(page), &CancelSignal::never()).await {
            warn!(page, error = %e, "Prefetch failed");
        }
    }

    pub async fn is_cached(&self, page: u32) -> bool {
        self.cache.read().await.contains(page)
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    pub async fn cache_capacity(&self) -> usize {
        self.cache.read().await.capacity()
    }
}
