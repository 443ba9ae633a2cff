//! Page Cache Module
//!
//! HashMap storage for fetched photo pages with LRU eviction. Entries never
//! expire; they leave only under capacity pressure.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheStats, LruTracker};
use crate::models::PhotoPage;

// == Page Cache ==
/// Capacity-bounded map from page number to its photos.
#[derive(Debug)]
pub struct PageCache {
    entries: HashMap<u32, PhotoPage>,
    lru: LruTracker<u32>,
    stats: CacheStats,
    capacity: usize,
}

impl PageCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` pages (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity: capacity.max(1),
        }
    }

    // == Get ==
    /// Looks up a page, recording a hit or miss and refreshing its recency.
    pub fn get(&mut self, page: u32) -> Option<PhotoPage> {
        match self.entries.get(&page) {
            Some(photos) => {
                let photos = PhotoPage::clone(photos);
                self.stats.record_hit();
                self.lru.touch(page);
                Some(photos)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores a page and returns the value now cached for it.
    ///
    /// A page that is already cached keeps its first value; the new one is
    /// discarded. Inserting a new page into a full cache evicts the least
    /// recently used page first.
    pub fn insert(&mut self, page: u32, photos: PhotoPage) -> PhotoPage {
        if let Some(existing) = self.entries.get(&page) {
            let existing = PhotoPage::clone(existing);
            self.lru.touch(page);
            return existing;
        }

        if self.entries.len() >= self.capacity {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(page = evicted, "Evicted page from cache");
            }
        }

        self.entries.insert(page, PhotoPage::clone(&photos));
        self.lru.touch(page);
        self.stats.set_total_entries(self.entries.len());
        photos
    }

    /// Checks for a page without touching recency or stats.
    pub fn contains(&self, page: u32) -> bool {
        self.entries.contains_key(&page)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Photo;
    use std::sync::Arc;

    fn page_of(page: u32) -> PhotoPage {
        Arc::new(vec![Photo::sample(i64::from(page) * 100)])
    }

    #[test]
    fn test_cache_new() {
        let cache = PageCache::new(100);
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 100);
    }

    #[test]
    fn test_cache_zero_capacity_is_clamped() {
        let mut cache = PageCache::new(0);
        cache.insert(1, page_of(1));
        assert_eq!(cache.capacity(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_insert_and_get() {
        let mut cache = PageCache::new(100);
        let photos = page_of(1);

        cache.insert(1, photos.clone());
        let cached = cache.get(1).unwrap();

        assert_eq!(cached, photos);
        assert!(Arc::ptr_eq(&cached, &photos));
    }

    #[test]
    fn test_cache_get_missing() {
        let mut cache = PageCache::new(100);
        assert!(cache.get(7).is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_cache_first_insert_wins() {
        let mut cache = PageCache::new(100);
        let first = page_of(1);

        cache.insert(1, first.clone());
        let stored = cache.insert(1, page_of(2));

        assert!(Arc::ptr_eq(&stored, &first));
        assert_eq!(cache.get(1).unwrap(), first);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_lru_eviction() {
        let mut cache = PageCache::new(3);

        cache.insert(1, page_of(1));
        cache.insert(2, page_of(2));
        cache.insert(3, page_of(3));
        cache.insert(4, page_of(4));

        assert_eq!(cache.len(), 3);
        assert!(!cache.contains(1));
        assert!(cache.contains(2));
        assert!(cache.contains(4));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_cache_get_refreshes_recency() {
        let mut cache = PageCache::new(3);

        cache.insert(1, page_of(1));
        cache.insert(2, page_of(2));
        cache.insert(3, page_of(3));
        cache.get(1);
        cache.insert(4, page_of(4));

        assert!(cache.contains(1));
        assert!(!cache.contains(2));
    }

    #[test]
    fn test_cache_stats() {
        let mut cache = PageCache::new(100);

        cache.insert(1, page_of(1));
        cache.get(1);
        cache.get(2);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_contains_does_not_count() {
        let mut cache = PageCache::new(100);
        cache.insert(1, page_of(1));
        assert!(cache.contains(1));
        assert!(!cache.contains(2));
        assert_eq!(cache.stats().hits + cache.stats().misses, 0);
    }
}
