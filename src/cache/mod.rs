//! Cache Module
//!
//! In-memory page cache with LRU eviction and hit/miss statistics.

mod lru;
mod stats;
mod store;


// Re-export public types
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::PageCache;
