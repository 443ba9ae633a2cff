//! Response DTOs for the photo server
//!
//! Defines the structure of outgoing JSON bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::error::Result;
use crate::models::{Photo, PhotoPage};

/// Response body for `GET /api/pages`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesResponse {
    /// One entry per requested page, ascending
    pub pages: Vec<PageEntry>,
    /// Page number the client should request next
    pub next_page: u32,
}

/// Outcome of a single page inside [`PagesResponse`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PageEntry {
    Ok { page: u32, photos: Vec<Photo> },
    Error { page: u32, error: String },
}

impl PageEntry {
    /// Builds the entry for `page` from its resolved result.
    pub fn from_result(page: u32, result: Result<PhotoPage>) -> Self {
        match result {
            Ok(photos) => PageEntry::Ok {
                page,
                photos: photos.as_ref().clone(),
            },
            Err(e) => PageEntry::Error {
                page,
                error: e.to_string(),
            },
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            PageEntry::Ok { page, .. } | PageEntry::Error { page, .. } => *page,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_entries: usize,
    pub capacity: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, capacity: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
