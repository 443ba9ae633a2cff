//! Photo Scroll - infinite-scroll photo gallery
//!
//! Serves a streamed, server-rendered photo list using single-fetch
//! pagination, with an LRU page cache in front of the upstream photo API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod photos;
pub mod tasks;
pub mod views;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{AppError, Result};
pub use photos::{CancelSignal, Canceller, PageFetcher, PaginationLoader, PhotoSource};
