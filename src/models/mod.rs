//! Data models for the photo server
//!
//! The upstream photo schema plus the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod photo;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use photo::{parse_photo_page, Photo, PhotoPage};
pub use requests::PageQuery;
pub use responses::{HealthResponse, PageEntry, PagesResponse, StatsResponse};
