//! API Module
//!
//! HTTP handlers and routing for the photo gallery.
//!
//! # Endpoints
//! - `GET /` - Landing page
//! - `GET /single-fetch?page=N` - Streamed photo gallery
//! - `GET /api/pages?page=N` - Loader result as JSON
//! - `GET /stats` - Page cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
