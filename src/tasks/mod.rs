//! Background Tasks Module
//!
//! Contains background tasks spawned alongside request handling.
//!
//! # Tasks
//! - Prefetch: warms the page cache for the page a client will ask for next

mod prefetch;

pub use prefetch::spawn_prefetch_task;
