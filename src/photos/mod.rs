//! Photos Module
//!
//! Page fetching and single-fetch pagination over the upstream photo API.
//!
//! # Components
//! - [`PageFetcher`]: cache-first page access
//! - [`PaginationLoader`]: fans out one fetch per viewed page
//! - [`Canceller`] / [`CancelSignal`]: per-request cancellation

mod cancel;
mod fetcher;
mod loader;
mod source;

pub use cancel::{CancelSignal, Canceller};
pub use fetcher::PageFetcher;
pub use loader::{LoaderResult, PaginationLoader, PendingPage};
pub use source::{HttpPhotoSource, PhotoSource};

/// Maps an absent or zero page number to page 1.
pub fn normalize_page(page: Option<u32>) -> u32 {
    page.filter(|p| *p > 0).unwrap_or(1)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::PhotoSource;
    use crate::error::Result;
    use crate::models::{parse_photo_page, Photo};

    /// In-memory [`PhotoSource`] that counts calls per page.
    #[derive(Default)]
    pub struct FakeSource {
        calls: Mutex<HashMap<u32, usize>>,
        in_flight: AtomicUsize,
        malformed: HashSet<u32>,
        delays: HashMap<u32, Duration>,
    }

    struct InFlight<'a>(&'a AtomicUsize);

    impl Drop for InFlight<'_> {
        fn drop(&mut self) {
            self.0.fetch_sub(1, Ordering::SeqCst);
        }
    }

    impl FakeSource {
        pub fn new() -> Self {
            Self::default()
        }

        /// Serves a body missing `thumbnailUrl` for `page`.
        pub fn malformed(mut self, page: u32) -> Self {
            self.malformed.insert(page);
            self
        }

        pub fn delayed(mut self, page: u32, delay: Duration) -> Self {
            self.delays.insert(page, delay);
            self
        }

        pub fn calls(&self, page: u32) -> usize {
            self.calls.lock().unwrap().get(&page).copied().unwrap_or(0)
        }

        pub fn total_calls(&self) -> usize {
            self.calls.lock().unwrap().values().sum()
        }

        /// Fetches started but neither finished nor dropped.
        pub fn in_flight(&self) -> usize {
            self.in_flight.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PhotoSource for FakeSource {
        async fn fetch_page(&self, page: u32) -> Result<Vec<Photo>> {
            *self.calls.lock().unwrap().entry(page).or_default() += 1;
            self.in_flight.fetch_add(1, Ordering::SeqCst);
            let _in_flight = InFlight(&self.in_flight);

            if let Some(delay) = self.delays.get(&page) {
                tokio::time::sleep(*delay).await;
            }

            if self.malformed.contains(&page) {
                return parse_photo_page(
                    br#"[{"albumId":1,"id":1,"title":"t","url":"https://a.example/1"}]"#,
                );
            }

            let first = i64::from(page - 1) * 10 + 1;
            Ok((first..first + 10).map(Photo::sample).collect())
        }
    }
}
