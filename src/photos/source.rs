//! Upstream photo API client
//!
//! [`PhotoSource`] is the seam between the fetcher and the network so the
//! fetcher can be exercised without a live API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{parse_photo_page, Photo};

/// Something that can produce one validated page of photos.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Fetches and validates `page` (1-based).
    async fn fetch_page(&self, page: u32) -> Result<Vec<Photo>>;
}

/// [`PhotoSource`] backed by the JSONPlaceholder-style `/photos` endpoint.
#[derive(Debug, Clone)]
pub struct HttpPhotoSource {
    client: Client,
    photos_url: Url,
    page_size: u32,
}

impl HttpPhotoSource {
    /// Creates a source for `base_url`, requesting `page_size` photos per page.
    pub fn new(base_url: &str, page_size: u32, timeout: Duration) -> Result<Self> {
        let photos_url = Url::parse(base_url)?.join("/photos")?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("photo_scroll/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            photos_url,
            page_size,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.photos_api_url,
            config.page_size,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Full request URL for `page`.
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.photos_url.clone();
        url.query_pairs_mut()
            .append_pair("_page", &page.to_string())
            .append_pair("limit", &self.page_size.to_string());
        url
    }
}

#[async_trait]
impl PhotoSource for HttpPhotoSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Photo>> {
        let response = self.client.get(self.page_url(page)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_photo_page(&body)
    }
}
