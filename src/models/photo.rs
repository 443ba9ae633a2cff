//! Photo schema for the upstream API
//!
//! Deserializing into [`Photo`] is the validation step: every field must be
//! present with the right type, and both URLs must parse as absolute URLs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

/// A single photo record as served by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: i64,
    pub id: i64,
    pub title: String,
    pub url: Url,
    pub thumbnail_url: Url,
}

/// One page of photos, shared between the cache and every request that reads it.
pub type PhotoPage = Arc<Vec<Photo>>;

/// Validates a raw upstream body as a JSON array of photos.
pub fn parse_photo_page(body: &[u8]) -> Result<Vec<Photo>> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
impl Photo {
    pub(crate) fn sample(id: i64) -> Self {
        Self {
            album_id: id / 50 + 1,
            id,
            title: format!("photo {id}"),
            url: Url::parse(&format!("https://via.placeholder.com/600/{id}"))
                .expect("valid sample url"),
            thumbnail_url: Url::parse(&format!("https://via.placeholder.com/150/{id}"))
                .expect("valid sample url"),
        }
    }
}
