//! Request DTOs for the photo server
//!
//! Defines the query string accepted by the page routes.

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Query string for `GET /single-fetch` and `GET /api/pages`.
///
/// `page` is kept as raw text so that only a genuinely absent parameter
/// defaults to 1; anything present must parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Number of pages viewed so far
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    /// Resolves the requested page, rejecting values outside `1..=max_page`.
    pub fn requested_page(&self, max_page: u32) -> Result<u32> {
        let Some(raw) = self.page.as_deref() else {
            return Ok(1);
        };

        let page: u32 = raw
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidPage(format!("'{raw}' is not a positive integer")))?;

        if page == 0 {
            return Err(AppError::InvalidPage("page must be at least 1".to_string()));
        }
        if page > max_page {
            return Err(AppError::InvalidPage(format!(
                "page {page} exceeds the maximum of {max_page}"
            )));
        }
        Ok(page)
    }
}
