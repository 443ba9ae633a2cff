//! HTML views
//!
//! The single-fetch page is rendered in pieces so the response can be
//! streamed: [`PageHeadTemplate`] first with a loading slot per page, one
//! [`PageSectionTemplate`] per page in the order the pages settle, then
//! [`PageTailTemplate`] with the "load next page" form. Each section carries
//! a script that moves it into its slot, so arrival order does not matter.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::{AppError, Result};
use crate::models::{Photo, PhotoPage};

/// Path of the single-fetch route, used for links and form actions.
pub const SINGLE_FETCH_PATH: &str = "/single-fetch";

/// Landing page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub single_fetch_path: &'a str,
}

/// Document head, intro text and a "Loading page N" slot for every page.
#[derive(Template)]
#[template(path = "single_fetch/head.html")]
pub struct PageHeadTemplate {
    pub requested_page: u32,
    pub pages: Vec<u32>,
}

impl PageHeadTemplate {
    pub fn new(requested_page: u32) -> Self {
        Self {
            requested_page,
            pages: (1..=requested_page).collect(),
        }
    }
}

/// Photos of one page, or the page-scoped error placeholder.
#[derive(Template)]
#[template(path = "single_fetch/page.html")]
pub struct PageSectionTemplate<'a> {
    pub page: u32,
    pub photos: &'a [Photo],
    pub failed: bool,
}

/// The next-page form and the prefetch hint, omitted past the last
/// accepted page.
#[derive(Template)]
#[template(path = "single_fetch/tail.html")]
pub struct PageTailTemplate<'a> {
    pub action: &'a str,
    pub next_page: u32,
    pub has_next: bool,
}

impl PageTailTemplate<'_> {
    /// URL the browser should prefetch for the next page.
    pub fn next_url(&self) -> String {
        format!("{}?page={}", self.action, self.next_page)
    }
}

/// Full-page error shown for request-level failures.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub message: String,
}

/// Renders the fragment for one settled page.
pub fn render_page_section(page: u32, result: &Result<PhotoPage>) -> Result<String> {
    let template = match result {
        Ok(photos) => PageSectionTemplate {
            page,
            photos: photos.as_slice(),
            failed: false,
        },
        Err(_) => PageSectionTemplate {
            page,
            photos: &[],
            failed: true,
        },
    };
    Ok(template.render()?)
}

/// [`AppError`] rendered as an HTML page instead of JSON.
#[derive(Debug)]
pub struct HtmlError(pub AppError);

impl From<AppError> for HtmlError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request error");
        }

        let page = ErrorTemplate {
            status: status.as_u16(),
            message: self.0.to_string(),
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to render error page");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
