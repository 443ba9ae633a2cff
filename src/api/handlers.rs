//! API Handlers
//!
//! HTTP request handlers for the gallery pages and the JSON endpoints.

use std::sync::Arc;

use askama::Template;
use axum::{
    body::{Body, Bytes},
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use futures::stream::{self, FuturesUnordered, StreamExt};
use tracing::warn;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{HealthResponse, PageEntry, PageQuery, PagesResponse, StatsResponse};
use crate::photos::{Canceller, HttpPhotoSource, PageFetcher, PaginationLoader, PhotoSource};
use crate::tasks::spawn_prefetch_task;
use crate::views::{
    render_page_section, HtmlError, IndexTemplate, PageHeadTemplate, PageTailTemplate,
    SINGLE_FETCH_PATH,
};

/// Application state shared across all handlers.
///
/// Holds the single [`PageFetcher`] (and with it the page cache) for the
/// whole process.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<PageFetcher>,
    pub loader: PaginationLoader,
    /// Largest accepted `page` parameter
    pub max_page: u32,
    /// Warm the cache for `nextPage` after each page request
    pub prefetch_next_page: bool,
}

impl AppState {
    /// Creates a new AppState over the given photo source.
    pub fn new(source: Arc<dyn PhotoSource>, config: &Config) -> Self {
        let fetcher = Arc::new(PageFetcher::new(source, config.page_cache_capacity));
        Self {
            loader: PaginationLoader::new(fetcher.clone()),
            fetcher,
            max_page: config.max_page,
            prefetch_next_page: config.prefetch_next_page,
        }
    }

    /// Creates a new AppState talking to the configured upstream API.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpPhotoSource::from_config(config)?;
        Ok(Self::new(Arc::new(source), config))
    }

    /// Whether `page` would be accepted as a request parameter.
    fn accepts_page(&self, page: u32) -> bool {
        page <= self.max_page
    }

    fn prefetch(&self, page: u32) {
        if self.prefetch_next_page && self.accepts_page(page) {
            spawn_prefetch_task(self.fetcher.clone(), page);
        }
    }
}

/// Reads the requested page, treating an unparseable query string (such as a
/// repeated `page`) the same as an invalid value.
fn requested_page(
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
    max_page: u32,
) -> Result<u32> {
    let Query(query) = query.map_err(|e| AppError::InvalidPage(e.body_text()))?;
    query.requested_page(max_page)
}

/// Handler for GET /
pub async fn index_handler() -> std::result::Result<Html<String>, HtmlError> {
    let html = IndexTemplate {
        single_fetch_path: SINGLE_FETCH_PATH,
    }
    .render()
    .map_err(AppError::from)?;

    Ok(Html(html))
}

/// Handler for GET /single-fetch?page=N
///
/// Streams the page: the head with a loading slot per page goes out
/// immediately, then each page's fragment as soon as that page settles in
/// whatever order they finish, then the next-page form. Dropping the body
/// (client disconnect) drops the request's [`Canceller`], which aborts every
/// fetch still in flight.
pub async fn single_fetch_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> std::result::Result<Response, HtmlError> {
    let requested = requested_page(query, state.max_page)?;

    let head = PageHeadTemplate::new(requested)
        .render()
        .map_err(AppError::from)?;

    let canceller = Canceller::new();
    let result = state.loader.load(Some(requested), &canceller.signal());
    let next_page = result.next_page;

    let tail = PageTailTemplate {
        action: SINGLE_FETCH_PATH,
        next_page,
        has_next: state.accepts_page(next_page),
    }
    .render()
    .map_err(AppError::from)?;

    state.prefetch(next_page);

    let sections: FuturesUnordered<_> = result
        .pages
        .into_iter()
        .map(|pending| async move {
            let page = pending.page();
            let result = pending.resolve().await;
            if let Err(e) = &result {
                warn!(page, error = %e, "Rendering error placeholder for page");
            }
            render_page_section(page, &result).map(Bytes::from)
        })
        .collect();

    let body = stream::once(async move { Ok::<_, AppError>(Bytes::from(head)) })
        .chain(sections)
        .chain(stream::once(async move {
            drop(canceller);
            Ok(Bytes::from(tail))
        }))
        .boxed();

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(body),
    )
        .into_response())
}

/// Handler for GET /api/pages?page=N
///
/// Same loader result as the HTML page, awaited in order and returned as
/// JSON. Failed pages are reported per entry.
pub async fn pages_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PagesResponse>> {
    let requested = requested_page(query, state.max_page)?;

    let canceller = Canceller::new();
    let result = state.loader.load(Some(requested), &canceller.signal());
    let next_page = result.next_page;
    state.prefetch(next_page);

    let pages = result
        .resolve_all()
        .await
        .into_iter()
        .map(|(page, result)| PageEntry::from_result(page, result))
        .collect();

    Ok(Json(PagesResponse { pages, next_page }))
}

/// Handler for GET /stats
///
/// Returns current page cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.fetcher.stats().await;
    let capacity = state.fetcher.cache_capacity().await;

    Json(StatsResponse::new(&stats, capacity))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photos::testing::FakeSource;

    fn test_config() -> Config {
        Config {
            prefetch_next_page: false,
            ..Config::default()
        }
    }

    fn query(page: Option<&str>) -> std::result::Result<Query<PageQuery>, QueryRejection> {
        Ok(Query(PageQuery {
            page: page.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn test_pages_handler() {
        let state = AppState::new(Arc::new(FakeSource::new()), &test_config());

        let response = pages_handler(State(state), query(Some("3"))).await.unwrap();

        assert_eq!(response.next_page, 4);
        let pages: Vec<u32> = response.pages.iter().map(PageEntry::page).collect();
        assert_eq!(pages, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_pages_handler_reports_failed_page() {
        let source = FakeSource::new().malformed(2);
        let state = AppState::new(Arc::new(source), &test_config());

        let response = pages_handler(State(state), query(Some("2"))).await.unwrap();

        assert!(matches!(response.pages[0], PageEntry::Ok { .. }));
        assert!(matches!(response.pages[1], PageEntry::Error { page: 2, .. }));
    }

    #[tokio::test]
    async fn test_pages_handler_invalid_page() {
        let state = AppState::new(Arc::new(FakeSource::new()), &test_config());

        let result = pages_handler(State(state), query(Some("abc"))).await;
        assert!(matches!(result, Err(AppError::InvalidPage(_))));
    }

    #[tokio::test]
    async fn test_prefetch_warms_next_page() {
        let source = Arc::new(FakeSource::new());
        let config = Config {
            prefetch_next_page: true,
            ..Config::default()
        };
        let state = AppState::new(source.clone(), &config);

        pages_handler(State(state.clone()), query(Some("1"))).await.unwrap();

        for _ in 0..50 {
            if state.fetcher.is_cached(2).await {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert!(state.fetcher.is_cached(2).await);
        assert_eq!(source.calls(2), 1);
    }

    #[tokio::test]
    async fn test_prefetch_stops_at_max_page() {
        let source = Arc::new(FakeSource::new());
        let config = Config {
            prefetch_next_page: true,
            max_page: 2,
            ..Config::default()
        };
        let state = AppState::new(source.clone(), &config);

        let response = pages_handler(State(state.clone()), query(Some("2"))).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        assert_eq!(response.next_page, 3);
        assert_eq!(source.calls(3), 0);
        assert!(!state.fetcher.is_cached(3).await);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::new(Arc::new(FakeSource::new()), &test_config());

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.capacity, 500);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
