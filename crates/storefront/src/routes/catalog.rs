//! Catalog listing route handlers.
//!
//! The category pages, search results, and the not-found fallback all render
//! the same listing template: a heading, a 3x3 product grid, and pagination
//! links. Pagination is plain `?page=N` anchors, so every page of a listing
//! has a stable, shareable URL.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use apex_sports_core::catalog::{self, Category};
use apex_sports_core::pagination::{Pagination, page_slice};
use apex_sports_core::Product;

use crate::filters;
use crate::routes::{NavView, ProductCardView, nav_context};
use crate::state::AppState;

/// Query parameters accepted by listing pages.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// 1-based page number; out-of-range values are clamped.
    pub page: Option<u32>,
    /// Search query (only meaningful on `/search`).
    pub q: Option<String>,
}

/// What a listing page is showing.
enum Mode {
    Category(Category),
    Search(String),
    /// Unknown path: an empty grid with a 404 status.
    NotFound,
}

impl Mode {
    /// Heading above the grid, if the mode has one.
    ///
    /// An empty search query lists everything without a heading, matching
    /// the category-less browse experience.
    fn title(&self) -> Option<String> {
        match self {
            Self::Category(category) => Some(category.title().to_string()),
            Self::Search(query) => {
                if query.is_empty() {
                    None
                } else {
                    Some(format!("Results: \"{query}\""))
                }
            }
            Self::NotFound => None,
        }
    }

    /// Base href that pagination links append `page=N` to.
    fn page_href(&self, page: u32) -> String {
        match self {
            Self::Category(category) => format!("/{}?page={page}", category.slug()),
            Self::Search(query) => {
                format!("/search?q={}&page={page}", urlencoding::encode(query))
            }
            Self::NotFound => format!("/?page={page}"),
        }
    }

    /// Narrow the full catalog to this listing's products.
    fn select(&self, products: Vec<Product>) -> Vec<Product> {
        match self {
            Self::Category(category) => catalog::filter_category(products, *category),
            Self::Search(query) => catalog::search(products, query),
            Self::NotFound => Vec::new(),
        }
    }
}

/// Catalog listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogTemplate {
    pub nav: NavView,
    pub title: Option<String>,
    pub products: Vec<ProductCardView>,
    pub total: usize,
    pub current_page: u32,
    pub total_pages: u32,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
    pub error: Option<String>,
}

/// Build the listing template for a mode, page, and catalog fetch result.
///
/// Listings paginate the catalog in the backend's order; only the home page
/// reorders products.
async fn build_listing(
    state: &AppState,
    session: &Session,
    headers: &HeaderMap,
    mode: &Mode,
    page: u32,
) -> CatalogTemplate {
    let nav = nav_context(state, session, headers).await;

    let (selected, error) = match state.backend().products().await {
        Ok(products) => (mode.select(products.as_ref().clone()), None),
        Err(e) => {
            tracing::error!("Failed to load catalog: {e}");
            (Vec::new(), Some("Could not load products.".to_string()))
        }
    };

    let pagination = Pagination::new(selected.len(), page);
    let products = page_slice(&selected, &pagination)
        .iter()
        .map(ProductCardView::from)
        .collect();

    CatalogTemplate {
        nav,
        title: mode.title(),
        products,
        total: pagination.total_items(),
        current_page: pagination.current(),
        total_pages: pagination.display_total(),
        prev_href: pagination.prev().map(|p| mode.page_href(p)),
        next_href: pagination.next().map(|p| mode.page_href(p)),
        error,
    }
}

/// Display the men's apparel listing.
#[instrument(skip(state, session, headers))]
pub async fn men(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let mode = Mode::Category(Category::Men);
    build_listing(&state, &session, &headers, &mode, query.page.unwrap_or(1)).await
}

/// Display the women's apparel listing.
#[instrument(skip(state, session, headers))]
pub async fn women(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let mode = Mode::Category(Category::Women);
    build_listing(&state, &session, &headers, &mode, query.page.unwrap_or(1)).await
}

/// Display the accessories listing.
#[instrument(skip(state, session, headers))]
pub async fn accessories(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let mode = Mode::Category(Category::Accessories);
    build_listing(&state, &session, &headers, &mode, query.page.unwrap_or(1)).await
}

/// Display search results.
///
/// Matching is a case-insensitive substring test against product names and
/// categories; an empty or missing query lists the whole catalog.
#[instrument(skip(state, session, headers))]
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let q = query.q.unwrap_or_default().trim().to_string();
    let mode = Mode::Search(q);
    build_listing(&state, &session, &headers, &mode, query.page.unwrap_or(1)).await
}

/// Fallback for unknown paths: an empty listing with a 404 status.
#[instrument(skip(state, session, headers))]
pub async fn not_found(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Response {
    let template = build_listing(&state, &session, &headers, &Mode::NotFound, 1).await;
    (StatusCode::NOT_FOUND, template).into_response()
}
