//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                 - Home page (featured + category sections)
//! GET  /health           - Health check
//!
//! # Catalog
//! GET  /men              - Men's apparel listing (paginated)
//! GET  /women            - Women's apparel listing (paginated)
//! GET  /accessories      - Accessories listing (paginated)
//! GET  /search?q=        - Search listing (paginated)
//! GET  /products/{id}    - Product detail
//!
//! # Cart (HTMX fragments)
//! POST /cart/add         - Add to cart (returns toast, triggers cart-updated)
//! GET  /cart/count       - Cart count badge (fragment)
//!
//! # Auth
//! POST /auth/logout      - Logout action (backend + local cache)
//!
//! Any other path renders an empty product listing with a 404 status.
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod home;
pub mod products;

use axum::{
    Router,
    http::HeaderMap,
    routing::{get, post},
};
use tokio::join;
use tower_sessions::Session;

use apex_sports_core::Product;

use crate::services::session::sync_session;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/logout", post(auth::logout))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog listings
        .route("/men", get(catalog::men))
        .route("/women", get(catalog::women))
        .route("/accessories", get(catalog::accessories))
        .route("/search", get(catalog::search))
        // Product detail
        .route("/products/{id}", get(products::show))
        // Cart routes
        .nest("/cart", cart_routes())
        // Auth routes
        .nest("/auth", auth_routes())
        // Health check
        .route("/health", get(health))
        // Unknown paths render an empty listing
        .fallback(catalog::not_found)
}

// =============================================================================
// Shared View Types
// =============================================================================

/// Signed-in user data for the navbar.
#[derive(Clone)]
pub struct NavUserView {
    /// Short name shown in the navbar (first name, or email as fallback).
    pub name: String,
    pub avatar: Option<String>,
}

/// Navbar context shared by every full-page template.
#[derive(Clone)]
pub struct NavView {
    pub user: Option<NavUserView>,
    pub cart_count: u32,
    /// Sign-in link; login and registration pages live on the backend.
    pub login_href: String,
    pub register_href: String,
}

/// Product display data for card grids.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: String,
    pub old_price: Option<String>,
    pub discount_percent: u8,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            old_price: product.old_price().map(|p| p.to_string()),
            discount_percent: product.discount_percent.unwrap_or(0),
            image: product.image.clone(),
        }
    }
}

// =============================================================================
// Shared Request Helpers
// =============================================================================

/// Extract the raw cookie header to forward to the backend.
///
/// The browser's backend session cookie rides along on every storefront
/// request; forwarding it verbatim lets the backend authenticate the caller.
pub fn forward_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// Build the navbar context: auth state and cart count, fetched concurrently.
///
/// A failed cart count renders as zero rather than failing the page.
pub async fn nav_context(state: &AppState, session: &Session, headers: &HeaderMap) -> NavView {
    let cookies = forward_cookies(headers);

    let (auth, count) = join!(
        sync_session(state.backend(), session, cookies.as_deref()),
        state.backend().cart_count(cookies.as_deref()),
    );

    let user = auth.user().map(|u| NavUserView {
        name: u.display_name().to_string(),
        avatar: u.avatar.clone(),
    });

    let cart_count = count.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch cart count: {e}");
        0
    });

    let backend_base = state.config().backend_api_url.as_str().trim_end_matches('/');

    NavView {
        user,
        cart_count,
        login_href: format!("{backend_base}/login"),
        register_href: format!("{backend_base}/register"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use apex_sports_core::{Price, ProductId};

    #[test]
    fn test_product_card_view_discounted() {
        let product = Product {
            id: ProductId::from(7),
            name: "Trail Runner".to_string(),
            category: "men".to_string(),
            price: Price::new(900_000),
            image: "https://cdn.example.com/trail.jpg".to_string(),
            discount_percent: Some(10),
        };
        let view = ProductCardView::from(&product);
        assert_eq!(view.id, 7);
        assert_eq!(view.price, "900.000 ₫");
        assert_eq!(view.old_price.as_deref(), Some("1.000.000 ₫"));
        assert_eq!(view.discount_percent, 10);
    }

    #[test]
    fn test_product_card_view_full_price() {
        let product = Product {
            id: ProductId::from(8),
            name: "Gym Towel".to_string(),
            category: "accessories".to_string(),
            price: Price::new(120_000),
            image: String::new(),
            discount_percent: None,
        };
        let view = ProductCardView::from(&product);
        assert_eq!(view.old_price, None);
        assert_eq!(view.discount_percent, 0);
    }

    #[test]
    fn test_forward_cookies() {
        let mut headers = HeaderMap::new();
        assert_eq!(forward_cookies(&headers), None);

        headers.insert(
            axum::http::header::COOKIE,
            "sid=abc; theme=dark".parse().unwrap(),
        );
        assert_eq!(
            forward_cookies(&headers).as_deref(),
            Some("sid=abc; theme=dark")
        );
    }
}
