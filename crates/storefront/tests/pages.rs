//! Integration tests for the storefront router.
//!
//! Each test spins up a small in-process mock of the backend REST API on a
//! random port, points the storefront at it, and drives the router with
//! `tower::ServiceExt::oneshot`.

#![allow(clippy::unwrap_used)]

use axum::{
    Json, Router,
    body::Body,
    extract::Path,
    http::{Request, StatusCode, header},
    routing::{get, post},
};
use serde_json::json;
use tower::ServiceExt;

use apex_sports_core::{Price, Product, ProductId};
use apex_sports_storefront::{app, config::StorefrontConfig, state::AppState};

// =============================================================================
// Fixtures
// =============================================================================

fn product(id: i64, name: &str, category: &str, discount: Option<u8>) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        price: Price::new(450_000),
        image: String::new(),
        discount_percent: discount,
    }
}

/// 20 men's products, 3 women's, 12 accessories. IDs 18 and 19 are discounted.
fn fixture_products() -> Vec<Product> {
    let mut products = Vec::new();
    for id in 1..=20 {
        let discount = if (18..=19).contains(&id) { Some(20) } else { None };
        products.push(product(id, &format!("Men Training Tee {id}"), "men", discount));
    }
    for id in 21..=23 {
        products.push(product(id, &format!("Women Sprint Shorts {id}"), "women", None));
    }
    for id in 24..=35 {
        products.push(product(id, &format!("Gym Bag {id}"), "accessories", None));
    }
    products
}

// =============================================================================
// Mock Backend
// =============================================================================

async fn mock_products() -> Json<Vec<Product>> {
    Json(fixture_products())
}

async fn mock_product(Path(id): Path<i64>) -> Result<Json<Product>, StatusCode> {
    fixture_products()
        .into_iter()
        .find(|p| p.id == ProductId::new(id))
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn mock_cart_count() -> Json<u32> {
    Json(3)
}

async fn mock_cart_add() -> Json<serde_json::Value> {
    Json(json!({"success": true}))
}

/// Confirms a session only when the caller forwarded a cookie.
async fn mock_auth_me(headers: axum::http::HeaderMap) -> Json<serde_json::Value> {
    if headers.contains_key(header::COOKIE) {
        Json(json!({
            "success": true,
            "user": {
                "firstName": "Linh",
                "lastName": "Tran",
                "email": "linh@example.com",
                "avatar": null
            }
        }))
    } else {
        Json(json!({"success": false}))
    }
}

async fn mock_logout() -> Json<serde_json::Value> {
    Json(json!({"success": true}))
}

/// Start the mock backend on a random port and return its base URL.
async fn spawn_backend() -> String {
    let router = Router::new()
        .route("/api/products", get(mock_products))
        .route("/api/products/{id}", get(mock_product))
        .route("/api/cart/count", get(mock_cart_count))
        .route("/api/cart/add", post(mock_cart_add))
        .route("/api/auth/me", get(mock_auth_me))
        .route("/api/auth/logout", post(mock_logout));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// Like `spawn_backend`, but every cart mutation fails server-side.
async fn spawn_backend_with_broken_cart() -> String {
    let router = Router::new()
        .route("/api/products", get(mock_products))
        .route("/api/products/{id}", get(mock_product))
        .route("/api/cart/count", get(mock_cart_count))
        .route(
            "/api/cart/add",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route("/api/auth/me", get(mock_auth_me))
        .route("/api/auth/logout", post(mock_logout));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

fn test_app(backend_url: &str) -> Router {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        backend_api_url: backend_url.parse().unwrap(),
        sentry_dsn: None,
    };
    app(AppState::new(config))
}

async fn get_page(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn home_page_renders_sections() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let (status, body) = get_page(&app, "/").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body.contains("Featured Deals"));
    assert!(body.contains("Sneakers"));
    assert!(body.contains("Women&#x27;s Picks") || body.contains("Women's Picks"));
    // Discounted products lead the featured set
    assert!(body.contains("Men Training Tee 19"));
    // Newest men's product leads its section
    assert!(body.contains("Men Training Tee 20"));
}

#[tokio::test]
async fn category_page_paginates() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    // 20 men's products at 9 per page = 3 pages
    let (status, body) = get_page(&app, "/men?page=3").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body.contains("Men&#x27;s Apparel") || body.contains("Men's Apparel"));
    assert!(body.contains("Page 3 of 3"));
    // Backend order is kept, so the last page holds the last two products
    assert!(body.contains("Men Training Tee 19"));
    assert!(body.contains("Men Training Tee 20"));
    assert!(!body.contains("Men Training Tee 18"));
    // The last page has no Next link
    assert!(body.contains("<span class=\"page-link disabled\">Next</span>"));
    assert!(body.contains("href=\"/men?page=2\""));
}

#[tokio::test]
async fn category_listing_keeps_backend_order() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let (status, body) = get_page(&app, "/men").await;
    assert_eq!(status, StatusCode::OK);
    // The first page shows the first nine products as the backend returned them
    assert!(body.contains("Men Training Tee 9"));
    assert!(!body.contains("Men Training Tee 10"));
    assert!(!body.contains("Men Training Tee 20"));
}

#[tokio::test]
async fn category_page_clamps_out_of_range() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let (status, body) = get_page(&app, "/women?page=99").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Page 1 of 1"));
    assert!(body.contains("Women Sprint Shorts 21"));
}

#[tokio::test]
async fn search_filters_and_escapes_query() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let (status, body) = get_page(&app, "/search?q=sprint").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Results: &quot;sprint&quot;"));
    assert!(body.contains("Showing 3 of 3 products"));
    assert!(body.contains("Women Sprint Shorts 22"));
    assert!(!body.contains("Men Training Tee"));
}

#[tokio::test]
async fn search_empty_query_lists_everything() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let (status, body) = get_page(&app, "/search?q=").await;
    assert_eq!(status, StatusCode::OK);
    // No heading for an empty query, just the full paginated catalog
    assert!(!body.contains("Results:"));
    assert!(body.contains("Showing 9 of 35 products"));
    assert!(body.contains("Page 1 of 4"));
}

#[tokio::test]
async fn unknown_path_renders_empty_listing() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let (status, body) = get_page(&app, "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No products found."));
    // The navbar still renders
    assert!(body.contains("Apex Sports"));
}

#[tokio::test]
async fn product_detail_renders() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let (status, body) = get_page(&app, "/products/19").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Men Training Tee 19"));
    assert!(body.contains("450.000 \u{20ab}"));
    // 20% discount implies an old price of 562.500
    assert!(body.contains("562.500 \u{20ab}"));
    assert!(body.contains("-20%"));
}

#[tokio::test]
async fn missing_product_renders_not_found() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let (status, body) = get_page(&app, "/products/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Product not found"));
}

#[tokio::test]
async fn cart_count_returns_fragment() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let (status, body) = get_page(&app, "/cart/count").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.trim(), "3");
}

#[tokio::test]
async fn cart_add_returns_toast_and_trigger() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cart/add")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from("product_id=5&quantity=2&size=M&color="))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").unwrap(),
        "cart-updated"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("Men Training Tee 5"));
    assert!(body.contains("added to cart"));
    assert!(body.contains("Size: M"));
    // An empty color field is no selection
    assert!(!body.contains("Color:"));
    // The badge rides along as an out-of-band swap
    assert!(body.contains("hx-swap-oob"));
}

#[tokio::test]
async fn cart_add_failure_renders_error_toast() {
    let backend = spawn_backend_with_broken_cart().await;
    let app = test_app(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cart/add")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from("product_id=5&quantity=1"))
                .unwrap(),
        )
        .await
        .unwrap();

    // HTMX only swaps 2xx responses, so the error fragment must come back
    // with a success status to actually appear in the toast area.
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("HX-Trigger").is_none());

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("Could not add to cart"));
    assert!(body.contains("cart-toast-error"));
}

#[tokio::test]
async fn navbar_shows_guest_without_session() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let (status, body) = get_page(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Log in"));
    assert!(!body.contains("Log out"));
}

#[tokio::test]
async fn navbar_shows_user_with_forwarded_session() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    // The mock backend confirms the session when a cookie is forwarded
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, "backend_sid=abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("Linh"));
    assert!(body.contains("Log out"));
}

#[tokio::test]
async fn logout_redirects_home() {
    let backend = spawn_backend().await;
    let app = test_app(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn unreachable_backend_degrades_gracefully() {
    // Bind a port and drop it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let app = test_app(&dead_url);

    let (status, body) = get_page(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Could not load products."));
    // Cart count degrades to zero rather than an error
    let (status, body) = get_page(&app, "/cart/count").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.trim(), "0");
}
