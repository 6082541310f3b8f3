//! Apex Sports Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing the router to be exercised in integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the complete storefront application.
///
/// Everything except the Sentry tower layers, which only make sense on a
/// real server and are added in `main`.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer();

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
