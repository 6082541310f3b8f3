//! Apex Sports backend REST API client.
//!
//! # Architecture
//!
//! - The backend is the source of truth for products, cart, and auth -
//!   no local sync, direct API calls per render
//! - The full catalog response is cached in-memory via `moka` (short TTL),
//!   the server-side analog of fetching the product list once per page load
//! - Credentialed endpoints receive the browser's `Cookie` header verbatim,
//!   so the backend session cookie passes straight through this process
//!
//! # Endpoints consumed
//!
//! ```text
//! GET  /api/products        - full catalog
//! GET  /api/products/{id}   - single product
//! POST /api/cart/add        - add a line item (JSON CartItem body)
//! GET  /api/cart/count      - current cart size (plain number)
//! GET  /api/auth/me         - session probe ({success, user?})
//! POST /api/auth/logout     - end the backend session
//! ```

mod client;

pub use client::BackendClient;

use serde::Deserialize;
use thiserror::Error;

use apex_sports_core::UserProfile;

/// Response shape of the `/api/auth/me` session probe.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionProbe {
    /// Whether the caller has an active backend session.
    pub success: bool,
    /// The authenticated user's profile, present on success.
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Errors that can occur when calling the backend API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed (connection, timeout, or body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend returned a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
