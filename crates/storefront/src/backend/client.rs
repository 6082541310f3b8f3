//! Backend API client implementation.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, StatusCode, header};
use tracing::{debug, instrument};
use url::Url;

use apex_sports_core::{CartItem, Product, ProductId};

use super::{BackendError, SessionProbe};

/// Catalog cache TTL. Short, so listings track backend changes closely
/// without a fetch on every render.
const CATALOG_TTL: Duration = Duration::from_secs(60);

/// Cache key for the (single) full-catalog entry.
const CATALOG_KEY: &str = "catalog";

/// Client for the Apex Sports backend REST API.
///
/// Cheaply cloneable; the full catalog is cached for [`CATALOG_TTL`].
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    /// Base URL without trailing slash; paths are appended verbatim.
    base_url: String,
    catalog: Cache<&'static str, Arc<Vec<Product>>>,
}

impl BackendClient {
    /// Create a new backend API client.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        let catalog = Cache::builder()
            .max_capacity(1)
            .time_to_live(CATALOG_TTL)
            .build();

        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.as_str().trim_end_matches('/').to_string(),
                catalog,
            }),
        }
    }

    /// Build a request, forwarding the browser's cookies when present.
    fn request(&self, method: Method, path: &str, cookies: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        let mut builder = self.inner.client.request(method, url);
        if let Some(cookies) = cookies {
            builder = builder.header(header::COOKIE, cookies);
        }
        builder
    }

    /// Convert a non-success response into a `Status` error with a
    /// truncated body for diagnostics.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::error!(
            status = %status,
            body = %body.chars().take(200).collect::<String>(),
            "backend returned non-success status"
        );
        Err(BackendError::Status {
            status,
            body: body.chars().take(200).collect(),
        })
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get the full catalog, from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Arc<Vec<Product>>, BackendError> {
        if let Some(catalog) = self.inner.catalog.get(CATALOG_KEY).await {
            debug!("Cache hit for catalog");
            return Ok(catalog);
        }

        let response = self.request(Method::GET, "/api/products", None).send().await?;
        let response = Self::check_status(response).await?;
        let products: Vec<Product> = response.json().await?;

        let products = Arc::new(products);
        self.inner
            .catalog
            .insert(CATALOG_KEY, Arc::clone(&products))
            .await;

        Ok(products)
    }

    /// Get a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn product(&self, id: ProductId) -> Result<Product, BackendError> {
        let response = self
            .request(Method::GET, &format!("/api/products/{id}"), None)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(format!("product {id}")));
        }

        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    // =========================================================================
    // Cart Methods (credentialed, never cached)
    // =========================================================================

    /// Add a line item to the caller's cart.
    ///
    /// The backend's response body carries no data this storefront uses;
    /// it is only logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, item, cookies), fields(product_id = %item.id, quantity = item.quantity))]
    pub async fn add_to_cart(
        &self,
        item: &CartItem,
        cookies: Option<&str>,
    ) -> Result<(), BackendError> {
        let response = self
            .request(Method::POST, "/api/cart/add", cookies)
            .json(item)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        match response.json::<serde_json::Value>().await {
            Ok(body) => debug!(body = %body, "cart add acknowledged"),
            Err(e) => debug!("cart add response was not JSON: {e}"),
        }

        Ok(())
    }

    /// Get the caller's current cart size.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, cookies))]
    pub async fn cart_count(&self, cookies: Option<&str>) -> Result<u32, BackendError> {
        let response = self
            .request(Method::GET, "/api/cart/count", cookies)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    // =========================================================================
    // Auth Methods (credentialed)
    // =========================================================================

    /// Probe the backend for the caller's session state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; callers are expected to fall
    /// back to their cached profile.
    #[instrument(skip(self, cookies))]
    pub async fn session_probe(&self, cookies: Option<&str>) -> Result<SessionProbe, BackendError> {
        let response = self
            .request(Method::GET, "/api/auth/me", cookies)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// End the caller's backend session. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; logout proceeds locally anyway.
    #[instrument(skip(self, cookies))]
    pub async fn logout(&self, cookies: Option<&str>) -> Result<(), BackendError> {
        let response = self
            .request(Method::POST, "/api/auth/logout", cookies)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Drop the cached catalog, forcing the next read to hit the backend.
    pub async fn invalidate_catalog(&self) {
        self.inner.catalog.invalidate(CATALOG_KEY).await;
    }
}
