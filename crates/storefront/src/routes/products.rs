//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use apex_sports_core::{Product, ProductId};

use crate::backend::BackendError;
use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::{NavView, nav_context};
use crate::state::AppState;

/// Product detail display data.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: String,
    pub old_price: Option<String>,
    pub discount_percent: u8,
    pub image: String,
    pub description: String,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            old_price: product.old_price().map(|p| p.to_string()),
            discount_percent: product.discount_percent.unwrap_or(0),
            image: product.image.clone(),
            // The backend carries no description field; generate a stock one.
            description: format!(
                "{} - quality gear from our {} range.",
                product.name, product.category
            ),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub nav: NavView,
    pub product: ProductDetailView,
}

/// Product not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub nav: NavView,
}

/// Display a product detail page.
///
/// An unknown ID renders a friendly not-found page; other backend failures
/// surface as `AppError` and get captured.
#[instrument(skip(state, session, headers))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Response> {
    let nav = nav_context(&state, &session, &headers).await;

    match state.backend().product(ProductId::new(id)).await {
        Ok(product) => Ok(ProductShowTemplate {
            nav,
            product: ProductDetailView::from(&product),
        }
        .into_response()),
        Err(BackendError::NotFound(_)) => {
            Ok((StatusCode::NOT_FOUND, ProductNotFoundTemplate { nav }).into_response())
        }
        Err(e) => Err(AppError::Backend(e)),
    }
}
