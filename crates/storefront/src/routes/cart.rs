//! Cart route handlers.
//!
//! The cart itself lives on the backend; these handlers proxy mutations and
//! render the HTMX fragments that keep the navbar badge and toast in sync.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use apex_sports_core::{CartItem, ProductId};

use crate::routes::forward_cookies;
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
    pub quantity: Option<u32>,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Treat an absent or empty form field as no selection.
fn selected(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Added-to-cart toast fragment template (for HTMX).
///
/// Carries the refreshed badge as an out-of-band swap alongside the toast.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_added.html")]
pub struct CartAddedTemplate {
    pub product_name: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub count: u32,
}

/// Add an item to the cart (HTMX).
///
/// Looks the product up first so the line item carries a trusted name and
/// price rather than whatever the form claims. Returns a toast fragment and
/// an `HX-Trigger: cart-updated` header.
#[instrument(skip(state, headers), fields(product_id = form.product_id))]
pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let cookies = forward_cookies(&headers);
    let quantity = form.quantity.unwrap_or(1).max(1);
    let size = selected(form.size);
    let color = selected(form.color);

    let product = match state.backend().product(ProductId::new(form.product_id)).await {
        Ok(product) => product,
        Err(e) => {
            tracing::error!("Failed to load product for cart add: {e}");
            return cart_error();
        }
    };

    let item = CartItem::from_product(&product, quantity, size.clone(), color.clone());
    if let Err(e) = state.backend().add_to_cart(&item, cookies.as_deref()).await {
        tracing::error!("Failed to add item to cart: {e}");
        return cart_error();
    }

    // Refresh the badge; a failed count after a successful add shows zero
    // until the next cart-updated cycle corrects it.
    let count = state
        .backend()
        .cart_count(cookies.as_deref())
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to refresh cart count: {e}");
            0
        });

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartAddedTemplate {
            product_name: product.name,
            size,
            color,
            count,
        },
    )
        .into_response()
}

/// Error toast fragment for a failed cart mutation.
///
/// HTMX only swaps 2xx responses, so the fragment ships with a 200 status to
/// land in the toast area where the user can see it.
fn cart_error() -> Response {
    Html("<div class=\"cart-toast cart-toast-error\">Could not add to cart</div>").into_response()
}

/// Get the cart count badge (HTMX).
///
/// A failed backend call renders as zero so the badge never breaks the page.
#[instrument(skip(state, headers))]
pub async fn count(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let cookies = forward_cookies(&headers);
    let count = state
        .backend()
        .cart_count(cookies.as_deref())
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to fetch cart count: {e}");
            0
        });

    CartCountTemplate { count }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_drops_empty_fields() {
        assert_eq!(selected(None), None);
        assert_eq!(selected(Some(String::new())), None);
        assert_eq!(selected(Some("  ".to_string())), None);
        assert_eq!(selected(Some("XL".to_string())), Some("XL".to_string()));
    }
}
