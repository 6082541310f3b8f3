//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::HeaderMap, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use apex_sports_core::catalog::HomeSections;

use crate::filters;
use crate::routes::{NavView, ProductCardView, nav_context};
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: NavView,
    /// Discount-led featured strip, at most 5 products.
    pub featured: Vec<ProductCardView>,
    /// Newest men's products.
    pub sneakers: Vec<ProductCardView>,
    /// Newest accessories.
    pub bags_and_hats: Vec<ProductCardView>,
    /// Newest women's products.
    pub womens_picks: Vec<ProductCardView>,
    /// Second window of accessories.
    pub fragrance: Vec<ProductCardView>,
    /// Third window of accessories.
    pub headwear: Vec<ProductCardView>,
    pub error: Option<String>,
}

fn cards(products: &[apex_sports_core::Product]) -> Vec<ProductCardView> {
    products.iter().map(ProductCardView::from).collect()
}

/// Display the home page.
///
/// A failed catalog fetch degrades to empty sections with an error banner
/// rather than an error page; the navbar still renders.
#[instrument(skip(state, session, headers))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> impl IntoResponse {
    let nav = nav_context(&state, &session, &headers).await;

    let (sections, error) = match state.backend().products().await {
        Ok(products) => (HomeSections::build(products.as_ref().clone()), None),
        Err(e) => {
            tracing::error!("Failed to load catalog for home page: {e}");
            (
                HomeSections::default(),
                Some("Could not load products.".to_string()),
            )
        }
    };

    HomeTemplate {
        nav,
        featured: cards(&sections.featured),
        sneakers: cards(&sections.sneakers),
        bags_and_hats: cards(&sections.bags_and_hats),
        womens_picks: cards(&sections.womens_picks),
        fragrance: cards(&sections.fragrance),
        headwear: cards(&sections.headwear),
        error,
    }
}
