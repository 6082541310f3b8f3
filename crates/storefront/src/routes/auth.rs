//! Authentication route handlers.
//!
//! Login and registration happen on the backend's own pages; the storefront
//! only needs to end sessions. Logout clears the locally cached profile even
//! when the backend call fails, so the navbar never shows a user the backend
//! no longer recognises.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::routes::forward_cookies;
use crate::services::session::clear_cached_profile;
use crate::state::AppState;

/// Log the user out and return to the home page.
#[instrument(skip(state, session, headers))]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> impl IntoResponse {
    let cookies = forward_cookies(&headers);

    if let Err(e) = state.backend().logout(cookies.as_deref()).await {
        tracing::warn!("Backend logout failed, clearing local state anyway: {e}");
    }

    clear_cached_profile(&session).await;

    Redirect::to("/")
}
