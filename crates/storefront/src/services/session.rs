//! Session synchronisation with the backend's auth state.
//!
//! The backend owns authentication; this storefront only renders it. On
//! every page load we probe `/api/auth/me` and reconcile the result with the
//! profile cached in our own session:
//!
//! - the backend confirms a user: show them and refresh the cache
//! - the backend answers but reports no session: show a guest and clear
//!   the cache, so a stale profile never outlives the real session
//! - the backend is unreachable: fall back to the cached profile if one
//!   exists, otherwise render an indeterminate (guest-looking) state
//!
//! The reconciliation itself is a pure function so it can be tested without
//! a session store or a network.

use tower_sessions::Session;
use tracing::{debug, instrument, warn};

use apex_sports_core::UserProfile;

use crate::backend::{BackendClient, BackendError, SessionProbe};
use crate::models::session_keys;

/// Resolved auth state for the current request.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// The backend could not be reached and nothing is cached.
    Unknown,
    /// The backend confirmed there is no session.
    Guest,
    /// A user is signed in (confirmed or cached).
    Authenticated(UserProfile),
}

impl SessionState {
    /// The profile to render, if any.
    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unknown | Self::Guest => None,
        }
    }
}

/// What to do with the session-cached profile after a probe.
#[derive(Debug, Clone, PartialEq)]
enum CacheUpdate {
    Store(UserProfile),
    Clear,
    Keep,
}

/// Reconcile a probe result with the cached profile.
fn resolve(
    probe: Result<SessionProbe, BackendError>,
    cached: Option<UserProfile>,
) -> (SessionState, CacheUpdate) {
    match probe {
        Ok(SessionProbe {
            success: true,
            user: Some(user),
        }) => (
            SessionState::Authenticated(user.clone()),
            CacheUpdate::Store(user),
        ),
        // An answer without a user means the backend session is gone;
        // a cached profile must not resurrect it.
        Ok(_) => (SessionState::Guest, CacheUpdate::Clear),
        Err(_) => match cached {
            Some(user) => (SessionState::Authenticated(user), CacheUpdate::Keep),
            None => (SessionState::Unknown, CacheUpdate::Keep),
        },
    }
}

/// Probe the backend and reconcile auth state for this request.
///
/// Session store failures are logged and degrade to the probe-only result;
/// a page render never fails because of them.
#[instrument(skip_all)]
pub async fn sync_session(
    backend: &BackendClient,
    session: &Session,
    cookies: Option<&str>,
) -> SessionState {
    let probe = backend.session_probe(cookies).await;
    if let Err(e) = &probe {
        warn!("session probe failed, falling back to cached profile: {e}");
    }

    let cached = cached_profile(session).await;
    let (state, update) = resolve(probe, cached);

    match update {
        CacheUpdate::Store(user) => {
            if let Err(e) = session.insert(session_keys::CACHED_PROFILE, &user).await {
                warn!("failed to cache profile in session: {e}");
            }
        }
        CacheUpdate::Clear => clear_cached_profile(session).await,
        CacheUpdate::Keep => {}
    }

    debug!(state = ?std::mem::discriminant(&state), "session synced");
    state
}

/// Read the cached profile, if any.
pub async fn cached_profile(session: &Session) -> Option<UserProfile> {
    match session.get(session_keys::CACHED_PROFILE).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!("failed to read cached profile from session: {e}");
            None
        }
    }
}

/// Drop the cached profile. Used on logout and when the backend reports
/// the session is gone.
pub async fn clear_cached_profile(session: &Session) {
    if let Err(e) = session
        .remove::<UserProfile>(session_keys::CACHED_PROFILE)
        .await
    {
        warn!("failed to clear cached profile from session: {e}");
    }
}
