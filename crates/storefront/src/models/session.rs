//! Session-related types.
//!
//! Types stored in the session for authentication state.

/// Session keys for authentication data.
pub mod keys {
    /// Key for the cached backend user profile.
    ///
    /// The cached profile is a mirror of what the backend last told us, so
    /// the navbar can keep showing the user when the backend is briefly
    /// unreachable. It is cleared as soon as the backend reports the
    /// session is gone.
    pub const CACHED_PROFILE: &str = "cached_profile";
}
