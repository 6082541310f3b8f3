//! User profile view object.

use serde::{Deserialize, Serialize};

/// The session's view of a logged-in user, as reported by `/api/auth/me`.
///
/// Carries no ID - the backend session cookie is the identity. The
/// storefront only caches the last profile it saw; the authoritative copy
/// lives server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Avatar image URL, if the user has one.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserProfile {
    /// Short display name for the navbar: first name, or email as fallback.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            &self.email
        } else {
            &self.first_name
        }
    }
}
