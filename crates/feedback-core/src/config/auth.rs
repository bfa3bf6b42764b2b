//! Listing access token configuration.

use serde::{Deserialize, Serialize};

/// Shared secret guarding the feedback listing.
///
/// This is a static query-string token, not an authentication system.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Value the `auth` query parameter must equal.
    #[serde(default = "default_access_token")]
    pub access_token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token: default_access_token(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

fn default_access_token() -> String {
    "1234".to_string()
}
