//! Static-token check guarding the listing operation.

use tracing::warn;

use feedback_core::config::AuthConfig;
use feedback_core::error::AppError;

/// Compares the presented token against the configured shared secret.
///
/// A plain equality check against one process-wide value. It keeps casual
/// visitors out of the listing and nothing more.
#[derive(Clone)]
pub struct AccessGate {
    token: String,
}

impl AccessGate {
    /// Creates a gate accepting exactly `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Creates a gate from the `auth` configuration section.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.access_token.clone())
    }

    /// Succeeds only when `presented` equals the configured token.
    pub fn check(&self, presented: Option<&str>) -> Result<(), AppError> {
        match presented {
            Some(token) if token == self.token => Ok(()),
            Some(_) => {
                warn!("Rejected feedback listing: token mismatch");
                Err(AppError::unauthorized("Unauthorized"))
            }
            None => {
                warn!("Rejected feedback listing: token missing");
                Err(AppError::unauthorized("Unauthorized"))
            }
        }
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate").finish_non_exhaustive()
    }
}
