//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and `FEEDBACK__`-prefixed environment variables.
//! Every field carries a default, so the service starts with no files at all.

pub mod app;
pub mod auth;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Feedback data file settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Listing access token settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, the `config/{env}` overlay and environment
    /// variables prefixed with `FEEDBACK` (nested keys separated by `__`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from TOML files under `dir`.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        Self::load_with_vars(dir, env, None)
    }

    /// Like [`load_from`](Self::load_from), reading `FEEDBACK__*` variables
    /// from `vars` instead of the process environment when given.
    fn load_with_vars(
        dir: &str,
        env: &str,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FEEDBACK")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
