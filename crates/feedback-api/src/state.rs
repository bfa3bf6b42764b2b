//! Shared application state threaded through every handler.

use std::sync::Arc;

use feedback_core::config::AppConfig;
use feedback_service::{AccessGate, FeedbackService};
use feedback_storage::JsonFileStore;

/// State available to all handlers via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Submission and listing use cases.
    pub feedback_service: Arc<FeedbackService>,
}

impl AppState {
    /// Wires the JSON file store and feedback service described by `config`.
    pub fn from_config(config: AppConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(config.storage.data_path()));
        let access = AccessGate::from_config(&config.auth);
        let feedback_service = Arc::new(FeedbackService::new(store, access));

        Self {
            config: Arc::new(config),
            feedback_service,
        }
    }
}
