//! Feedback submission and listing.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::info;

use feedback_core::error::{AppError, ErrorKind};
use feedback_core::types::{IdGenerator, SortDirection};
use feedback_entity::FeedbackRecord;
use feedback_storage::FeedbackStore;

use crate::access::AccessGate;
use crate::validation::ValidationGate;

/// Accepts new feedback and serves the protected listing.
#[derive(Debug)]
pub struct FeedbackService {
    /// Record persistence.
    store: Arc<dyn FeedbackStore>,
    /// Submission schema check.
    validation: ValidationGate,
    /// Listing token check.
    access: AccessGate,
    /// Time-based id source.
    ids: IdGenerator,
}

impl FeedbackService {
    /// Creates a new feedback service.
    pub fn new(store: Arc<dyn FeedbackStore>, access: AccessGate) -> Self {
        Self {
            store,
            validation: ValidationGate::new(),
            access,
            ids: IdGenerator::new(),
        }
    }

    /// Validates and persists a submission, returning the stored record.
    ///
    /// Nothing touches the store unless validation passes.
    pub async fn submit(&self, input: &Value) -> Result<FeedbackRecord, AppError> {
        let feedback = self.validation.validate(input)?;

        let now = Utc::now();
        let record = FeedbackRecord::new(self.ids.next_id(now), feedback, now);

        self.store.ensure_exists().await.map_err(save_failed)?;
        self.store.append(&record).await.map_err(save_failed)?;

        info!(id = %record.id, rating = record.rating, "Feedback saved");
        Ok(record)
    }

    /// Lists every record after checking `token`.
    ///
    /// With `order` set, records are sorted by creation time (ties keep
    /// their stored order); otherwise they come back as stored.
    pub async fn list(
        &self,
        token: Option<&str>,
        order: Option<SortDirection>,
    ) -> Result<Vec<FeedbackRecord>, AppError> {
        self.access.check(token)?;

        self.store.ensure_exists().await.map_err(read_failed)?;
        let mut records = self.store.read_all().await.map_err(read_failed)?;

        if let Some(direction) = order {
            records.sort_by(|a, b| direction.apply(a.created_at.cmp(&b.created_at)));
        }

        Ok(records)
    }

    /// Whether the underlying store is reachable.
    pub async fn storage_available(&self) -> bool {
        self.store.health_check().await.unwrap_or(false)
    }
}

fn save_failed(err: AppError) -> AppError {
    AppError::with_source(ErrorKind::Storage, "Failed to save feedback", err)
}

fn read_failed(err: AppError) -> AppError {
    AppError::with_source(ErrorKind::Storage, "Failed to read feedback", err)
}
