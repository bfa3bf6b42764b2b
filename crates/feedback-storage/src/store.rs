//! Feedback store trait.

use async_trait::async_trait;

use feedback_core::result::AppResult;
use feedback_entity::FeedbackRecord;

/// Append-only storage for feedback records.
///
/// Records are never updated or removed, so the trait exposes no such
/// operations.
#[async_trait]
pub trait FeedbackStore: Send + Sync + std::fmt::Debug + 'static {
    /// Create the backing location with an empty record set if it is missing.
    ///
    /// Idempotent: existing data is left untouched.
    async fn ensure_exists(&self) -> AppResult<()>;

    /// Persist one more record after all existing ones.
    async fn append(&self, record: &FeedbackRecord) -> AppResult<()>;

    /// Read every stored record in insertion order.
    async fn read_all(&self) -> AppResult<Vec<FeedbackRecord>>;

    /// Check whether the backing location is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
