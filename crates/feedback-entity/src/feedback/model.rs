//! Feedback record entity model.

use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use feedback_core::types::FeedbackId;

/// A validated submission that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    /// Submitter's display name.
    pub name: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
}

/// A stored feedback submission. Never mutated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// Time-based unique identifier.
    pub id: FeedbackId,
    /// Submitter's display name.
    pub name: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
    /// Server time at which the record was created.
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Stamp a validated submission with its id and creation time.
    ///
    /// `created_at` is truncated to whole milliseconds so the value survives
    /// a round trip through the persisted file unchanged.
    pub fn new(id: FeedbackId, input: NewFeedback, created_at: DateTime<Utc>) -> Self {
        let created_at = created_at
            .duration_trunc(TimeDelta::milliseconds(1))
            .unwrap_or(created_at);

        Self {
            id,
            name: input.name,
            rating: input.rating,
            comment: input.comment,
            created_at,
        }
    }

    /// The submission fields of this record.
    pub fn submission(&self) -> NewFeedback {
        NewFeedback {
            name: self.name.clone(),
            rating: self.rating,
            comment: self.comment.clone(),
        }
    }
}
