//! Request DTOs.

use serde::{Deserialize, Serialize};

use feedback_core::types::SortDirection;

/// Query parameters accepted by `GET /api/feedback`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFeedbackQuery {
    /// Shared-secret access token.
    pub auth: Option<String>,
    /// Optional ordering by creation time: `asc` or `desc`.
    pub sort: Option<SortDirection>,
}
