//! Feedback submission and listing handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;
use serde_json::Value;

use feedback_entity::FeedbackRecord;

use crate::dto::request::ListFeedbackQuery;
use crate::error::ApiError;
use crate::extractors::{ApiJson, ApiQuery};
use crate::state::AppState;

/// POST /api/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    WithRejection(Json(body), _): ApiJson<Value>,
) -> Result<(StatusCode, Json<FeedbackRecord>), ApiError> {
    let record = state.feedback_service.submit(&body).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/feedback?auth=<token>[&sort=asc|desc]
pub async fn list_feedback(
    State(state): State<AppState>,
    WithRejection(Query(params), _): ApiQuery<ListFeedbackQuery>,
) -> Result<Json<Vec<FeedbackRecord>>, ApiError> {
    let records = state
        .feedback_service
        .list(params.auth.as_deref(), params.sort)
        .await?;

    Ok(Json(records))
}
