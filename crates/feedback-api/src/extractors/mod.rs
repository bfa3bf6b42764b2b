//! Extractors whose rejections render as [`ApiError`](crate::ApiError) JSON.

use axum::Json;
use axum::extract::Query;
use axum_extra::extract::WithRejection;

use crate::error::ApiError;

/// JSON body extractor with API-shaped rejections.
pub type ApiJson<T> = WithRejection<Json<T>, ApiError>;

/// Query string extractor with API-shaped rejections.
pub type ApiQuery<T> = WithRejection<Query<T>, ApiError>;
