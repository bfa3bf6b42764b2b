//! # feedback-api
//!
//! HTTP API layer for the feedback service built on Axum.
//!
//! Provides the submission and listing endpoints, a health probe,
//! middleware (CORS, request logging), body/query extractors, and the
//! mapping from `AppError` to JSON error responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
