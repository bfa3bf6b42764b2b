//! Feedback submission and listing use cases.

pub mod service;

pub use service::FeedbackService;
