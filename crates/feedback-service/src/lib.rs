//! # feedback-service
//!
//! Business logic for the feedback service: the validation gate that every
//! submission passes before persistence, the access gate in front of the
//! listing, and [`FeedbackService`] which orchestrates both around a
//! [`FeedbackStore`](feedback_storage::FeedbackStore).
//!
//! Services follow constructor injection; the store arrives as an `Arc`.

pub mod access;
pub mod feedback;
pub mod validation;

pub use access::AccessGate;
pub use feedback::FeedbackService;
pub use validation::ValidationGate;
