//! # feedback-entity
//!
//! Domain entity models for the feedback service. Every struct in this
//! crate is either a persisted record or a value object on its way to
//! becoming one; all derive `Debug`, `Clone`, `Serialize` and `Deserialize`.

pub mod feedback;

pub use feedback::{FeedbackRecord, NewFeedback};
