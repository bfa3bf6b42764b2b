//! Feedback domain entities.

pub mod model;
pub mod timestamp;

pub use model::{FeedbackRecord, NewFeedback};
