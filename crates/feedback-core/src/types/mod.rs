//! Core type definitions used across the feedback workspace.

pub mod id;
pub mod sorting;

pub use id::{FeedbackId, IdGenerator};
pub use sorting::SortDirection;
