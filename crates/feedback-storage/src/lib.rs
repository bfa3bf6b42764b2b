//! # feedback-storage
//!
//! Persistence for feedback records. [`FeedbackStore`] is the seam the
//! service layer talks to; [`JsonFileStore`] keeps every record in a single
//! pretty-printed JSON array on the local filesystem.

pub mod providers;
pub mod store;

pub use providers::json_file::JsonFileStore;
pub use store::FeedbackStore;
