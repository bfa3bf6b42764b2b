//! # feedback-core
//!
//! Core crate for the feedback service. Contains configuration schemas,
//! the time-based record identifier, shared query types, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other feedback crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
