//! Input validation for feedback submissions.

pub mod gate;

pub use gate::ValidationGate;
