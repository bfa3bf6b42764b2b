//! Route handlers organized by domain.

pub mod feedback;
pub mod health;
