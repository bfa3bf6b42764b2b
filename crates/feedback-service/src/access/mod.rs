//! Shared-secret access control for the feedback listing.

pub mod gate;

pub use gate::AccessGate;
