//! Request and response shapes that exist only at the HTTP boundary.

pub mod request;
pub mod response;
