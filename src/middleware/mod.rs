//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::{AuthenticatedUser, OptionalAuth};
pub use logging::logging_middleware;
