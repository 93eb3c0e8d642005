//! Outbound ports: what the client needs from the outside world.

use thiserror::Error;

mod auth_port;
mod catalog_port;

pub use auth_port::AuthPort;
pub use catalog_port::CatalogPort;

#[cfg(any(test, feature = "testing"))]
pub use auth_port::MockAuthPort;
#[cfg(any(test, feature = "testing"))]
pub use catalog_port::MockCatalogPort;

/// Failures crossing an outbound port.
///
/// Adapters translate their transport's errors into these variants so the
/// application layer never sees an HTTP status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("verification code rejected")]
    CodeRejected,
    #[error("not found")]
    NotFound,
    #[error("rate limited")]
    RateLimited,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Protocol(String),
}
