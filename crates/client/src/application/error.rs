//! Service layer error types
//!
//! This module defines errors that can occur in the application service
//! layer, abstracting over transport-specific failures from the adapters.

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The server understood the request and refused it
    Rejected(ApiError),
    /// The request never completed (connectivity, timeout)
    Network(String),
    /// The response could not be interpreted
    Protocol(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Rejected(e) => write!(f, "Request rejected: {}", e),
            ServiceError::Network(msg) => write!(f, "Network error: {}", msg),
            ServiceError::Protocol(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Network(msg) => ServiceError::Network(msg),
            ApiError::Protocol(msg) => ServiceError::Protocol(msg),
            other => ServiceError::Rejected(other),
        }
    }
}

impl ServiceError {
    /// Message suitable for an inline banner. Network and protocol details
    /// are collapsed into something a user can act on.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Rejected(ApiError::InvalidCredentials) => {
                "Email or password is incorrect".to_string()
            }
            ServiceError::Rejected(ApiError::CodeRejected) => {
                "That code didn't match. Check it and try again".to_string()
            }
            ServiceError::Rejected(ApiError::NotFound) => {
                "We couldn't find an account for that address".to_string()
            }
            ServiceError::Rejected(ApiError::RateLimited) => {
                "Too many attempts. Wait a moment and try again".to_string()
            }
            ServiceError::Rejected(e) => e.to_string(),
            ServiceError::Network(_) => {
                "We couldn't reach the server. Check your connection and try again".to_string()
            }
            ServiceError::Protocol(_) => "Something went wrong on our side. Try again".to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Rejected(ApiError::NotFound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_map_to_network() {
        let err = ServiceError::from(ApiError::Network("connection refused".into()));
        assert_eq!(err, ServiceError::Network("connection refused".into()));
    }

    #[test]
    fn rejections_keep_their_cause() {
        let err = ServiceError::from(ApiError::CodeRejected);
        assert_eq!(err, ServiceError::Rejected(ApiError::CodeRejected));
        assert!(err.user_message().contains("didn't match"));
    }
}
