//! Auth Port - account and verification operations
//!
//! Covers the whole auth surface: credentials, sign-up, email verification,
//! and password reset requests. `verify` is only ever called with a
//! complete code; the gating lives in `marque_domain::VerificationFlow`.

use crate::application::dto::{Session, SignUpData};
use crate::ports::outbound::ApiError;

/// Port for authentication and verification calls
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchange credentials for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ApiError>;

    /// Create an account. The account stays unverified until `verify`
    /// succeeds for the same identifier.
    async fn sign_up(&self, data: &SignUpData) -> Result<(), ApiError>;

    /// Submit a verification code for the given identifier (email).
    async fn verify(&self, identifier: &str, code: &str) -> Result<Session, ApiError>;

    /// Ask the server to send a fresh verification code.
    async fn resend(&self, identifier: &str) -> Result<(), ApiError>;

    /// Ask the server to start a password reset for the address.
    async fn request_password_reset(&self, email: &str) -> Result<(), ApiError>;

    /// Finish a password reset with the emailed code and the new password.
    async fn complete_password_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), ApiError>;
}
