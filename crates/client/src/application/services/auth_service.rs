//! Auth Service - application service for accounts and verification
//!
//! Maps port failures into `ServiceError` and logs outcomes. The
//! verification submit protocol itself (completeness gate, single-flight
//! guard, failure policy) lives in `marque_domain::VerificationFlow`; the
//! verification screen drives that flow around `verify_code`.

use std::sync::Arc;

use crate::application::dto::{Session, SignUpData};
use crate::application::error::ServiceError;
use crate::ports::outbound::AuthPort;

/// Auth service for sign-in, sign-up, verification, and password reset
#[derive(Clone)]
pub struct AuthService {
    auth: Arc<dyn AuthPort>,
}

impl AuthService {
    /// Create a new AuthService over the given port
    pub fn new(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    /// Exchange credentials for a session
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ServiceError> {
        let session = self.auth.sign_in(email, password).await?;
        tracing::info!(email, "signed in");
        Ok(session)
    }

    /// Create an account; the caller moves on to the verification screen
    pub async fn sign_up(&self, data: &SignUpData) -> Result<(), ServiceError> {
        self.auth.sign_up(data).await?;
        tracing::info!(email = %data.email, "account created, verification pending");
        Ok(())
    }

    /// Submit a complete verification code for the identifier.
    ///
    /// Callers must only pass codes obtained from
    /// `VerificationFlow::begin_submit`, which enforces completeness and
    /// the one-in-flight guarantee.
    pub async fn verify_code(&self, identifier: &str, code: &str) -> Result<Session, ServiceError> {
        let session = self.auth.verify(identifier, code).await?;
        tracing::info!(identifier, "email verified");
        Ok(session)
    }

    /// Ask for a fresh verification code. On success the caller starts the
    /// resend cooldown; on failure it must not.
    pub async fn resend_code(&self, identifier: &str) -> Result<(), ServiceError> {
        self.auth.resend(identifier).await?;
        tracing::info!(identifier, "verification code resent");
        Ok(())
    }

    /// Ask for a password reset email
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ServiceError> {
        self.auth.request_password_reset(email).await?;
        Ok(())
    }

    /// Finish a password reset. `code` follows the same gating rules as
    /// `verify_code`.
    pub async fn complete_password_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), ServiceError> {
        self.auth
            .complete_password_reset(email, code, new_password)
            .await?;
        tracing::info!(email, "password reset completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{ApiError, MockAuthPort};
    use chrono::Utc;
    use marque_domain::{PastePolicy, SubmitError, VerificationFlow};
    use uuid::Uuid;

    fn sample_session() -> Session {
        Session {
            user_id: Uuid::nil(),
            email: "maya@example.com".into(),
            display_name: "Maya".into(),
            token: "tok".into(),
            expires_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn incomplete_flow_never_reaches_the_port() {
        let mut mock = MockAuthPort::new();
        mock.expect_verify().times(0);
        let svc = AuthService::new(Arc::new(mock));

        let mut flow = VerificationFlow::new();
        flow.code_mut().paste("123", PastePolicy::KeepRemainder);

        match flow.begin_submit() {
            Err(SubmitError::Incomplete { expected: 6 }) => {}
            other => panic!("expected incomplete rejection, got {other:?}"),
        }
        // No code means nothing to hand to the service.
        drop(svc);
    }

    #[tokio::test]
    async fn overlapping_submits_call_verify_exactly_once() {
        let mut mock = MockAuthPort::new();
        mock.expect_verify()
            .times(1)
            .returning(|_, _| Ok(sample_session()));
        let svc = AuthService::new(Arc::new(mock));

        let mut flow = VerificationFlow::new();
        flow.code_mut().paste("123456", PastePolicy::KeepRemainder);

        let code = flow.begin_submit().expect("first submit passes the gate");
        // A second attempt while the first is in flight is dropped before
        // it can produce a code to send.
        assert_eq!(flow.begin_submit(), Err(SubmitError::AlreadySubmitting));

        let session = svc.verify_code("maya@example.com", &code).await;
        assert!(session.is_ok());
        flow.resolve_success();
    }

    #[tokio::test]
    async fn rejected_code_maps_to_a_retryable_error() {
        let mut mock = MockAuthPort::new();
        mock.expect_verify()
            .times(1)
            .returning(|_, _| Err(ApiError::CodeRejected));
        let svc = AuthService::new(Arc::new(mock));

        let mut flow = VerificationFlow::new();
        flow.code_mut().paste("123456", PastePolicy::KeepRemainder);
        let code = flow.begin_submit().expect("complete code passes the gate");

        let err = svc
            .verify_code("maya@example.com", &code)
            .await
            .expect_err("port rejection surfaces");
        flow.resolve_failure(err.user_message());

        assert!(!flow.is_submitting(), "flow returns to idle for a retry");
        assert_eq!(
            flow.code().value().as_deref(),
            Some("123456"),
            "default policy keeps the entered code"
        );
    }

    #[tokio::test]
    async fn resend_passes_the_identifier_through() {
        let mut mock = MockAuthPort::new();
        mock.expect_resend()
            .times(1)
            .withf(|identifier| identifier == "maya@example.com")
            .returning(|_| Ok(()));
        let svc = AuthService::new(Arc::new(mock));
        assert!(svc.resend_code("maya@example.com").await.is_ok());
    }

    #[tokio::test]
    async fn sign_in_maps_credential_rejection() {
        let mut mock = MockAuthPort::new();
        mock.expect_sign_in()
            .returning(|_, _| Err(ApiError::InvalidCredentials));
        let svc = AuthService::new(Arc::new(mock));
        let err = svc
            .sign_in("maya@example.com", "wrong")
            .await
            .expect_err("bad credentials are rejected");
        assert!(err.user_message().contains("incorrect"));
    }
}
