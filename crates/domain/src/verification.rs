//! Verification submission state machine.
//!
//! Wraps a [`SegmentedCode`] with the submit protocol the verification
//! screens share: gate the submission, mark it in flight, then resolve it.
//! The remote call itself happens between `begin_submit` and the matching
//! `resolve_*`, outside this type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::code::SegmentedCode;

/// Whether a failed verification keeps the entered code for correction or
/// wipes it. The two screens this flow replaced disagreed, so the choice
/// stays configurable per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Leave the code in place so the user can fix a single digit.
    #[default]
    KeepCode,
    /// Clear the code and make the user start over.
    ClearCode,
}

/// Where the flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationPhase {
    #[default]
    Idle,
    Submitting,
    Verified,
}

/// Why a submit attempt was refused before reaching the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Not every slot is filled yet. Surfaced inline, never sent remotely.
    #[error("Enter all {expected} digits of the code")]
    Incomplete { expected: usize },
    /// A submission is already in flight; overlapping attempts are dropped
    /// so at most one verify call can result.
    #[error("Verification is already in progress")]
    AlreadySubmitting,
}

/// Code entry plus submission state for one verification screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationFlow {
    code: SegmentedCode,
    phase: VerificationPhase,
    error: Option<String>,
    failure_policy: FailurePolicy,
}

impl VerificationFlow {
    /// A fresh flow with an empty standard-length code.
    pub fn new() -> Self {
        Self::with_policy(FailurePolicy::default())
    }

    /// A fresh flow with an explicit failure policy.
    pub fn with_policy(failure_policy: FailurePolicy) -> Self {
        Self {
            code: SegmentedCode::new(),
            phase: VerificationPhase::Idle,
            error: None,
            failure_policy,
        }
    }

    pub fn code(&self) -> &SegmentedCode {
        &self.code
    }

    /// Mutable access for the input widget. Editing while a submission is
    /// in flight is prevented by the widget (inputs are disabled), not here.
    pub fn code_mut(&mut self) -> &mut SegmentedCode {
        &mut self.code
    }

    pub fn phase(&self) -> VerificationPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == VerificationPhase::Submitting
    }

    /// The retryable error from the last failed submission, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Gate a submission attempt.
    ///
    /// Succeeds only from `Idle` with a complete code, moving the flow to
    /// `Submitting` and yielding the joined code for the remote call. The
    /// caller must follow up with [`resolve_success`](Self::resolve_success)
    /// or [`resolve_failure`](Self::resolve_failure).
    pub fn begin_submit(&mut self) -> Result<String, SubmitError> {
        if self.phase != VerificationPhase::Idle {
            return Err(SubmitError::AlreadySubmitting);
        }
        let code = self.code.value().ok_or(SubmitError::Incomplete {
            expected: self.code.len(),
        })?;
        self.phase = VerificationPhase::Submitting;
        self.error = None;
        Ok(code)
    }

    /// The in-flight submission was accepted.
    pub fn resolve_success(&mut self) {
        self.phase = VerificationPhase::Verified;
        self.error = None;
    }

    /// The in-flight submission was rejected. Returns to `Idle` so the
    /// user can retry; the entered code survives or not per the policy.
    pub fn resolve_failure(&mut self, message: impl Into<String>) {
        self.phase = VerificationPhase::Idle;
        self.error = Some(message.into());
        if self.failure_policy == FailurePolicy::ClearCode {
            self.code.clear();
        }
    }
}

impl Default for VerificationFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::PastePolicy;

    fn complete_flow(policy: FailurePolicy) -> VerificationFlow {
        let mut flow = VerificationFlow::with_policy(policy);
        flow.code_mut().paste("123456", PastePolicy::KeepRemainder);
        flow
    }

    #[test]
    fn submit_is_refused_while_incomplete() {
        let mut flow = VerificationFlow::new();
        flow.code_mut().paste("123", PastePolicy::KeepRemainder);
        assert_eq!(
            flow.begin_submit(),
            Err(SubmitError::Incomplete { expected: 6 })
        );
        assert_eq!(flow.phase(), VerificationPhase::Idle);
    }

    #[test]
    fn submit_yields_the_joined_code() {
        let mut flow = complete_flow(FailurePolicy::KeepCode);
        assert_eq!(flow.begin_submit().as_deref(), Ok("123456"));
        assert!(flow.is_submitting());
    }

    #[test]
    fn overlapping_submit_attempts_are_dropped() {
        let mut flow = complete_flow(FailurePolicy::KeepCode);
        assert!(flow.begin_submit().is_ok());
        assert_eq!(flow.begin_submit(), Err(SubmitError::AlreadySubmitting));
    }

    #[test]
    fn submit_after_success_is_refused() {
        let mut flow = complete_flow(FailurePolicy::KeepCode);
        flow.begin_submit().ok();
        flow.resolve_success();
        assert_eq!(flow.phase(), VerificationPhase::Verified);
        assert_eq!(flow.begin_submit(), Err(SubmitError::AlreadySubmitting));
    }

    #[test]
    fn failure_keeps_code_under_keep_policy() {
        let mut flow = complete_flow(FailurePolicy::KeepCode);
        flow.begin_submit().ok();
        flow.resolve_failure("That code didn't match");
        assert_eq!(flow.phase(), VerificationPhase::Idle);
        assert_eq!(flow.error(), Some("That code didn't match"));
        assert_eq!(flow.code().value().as_deref(), Some("123456"));
    }

    #[test]
    fn failure_clears_code_under_clear_policy() {
        let mut flow = complete_flow(FailurePolicy::ClearCode);
        flow.begin_submit().ok();
        flow.resolve_failure("That code didn't match");
        assert!(flow.code().is_empty());
        assert_eq!(flow.error(), Some("That code didn't match"));
    }

    #[test]
    fn retry_after_failure_goes_through() {
        let mut flow = complete_flow(FailurePolicy::KeepCode);
        flow.begin_submit().ok();
        flow.resolve_failure("nope");
        assert_eq!(flow.begin_submit().as_deref(), Ok("123456"));
        assert_eq!(flow.error(), None, "starting a retry clears the old error");
    }

    #[test]
    fn dismissing_the_error_is_local() {
        let mut flow = complete_flow(FailurePolicy::KeepCode);
        flow.begin_submit().ok();
        flow.resolve_failure("nope");
        flow.dismiss_error();
        assert_eq!(flow.error(), None);
        assert_eq!(flow.code().value().as_deref(), Some("123456"));
    }
}
