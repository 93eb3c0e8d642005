//! Marque domain layer.
//!
//! Pure client-side logic shared by the UI: the segmented code model, the
//! verification submission state machine, the resend cooldown, and form
//! validation. No I/O and no UI framework dependencies live here.

pub mod code;
pub mod cooldown;
pub mod validation;
pub mod verification;

pub use code::{BackspaceEffect, PastePolicy, SegmentedCode, CODE_LENGTH};
pub use cooldown::{ResendCooldown, RESEND_COOLDOWN_SECS};
pub use validation::{FieldError, ResetRequestForm, SignInForm, SignUpForm, MIN_PASSWORD_LEN};
pub use verification::{FailurePolicy, SubmitError, VerificationFlow, VerificationPhase};
