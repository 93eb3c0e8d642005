//! Auth state management using Dioxus signals
//!
//! Holds the signed-in session. Provided as context at the app root;
//! screens read and update it through the accessors.

use dioxus::prelude::*;

use crate::application::dto::Session;

/// Session state for the whole app
#[derive(Clone, Copy)]
pub struct AuthState {
    session: Signal<Option<Session>>,
}

impl AuthState {
    /// Create a signed-out state
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
        }
    }

    /// Session accessor (for dashboard gating and the header)
    pub fn session(&self) -> Signal<Option<Session>> {
        self.session
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_some()
    }

    /// Store the session after sign-in or verification
    pub fn set_session(&mut self, session: Session) {
        self.session.set(Some(session));
    }

    /// Clear the session (sign out)
    pub fn clear(&mut self) {
        self.session.set(None);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
