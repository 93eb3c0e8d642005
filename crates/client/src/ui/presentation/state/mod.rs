//! Signal-backed UI state shared across routes.

mod auth_state;

pub use auth_state::AuthState;
