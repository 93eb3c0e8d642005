//! Presentation layer: components, signal state, and service providers.

pub mod components;
pub mod services;
pub mod state;

pub use services::Services;
