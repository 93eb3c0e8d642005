//! Common reusable UI components.
//!
//! Shared form controls and banners used across multiple screens.

mod error_banner;
mod form_field;

pub use error_banner::ErrorBanner;
pub use form_field::FormField;
