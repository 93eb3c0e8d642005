//! Unified Marque client crate.
//!
//! This crate contains UI, application logic, and the HTTP infrastructure
//! adapter for the Marque brand marketplace desktop client.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::Route;
