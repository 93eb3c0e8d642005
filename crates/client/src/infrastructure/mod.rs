//! Infrastructure adapters.

pub mod http;

pub use http::{ApiAdapter, DEFAULT_API_URL};
