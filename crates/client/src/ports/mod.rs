//! Port traits consumed by the application layer and implemented by the
//! infrastructure adapters.

pub mod outbound;
