//! Application layer: DTOs, service errors, and async services over the
//! outbound ports.

pub mod dto;
pub mod error;
pub mod services;
