//! Presentation components.

pub mod common;

mod code_input;
pub use code_input::CodeInput;
