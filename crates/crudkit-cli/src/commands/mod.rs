//! Command handlers.

pub mod completions;
pub mod make;
pub mod types;
