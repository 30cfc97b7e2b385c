//! Application services - use case orchestration.
//!
//! Services coordinate domain logic and ports. They contain NO business
//! rules (those live in the domain) and NO I/O details (those live in
//! adapters).

pub mod generate_service;

pub use generate_service::{GenerateReport, GenerateService};
