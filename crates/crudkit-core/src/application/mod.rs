//! Application layer - use case orchestration.
//!
//! This layer sits between the domain (business logic) and the adapters
//! (infrastructure). It defines ports (traits) that adapters implement,
//! and services that orchestrate domain operations through those ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{Filesystem, StubRenderer, StubStore};
pub use services::{GenerateReport, GenerateService};
