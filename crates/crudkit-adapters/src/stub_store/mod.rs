//! Stub store adapters.

mod memory;

pub use memory::InMemoryStubStore;
