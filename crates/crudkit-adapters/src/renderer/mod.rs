//! Stub renderer adapters.

mod simple;

pub use simple::SimpleRenderer;
