//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudkit-adapters` crate provides implementations.

use crate::domain::{ArtifactKind, RenderContext, Stub};
use crate::error::CrudkitResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudkit_adapters::filesystem::LocalFilesystem` (production)
/// - `crudkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Writes overwrite; appends create the file if it does not exist
/// - `read_file` distinguishes "missing" (`Ok(None)`) from I/O failure,
///   which the route merge step relies on
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CrudkitResult<()>;

    /// Write content to a file, overwriting any existing content.
    fn write_file(&self, path: &Path, content: &str) -> CrudkitResult<()>;

    /// Read a file's content; `Ok(None)` if the file does not exist.
    fn read_file(&self, path: &Path) -> CrudkitResult<Option<String>>;

    /// Append content to a file, creating it if missing.
    fn append_file(&self, path: &Path, content: &str) -> CrudkitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for stub storage and retrieval.
///
/// Implemented by:
/// - `crudkit_adapters::stub_store::InMemoryStubStore` (built-in stubs)
/// - (future: a filesystem store for user-overridden stubs)
pub trait StubStore: Send + Sync {
    /// Get the stub for an artifact kind.
    fn get(&self, artifact: ArtifactKind) -> CrudkitResult<Stub>;

    /// List all available stubs.
    fn list(&self) -> CrudkitResult<Vec<Stub>>;

    /// Insert or replace a stub.
    fn insert(&self, stub: Stub) -> CrudkitResult<()>;
}

/// Port for stub rendering.
///
/// Implemented by:
/// - `crudkit_adapters::renderer::SimpleRenderer` (variable substitution)
/// - (future: a real template engine if stubs grow conditionals)
pub trait StubRenderer: Send + Sync {
    /// Render a stub into final artifact text.
    fn render(&self, stub: &Stub, context: &RenderContext) -> CrudkitResult<String>;
}
