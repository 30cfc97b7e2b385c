//! Simple variable substitution renderer.

use crudkit_core::{
    application::ports::StubRenderer,
    domain::{RenderContext, Stub},
    error::CrudkitResult,
};
use tracing::instrument;

/// Renderer using basic `{{VARIABLE}}` substitution.
///
/// Sufficient for the built-in stubs, which have no conditionals or loops
/// (block content is precomputed into the context by the generate service).
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StubRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(artifact = %stub.artifact))]
    fn render(&self, stub: &Stub, context: &RenderContext) -> CrudkitResult<String> {
        Ok(context.render(stub.as_str()))
    }
}
