//! Crudkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Crudkit
//! CRUD scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          crudkit-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Stubs, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudkit-adapters (Infrastructure)    │
//! │  (InMemoryStubStore, LocalFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (FieldSpec, RelationSpec, ModelName,   │
//! │   RenderContext, ScaffoldPlan)          │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crudkit_core::{
//!     application::GenerateService,
//!     domain::{parse_fields, parse_relations, GenerateRequest, ModelName},
//! };
//!
//! // 1. Parse user input
//! let model = ModelName::new("Task").unwrap();
//! let fields = parse_fields("title:string,status:enum(open,closed)").unwrap();
//! let relations = parse_relations("user:belongsTo").unwrap();
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(stubs, renderer, filesystem);
//! let request = GenerateRequest::new(model, fields, relations, ".");
//! service.generate(&request).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService,
        ports::{Filesystem, StubRenderer, StubStore},
    };
    pub use crate::domain::{
        ArtifactKind, FieldKind, FieldSpec, GenerateRequest, ModelName, RelationKind,
        RelationSpec, RenderContext, RouteAppend, RouteFile, ScaffoldPlan, Stub, StubSource,
        parse_fields, parse_relations,
    };
    pub use crate::error::{CrudkitError, CrudkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
