//! Core domain layer for Crudkit.
//!
//! This module contains pure business logic with ZERO I/O:
//! the field and relation parsers, the naming derivations, the render
//! context, and the scaffold plan. All filesystem and stub concerns are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services

// Public API - what the world sees
pub mod artifact;
pub mod context;
pub mod error;
pub mod field;
pub mod naming;
pub mod plan;
pub mod relation;
pub mod request;

// Re-exports for convenience
pub use artifact::{ArtifactKind, Stub, StubSource};
pub use context::RenderContext;
pub use error::{DomainError, ErrorCategory};
pub use field::{FieldKind, FieldSpec, KIND_CATALOG, KindInfo, parse_fields};
pub use naming::ModelName;
pub use plan::{FileToWrite, RouteAppend, RouteFile, ScaffoldPlan};
pub use relation::{RelationKind, RelationSpec, parse_relations};
pub use request::GenerateRequest;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module scenario tests (the canonical Task example)
    // ========================================================================

    #[test]
    fn task_scenario_parses_end_to_end() {
        let model = ModelName::new("Task").unwrap();
        let fields = parse_fields("title:string,status:enum(open,closed)").unwrap();
        let relations = parse_relations("user:belongsTo").unwrap();

        assert_eq!(model.table_name(), "tasks");
        assert_eq!(fields.len(), 2);
        assert_eq!(
            fields[1].kind,
            FieldKind::Enum(vec!["open".into(), "closed".into()])
        );
        assert_eq!(relations[0].kind, RelationKind::BelongsTo);
    }

    #[test]
    fn task_scenario_migration_lines_in_order() {
        let fields = parse_fields("title:string,status:enum(open,closed)").unwrap();
        let lines: Vec<String> = fields.iter().map(|f| f.migration_line()).collect();

        assert_eq!(
            lines,
            [
                "$table->string('title');",
                "$table->enum('status', ['open', 'closed']);",
            ]
        );
    }

    #[test]
    fn task_scenario_route_lines() {
        let model = ModelName::new("Task").unwrap();
        assert!(RouteAppend::api(&model).line.contains("'tasks'"));
        assert!(RouteAppend::api(&model).line.contains("TaskController"));
        assert!(RouteAppend::web(&model).line.contains("TaskController"));
    }
}
