//! Generated artifact kinds and their stub templates.
//!
//! An [`ArtifactKind`] names one output file category; a [`Stub`] is the
//! placeholder-bearing template text for that category. Stubs are defined in
//! the adapters crate (built-in) and resolved through the `StubStore` port —
//! the domain only knows the kinds and where each artifact lands on disk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::domain::naming::ModelName;

/// The output file categories of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Model,
    Migration,
    Controller,
    StoreRequest,
    UpdateRequest,
    ViewIndex,
    ViewCreate,
    ViewEdit,
    ViewShow,
}

impl ArtifactKind {
    /// All kinds, in generation order. The order is stable so plans (and the
    /// files they report) are deterministic.
    pub const fn all() -> [Self; 9] {
        [
            Self::Model,
            Self::Migration,
            Self::Controller,
            Self::StoreRequest,
            Self::UpdateRequest,
            Self::ViewIndex,
            Self::ViewCreate,
            Self::ViewEdit,
            Self::ViewShow,
        ]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Migration => "migration",
            Self::Controller => "controller",
            Self::StoreRequest => "store-request",
            Self::UpdateRequest => "update-request",
            Self::ViewIndex => "view-index",
            Self::ViewCreate => "view-create",
            Self::ViewEdit => "view-edit",
            Self::ViewShow => "view-show",
        }
    }

    /// Output path for this artifact, relative to the application root.
    ///
    /// `migration_prefix` is the timestamp fragment for the migration
    /// filename (`2026_08_27_120000`); it is threaded in rather than read
    /// from the clock so planning stays pure.
    pub fn output_path(&self, model: &ModelName, migration_prefix: &str) -> PathBuf {
        let class = model.class_name();
        let table = model.table_name();

        match self {
            Self::Model => PathBuf::from(format!("app/Models/{class}.php")),
            Self::Migration => PathBuf::from(format!(
                "database/migrations/{migration_prefix}_create_{table}_table.php"
            )),
            Self::Controller => {
                PathBuf::from(format!("app/Http/Controllers/{class}Controller.php"))
            }
            Self::StoreRequest => {
                PathBuf::from(format!("app/Http/Requests/{class}StoreRequest.php"))
            }
            Self::UpdateRequest => {
                PathBuf::from(format!("app/Http/Requests/{class}UpdateRequest.php"))
            }
            Self::ViewIndex => PathBuf::from(format!("resources/views/{table}/index.blade.php")),
            Self::ViewCreate => PathBuf::from(format!("resources/views/{table}/create.blade.php")),
            Self::ViewEdit => PathBuf::from(format!("resources/views/{table}/edit.blade.php")),
            Self::ViewShow => PathBuf::from(format!("resources/views/{table}/show.blade.php")),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stub template for one artifact kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stub {
    pub artifact: ArtifactKind,
    pub content: StubSource,
}

impl Stub {
    pub fn new(artifact: ArtifactKind, content: StubSource) -> Self {
        Self { artifact, content }
    }

    pub fn as_str(&self) -> &str {
        self.content.as_str()
    }
}

/// Stub text storage.
///
/// `Static` references compile-time strings without allocation (the built-in
/// stubs); `Owned` allows filesystem-loaded stubs to own their content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubSource {
    Static(&'static str),
    Owned(String),
}

impl StubSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> ModelName {
        ModelName::new("Task").unwrap()
    }

    #[test]
    fn artifact_paths_derive_from_model_name() {
        let model = task();
        assert_eq!(
            ArtifactKind::Model.output_path(&model, "x"),
            PathBuf::from("app/Models/Task.php")
        );
        assert_eq!(
            ArtifactKind::Controller.output_path(&model, "x"),
            PathBuf::from("app/Http/Controllers/TaskController.php")
        );
        assert_eq!(
            ArtifactKind::ViewIndex.output_path(&model, "x"),
            PathBuf::from("resources/views/tasks/index.blade.php")
        );
    }

    #[test]
    fn migration_path_uses_prefix_and_table() {
        let path = ArtifactKind::Migration.output_path(&task(), "2026_08_27_120000");
        assert_eq!(
            path,
            PathBuf::from("database/migrations/2026_08_27_120000_create_tasks_table.php")
        );
    }

    #[test]
    fn all_kinds_have_distinct_paths() {
        let model = task();
        let paths: Vec<PathBuf> = ArtifactKind::all()
            .iter()
            .map(|k| k.output_path(&model, "p"))
            .collect();
        let mut unique = paths.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), paths.len());
    }
}
