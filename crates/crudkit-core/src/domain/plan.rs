//! The scaffold plan: everything one generation run intends to do.
//!
//! This is the output of the planning step and the input to the write step.
//! It contains no business logic, only data — which makes `--dry-run` a
//! plan that is printed instead of written, and lets tests assert on the
//! plan without touching a filesystem.
//!
//! Route registrations are part of the plan (an explicit registry) rather
//! than a side effect: the write step merges them into the route files
//! idempotently, so re-running a generation never duplicates route lines.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::error::DomainError;
use crate::domain::naming::ModelName;

/// Planned filesystem work for one generation run.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldPlan {
    files: Vec<FileToWrite>,
    routes: Vec<RouteAppend>,
}

impl ScaffoldPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.files.push(FileToWrite {
            path: path.into(),
            content,
        });
    }

    pub fn add_route(&mut self, route: RouteAppend) {
        self.routes.push(route);
    }

    pub fn files(&self) -> &[FileToWrite] {
        &self.files
    }

    pub fn routes(&self) -> &[RouteAppend] {
        &self.routes
    }

    /// Reject duplicate and absolute paths before anything is written.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            let path_str = file.path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
            if file.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }
        Ok(())
    }
}

/// One file to write, path relative to the application root.
#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

/// The route files a generation appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFile {
    Api,
    Web,
}

impl RouteFile {
    /// Location of the route file, relative to the application root.
    pub fn relative_path(&self) -> PathBuf {
        match self {
            Self::Api => PathBuf::from("routes/api.php"),
            Self::Web => PathBuf::from("routes/web.php"),
        }
    }
}

/// One route-registration line destined for one route file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteAppend {
    pub file: RouteFile,
    pub line: String,
}

impl RouteAppend {
    /// The api-style resource registration.
    pub fn api(model: &ModelName) -> Self {
        Self {
            file: RouteFile::Api,
            line: format!(
                "Route::apiResource('{}', {}Controller::class);",
                model.table_name(),
                model.class_name()
            ),
        }
    }

    /// The web-style resource registration.
    pub fn web(model: &ModelName) -> Self {
        Self {
            file: RouteFile::Web,
            line: format!(
                "Route::resource('{}', {}Controller::class);",
                model.table_name(),
                model.class_name()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_duplicate_paths() {
        let mut plan = ScaffoldPlan::new();
        plan.add_file("a.php", String::new());
        plan.add_file("a.php", String::new());
        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn validate_rejects_absolute_paths() {
        let mut plan = ScaffoldPlan::new();
        plan.add_file("/etc/passwd", String::new());
        assert!(matches!(
            plan.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn validate_accepts_distinct_relative_paths() {
        let mut plan = ScaffoldPlan::new();
        plan.add_file("a.php", String::new());
        plan.add_file("b.php", String::new());
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn route_lines_reference_table_and_controller() {
        let model = ModelName::new("Task").unwrap();

        let api = RouteAppend::api(&model);
        assert_eq!(api.file, RouteFile::Api);
        assert_eq!(
            api.line,
            "Route::apiResource('tasks', TaskController::class);"
        );

        let web = RouteAppend::web(&model);
        assert_eq!(web.file, RouteFile::Web);
        assert_eq!(web.line, "Route::resource('tasks', TaskController::class);");
    }
}
