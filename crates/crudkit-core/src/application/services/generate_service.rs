//! The generation service: plans and executes one scaffold run.
//!
//! Orchestration only — the domain layer decides names, paths, and rendered
//! shapes; the ports do the I/O. The split between [`GenerateService::plan`]
//! and [`GenerateService::generate`] is what makes `--dry-run` trivial: a
//! dry run is a plan that gets printed instead of written.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::application::ports::{Filesystem, StubRenderer, StubStore};
use crate::domain::{
    ArtifactKind, GenerateRequest, RenderContext, RouteAppend, ScaffoldPlan,
};
use crate::error::CrudkitResult;

/// What one [`GenerateService::generate`] call actually did.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Files written, relative to the application root, in generation order.
    pub written: Vec<PathBuf>,
    /// Route lines appended this run.
    pub routes_appended: Vec<RouteAppend>,
    /// Route lines already present and therefore skipped.
    pub routes_skipped: Vec<RouteAppend>,
}

/// Application service for scaffold generation.
///
/// Dependencies are injected as trait objects, so the same service drives
/// the real filesystem in production and the in-memory one in tests.
pub struct GenerateService {
    stubs: Box<dyn StubStore>,
    renderer: Box<dyn StubRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    pub fn new(
        stubs: Box<dyn StubStore>,
        renderer: Box<dyn StubRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            stubs,
            renderer,
            filesystem,
        }
    }

    /// Build the scaffold plan for a request without touching the filesystem.
    ///
    /// Renders every artifact stub against the request's context and collects
    /// the route registrations. The returned plan is validated (no duplicate
    /// or absolute paths).
    #[instrument(skip(self, request), fields(model = %request.model.class_name()))]
    pub fn plan(&self, request: &GenerateRequest) -> CrudkitResult<ScaffoldPlan> {
        debug!(
            fields = request.fields.len(),
            relations = request.relations.len(),
            "planning scaffold"
        );

        let base = build_context(request);
        let prefix = request.migration_prefix();
        let mut plan = ScaffoldPlan::new();

        for artifact in ArtifactKind::all() {
            let stub = self.stubs.get(artifact)?;

            // Only the form requests need a per-artifact variable; everything
            // else renders against the shared context.
            let context = match artifact {
                ArtifactKind::StoreRequest => {
                    base.clone().with_variable("REQUEST_SUFFIX", "Store")
                }
                ArtifactKind::UpdateRequest => {
                    base.clone().with_variable("REQUEST_SUFFIX", "Update")
                }
                _ => base.clone(),
            };

            let content = self.renderer.render(&stub, &context)?;
            plan.add_file(artifact.output_path(&request.model, &prefix), content);
        }

        plan.add_route(RouteAppend::api(&request.model));
        plan.add_route(RouteAppend::web(&request.model));

        plan.validate()?;
        Ok(plan)
    }

    /// Plan and execute: write every artifact file and merge the route
    /// registrations into the route files.
    ///
    /// Existing artifact files are overwritten (with a warning); route lines
    /// already present in their route file are skipped, so re-running the
    /// same generation never duplicates registrations.
    #[instrument(skip(self, request), fields(model = %request.model.class_name()))]
    pub fn generate(&self, request: &GenerateRequest) -> CrudkitResult<GenerateReport> {
        let plan = self.plan(request)?;
        let mut report = GenerateReport::default();

        for file in plan.files() {
            let target = request.root.join(&file.path);
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            if self.filesystem.exists(&target) {
                warn!(path = %file.path.display(), "overwriting existing file");
            }
            self.filesystem.write_file(&target, &file.content)?;
            debug!(path = %file.path.display(), "wrote artifact");
            report.written.push(file.path.clone());
        }

        for route in plan.routes() {
            let relative = route.file.relative_path();
            let target = request.root.join(&relative);

            match self.filesystem.read_file(&target)? {
                Some(existing) if existing.contains(&route.line) => {
                    debug!(path = %relative.display(), "route already registered, skipping");
                    report.routes_skipped.push(route.clone());
                }
                Some(existing) => {
                    let sep = if existing.is_empty() || existing.ends_with('\n') {
                        ""
                    } else {
                        "\n"
                    };
                    self.filesystem
                        .append_file(&target, &format!("{sep}{}\n", route.line))?;
                    report.routes_appended.push(route.clone());
                }
                None => {
                    if let Some(parent) = target.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem
                        .append_file(&target, &format!("{}\n", route.line))?;
                    report.routes_appended.push(route.clone());
                }
            }
        }

        info!(
            files = report.written.len(),
            routes = report.routes_appended.len(),
            "scaffold complete"
        );
        Ok(report)
    }
}

/// Bind the shared render context: name-derived variables plus the block
/// variables computed from the parsed fields and relations.
///
/// Block formatting contract with the built-in stubs:
/// - `FILLABLE` is a comma-joined inline list
/// - `MIGRATION_COLUMNS` and `VALIDATION_RULES` are zero-or-more full lines,
///   each indented to body depth and newline-terminated, so an empty block
///   vanishes without leaving a blank line
/// - `RELATION_METHODS` carries its own leading blank line when non-empty
fn build_context(request: &GenerateRequest) -> RenderContext {
    let fillable = request
        .fields
        .iter()
        .map(|f| format!("'{}'", f.name))
        .collect::<Vec<_>>()
        .join(", ");

    let migration_columns = request
        .fields
        .iter()
        .map(|f| format!("            {}\n", f.migration_line()))
        .collect::<String>();

    let validation_rules = request
        .fields
        .iter()
        .map(|f| format!("            {}\n", f.validation_line()))
        .collect::<String>();

    let relation_methods = if request.relations.is_empty() {
        String::new()
    } else {
        let methods = request
            .relations
            .iter()
            .map(|r| r.method_source())
            .collect::<Vec<_>>()
            .join("\n");
        format!("\n{methods}")
    };

    RenderContext::new(&request.model)
        .with_variable("FILLABLE", fillable)
        .with_variable("MIGRATION_COLUMNS", migration_columns)
        .with_variable("VALIDATION_RULES", validation_rules)
        .with_variable("RELATION_METHODS", relation_methods)
}
