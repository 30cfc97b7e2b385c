//! Implementation of the `crudkit make` command.
//!
//! Responsibility: translate CLI arguments into a `GenerateRequest`, call
//! the core generate service, and display results. No business logic lives
//! here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crudkit_adapters::{InMemoryStubStore, LocalFilesystem, SimpleRenderer};
use crudkit_core::{
    application::GenerateService,
    domain::{GenerateRequest, ModelName, parse_fields, parse_relations},
    error::CrudkitError,
};

use crate::{
    cli::{MakeArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `crudkit make` command.
///
/// Dispatch sequence:
/// 1. Parse and validate the model name, fields, and relations
/// 2. Resolve the application root (`--path`, config, or CWD)
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Execute generation via `GenerateService`
/// 5. Print per-file and per-route results
#[instrument(skip_all, fields(model = %args.model))]
pub fn execute(
    args: MakeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Parse input (all validation happens in the domain)
    let model = ModelName::new(&args.model).map_err(core_err)?;
    let fields = parse_fields(args.fields.as_deref().unwrap_or_default()).map_err(core_err)?;
    let relations =
        parse_relations(args.relations.as_deref().unwrap_or_default()).map_err(core_err)?;

    // 2. Resolve application root: flag > config > CWD
    let root = args
        .path
        .or(config.generator.default_path)
        .unwrap_or_else(|| PathBuf::from("."));

    debug!(
        class = %model.class_name(),
        table = %model.table_name(),
        fields = fields.len(),
        relations = relations.len(),
        root = %root.display(),
        "request resolved"
    );

    let request = GenerateRequest::new(model, fields, relations, root);

    let service = GenerateService::new(
        Box::new(InMemoryStubStore::with_builtin().map_err(CliError::Core)?),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&request).map_err(CliError::Core)?;

        output.header(&format!(
            "Dry run: CRUD for '{}'",
            request.model.class_name()
        ))?;
        for file in plan.files() {
            output.info(&format!("would write    {}", file.path.display()))?;
        }
        for route in plan.routes() {
            output.info(&format!(
                "would register {} -> {}",
                route.file.relative_path().display(),
                route.line
            ))?;
        }
        return Ok(());
    }

    // 4. Generate
    output.header(&format!(
        "Generating CRUD for '{}'...",
        request.model.class_name()
    ))?;
    info!(root = %request.root.display(), "generation started");

    let report = service.generate(&request).map_err(CliError::Core)?;

    // 5. Results
    for path in &report.written {
        output.success(&format!("created {}", path.display()))?;
    }
    for route in &report.routes_appended {
        output.success(&format!(
            "registered route in {}",
            route.file.relative_path().display()
        ))?;
    }
    for route in &report.routes_skipped {
        output.info(&format!(
            "route already present in {}",
            route.file.relative_path().display()
        ))?;
    }

    output.success(&format!(
        "CRUD for '{}' generated successfully!",
        request.model.class_name()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  php artisan migrate")?;
        output.print(&format!(
            "  # review app/Http/Requests/{}StoreRequest.php",
            request.model.class_name()
        ))?;
    }

    Ok(())
}

fn core_err(e: impl Into<CrudkitError>) -> CliError {
    CliError::Core(e.into())
}
