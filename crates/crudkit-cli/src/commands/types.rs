//! Implementation of the `crudkit types` command.
//!
//! Prints the closed set of field kinds (with their schema-column and
//! validation-rule forms) and the supported relation kinds, so users can
//! discover valid `--fields` / `--relations` values without trial and error.

use crudkit_core::domain::{KIND_CATALOG, RelationKind};
use serde_json::json;

use crate::{
    cli::{TypesArgs, TypesFormat},
    error::CliResult,
    output::OutputManager,
};

const RELATION_KINDS: [RelationKind; 4] = [
    RelationKind::HasMany,
    RelationKind::HasOne,
    RelationKind::BelongsTo,
    RelationKind::BelongsToMany,
];

pub fn execute(args: TypesArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        TypesFormat::Table => print_table(&output)?,
        TypesFormat::List => print_list(&output)?,
        TypesFormat::Json => print_json(&output)?,
    }
    Ok(())
}

fn print_table(output: &OutputManager) -> CliResult<()> {
    output.header("Field kinds")?;
    output.print(&format!(
        "  {:<12} {:<12} {}",
        "KIND", "COLUMN", "VALIDATION RULE"
    ))?;
    for info in KIND_CATALOG {
        output.print(&format!(
            "  {:<12} {:<12} {}",
            info.name, info.column, info.rule
        ))?;
    }
    output.print(&format!(
        "  {:<12} {:<12} {}",
        "enum(a,b)", "enum", "required|in:a,b"
    ))?;

    output.print("")?;
    output.header("Relation kinds")?;
    for kind in RELATION_KINDS {
        output.print(&format!("  {}", kind.builder_method()))?;
    }

    Ok(())
}

fn print_list(output: &OutputManager) -> CliResult<()> {
    for info in KIND_CATALOG {
        output.print(info.name)?;
    }
    output.print("enum")?;
    for kind in RELATION_KINDS {
        output.print(kind.builder_method())?;
    }
    Ok(())
}

fn print_json(output: &OutputManager) -> CliResult<()> {
    let fields: Vec<_> = KIND_CATALOG
        .iter()
        .map(|info| {
            json!({
                "name": info.name,
                "column": info.column,
                "rule": info.rule,
            })
        })
        .collect();
    let relations: Vec<_> = RELATION_KINDS
        .iter()
        .map(|k| k.builder_method())
        .collect();

    let doc = json!({
        "fields": fields,
        "enum": { "syntax": "name:enum(v1,v2)", "rule": "required|in:v1,v2" },
        "relations": relations,
    });

    output.print(&serde_json::to_string_pretty(&doc).expect("static document serializes"))?;
    Ok(())
}
