//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudkit",
    bin_name = "crudkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} CRUD boilerplate generation",
    long_about = "Crudkit generates the full CRUD surface for a model: \
                  model class, migration, resource controller, form \
                  requests, view placeholders, and route registrations.",
    after_help = "EXAMPLES:\n\
        \x20 crudkit make Task --fields \"title:string,status:enum(open,closed)\"\n\
        \x20 crudkit make Post --fields \"title:string,body:text\" --relations \"comments:hasMany\"\n\
        \x20 crudkit types\n\
        \x20 crudkit completions bash > /usr/share/bash-completion/completions/crudkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the CRUD surface for a model.
    #[command(
        visible_alias = "m",
        about = "Generate CRUD files for a model",
        after_help = "EXAMPLES:\n\
            \x20 crudkit make Task\n\
            \x20 crudkit make Task --fields \"title:string,status:enum(open,closed)\"\n\
            \x20 crudkit make Post --fields \"title:string\" --relations \"user:belongsTo\" --dry-run"
    )]
    Make(MakeArgs),

    /// List the supported field and relation kinds.
    #[command(
        visible_alias = "t",
        about = "List supported field and relation kinds",
        after_help = "EXAMPLES:\n\
            \x20 crudkit types\n\
            \x20 crudkit types --format json"
    )]
    Types(TypesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudkit completions bash > ~/.local/share/bash-completion/completions/crudkit\n\
            \x20 crudkit completions zsh  > ~/.zfunc/_crudkit\n\
            \x20 crudkit completions fish > ~/.config/fish/completions/crudkit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudkit make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Model name.  Case-normalised: `task`, `Task`, and `blog_post` all
    /// work; the class name is the studly-cased form.
    #[arg(value_name = "MODEL", help = "Model name (e.g. Task, BlogPost)")]
    pub model: String,

    /// Field list, comma-separated `name:kind` tokens.
    #[arg(
        short = 'f',
        long = "fields",
        value_name = "FIELDS",
        help = "Fields like \"title:string,status:enum(open,closed)\""
    )]
    pub fields: Option<String>,

    /// Relation list, comma-separated `name:kind` tokens.
    #[arg(
        short = 'r',
        long = "relations",
        value_name = "RELATIONS",
        help = "Relations like \"comments:hasMany,user:belongsTo\""
    )]
    pub relations: Option<String>,

    /// Application root the generated files are written under.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        help = "Application root directory (default: current directory)"
    )]
    pub path: Option<PathBuf>,

    /// Preview what would be generated without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── types ─────────────────────────────────────────────────────────────────────

/// Arguments for `crudkit types`.
#[derive(Debug, Args)]
pub struct TypesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: TypesFormat,
}

/// Output format for the `types` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TypesFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON object.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
