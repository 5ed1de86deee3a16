//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Manifest file consulted when `--manifest` is not given.
pub const DEFAULT_MANIFEST: &str = "crudforge.toml";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudforge",
    bin_name = "crudforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Layered CRUD scaffolding from a schema manifest",
    long_about = "Crudforge reads a schema manifest and emits, per entity, a \
                  coherent set of layered source artifacts: entity, DTO, \
                  repository, service, and REST controller.",
    after_help = "EXAMPLES:\n\
        \x20 crudforge init\n\
        \x20 crudforge generate\n\
        \x20 crudforge generate --entity Mstproduct --dry-run\n\
        \x20 crudforge project --yes\n\
        \x20 crudforge completions bash > /usr/share/bash-completion/completions/crudforge",
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
    /// Generate entity artifacts from the schema manifest.
    #[command(
        visible_alias = "g",
        about = "Generate entity artifacts",
        after_help = "EXAMPLES:\n\
            \x20 crudforge generate\n\
            \x20 crudforge generate --entity Mstproduct\n\
            \x20 crudforge generate --manifest schemas/shop.toml --output ./generated"
    )]
    Generate(GenerateArgs),

    /// Scaffold the surrounding cargo workspace.
    #[command(
        about = "Scaffold the project workspace",
        after_help = "EXAMPLES:\n\
            \x20 crudforge project\n\
            \x20 crudforge project --yes --output ./work"
    )]
    Project(ProjectArgs),

    /// Scaffold the workspace, then generate every entity.
    #[command(
        about = "Project scaffold followed by entity generation",
        after_help = "EXAMPLES:\n\
            \x20 crudforge all --yes"
    )]
    All(AllArgs),

    /// Write a starter schema manifest into the current directory.
    #[command(
        about = "Create a starter schema manifest",
        after_help = "EXAMPLES:\n\
            \x20 crudforge init\n\
            \x20 crudforge init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudforge completions bash > ~/.local/share/bash-completion/completions/crudforge\n\
            \x20 crudforge completions zsh  > ~/.zfunc/_crudforge\n\
            \x20 crudforge completions fish > ~/.config/fish/completions/crudforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `crudforge generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Schema manifest path.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Schema manifest (default: crudforge.toml)"
    )]
    pub manifest: Option<PathBuf>,

    /// Output directory root for the generated artifacts.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: from config)"
    )]
    pub output: Option<PathBuf>,

    /// Generate a single entity instead of the whole manifest.
    #[arg(
        short = 'e',
        long = "entity",
        value_name = "NAME",
        help = "Only this entity"
    )]
    pub entity: Option<String>,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── project ───────────────────────────────────────────────────────────────────

/// Arguments for `crudforge project`.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Schema manifest path.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Schema manifest (default: crudforge.toml)"
    )]
    pub manifest: Option<PathBuf>,

    /// Output directory the workspace is created under.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: from config)"
    )]
    pub output: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and scaffold immediately"
    )]
    pub yes: bool,

    /// Print the plan without executing anything.
    #[arg(long = "dry-run", help = "Show the plan without running the toolchain")]
    pub dry_run: bool,
}

// ── all ───────────────────────────────────────────────────────────────────────

/// Arguments for `crudforge all`.
#[derive(Debug, Args)]
pub struct AllArgs {
    /// Schema manifest path.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Schema manifest (default: crudforge.toml)"
    )]
    pub manifest: Option<PathBuf>,

    /// Output directory root.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: from config)"
    )]
    pub output: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and run immediately"
    )]
    pub yes: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing manifest.
    #[arg(short = 'f', long = "force", help = "Overwrite existing manifest")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudforge completions`.
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
