//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No generation logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stubgen",
    bin_name = "stubgen",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Laravel-style repository/service stub generator",
    long_about = "Stubgen reads stub files, substitutes the {{name}} and \
                  {{var_name}} tokens, and writes the generated classes \
                  into the application directory layout.",
    after_help = "EXAMPLES:\n\
        \x20 stubgen init\n\
        \x20 stubgen make:repository User\n\
        \x20 stubgen make:service Payment\n\
        \x20 stubgen completions bash > /usr/share/bash-completion/completions/stubgen",
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
    /// Create a repository class and its interface.
    #[command(
        name = "make:repository",
        visible_alias = "repository",
        about = "Create a repository and its interface",
        after_help = "EXAMPLES:\n\
            \x20 stubgen make:repository User\n\
            \x20 stubgen make:repository Order --dry-run"
    )]
    MakeRepository(MakeArgs),

    /// Create a service class.
    #[command(
        name = "make:service",
        visible_alias = "service",
        about = "Create a service",
        after_help = "EXAMPLES:\n\
            \x20 stubgen make:service Payment\n\
            \x20 stubgen make:service Invoice --dry-run"
    )]
    MakeService(MakeArgs),

    /// Seed the application layout with the default stubs.
    #[command(
        about = "Create the app directories and default stub files",
        after_help = "EXAMPLES:\n\
            \x20 stubgen init\n\
            \x20 stubgen init --force   # overwrite existing stubs"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stubgen completions bash > ~/.local/share/bash-completion/completions/stubgen\n\
            \x20 stubgen completions zsh  > ~/.zfunc/_stubgen"
    )]
    Completions(CompletionsArgs),
}

// ── make:* ────────────────────────────────────────────────────────────────────

/// Arguments shared by `make:repository` and `make:service`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Entity name, e.g. `User`.  Interpolated into the generated class
    /// names, file names, and the lowercase `{{var_name}}` token.
    #[arg(value_name = "NAME", help = "Entity name (PascalCase identifier)")]
    pub name: String,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite existing stub files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing stub files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stubgen completions`.
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
