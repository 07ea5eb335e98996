//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.
//!
//! Species are taken as plain strings on purpose: the core owns the closed
//! species set and reports unsupported tags itself.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "breeders",
    bin_name = "breeders",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create pets from breed catalogues",
    long_about = "Breeders builds pets through species factories or a fluent \
                  builder. Dog breeds come from a local store; cat breeds \
                  from a remote breed service.",
    after_help = "EXAMPLES:\n\
        \x20 breeders pet new dog --breed Beagle\n\
        \x20 breeders pet build --species dog --breed \"mixed breed\" --weight 15\n\
        \x20 breeders breeds cat\n\
        \x20 breeders completions bash > /usr/share/bash-completion/completions/breeders",
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
    /// Create pets.
    #[command(
        subcommand,
        about = "Create a pet",
        after_help = "EXAMPLES:\n\
            \x20 breeders pet new cat\n\
            \x20 breeders pet new dog --breed \"German Shepherd\"\n\
            \x20 breeders pet simple dog"
    )]
    Pet(PetCommands),

    /// List the breeds known for a species.
    #[command(
        visible_alias = "ls",
        about = "List breeds for a species",
        after_help = "EXAMPLES:\n\
            \x20 breeders breeds dog\n\
            \x20 breeders breeds cat --output-format json"
    )]
    Breeds(BreedsArgs),

    /// Initialise a Breeders configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 breeders init\n\
            \x20 breeders init --force\n\
            \x20 breeders init --seed-db   # also create and fill the SQLite store"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 breeders completions bash > ~/.local/share/bash-completion/completions/breeders\n\
            \x20 breeders completions zsh  > ~/.zfunc/_breeders\n\
            \x20 breeders completions fish > ~/.config/fish/completions/breeders.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Breeders configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 breeders config get remote.format\n\
            \x20 breeders config list\n\
            \x20 breeders config path"
    )]
    Config(ConfigCommands),
}

// ── pet ───────────────────────────────────────────────────────────────────────

/// Subcommands for `breeders pet`.
#[derive(Debug, Subcommand)]
pub enum PetCommands {
    /// Create a pet through its species factory.
    #[command(visible_alias = "n")]
    New(PetNewArgs),

    /// Assemble a pet attribute by attribute.
    #[command(visible_alias = "b")]
    Build(PetBuildArgs),

    /// Create a bare pet with nothing but its species.
    Simple(PetSimpleArgs),
}

/// Arguments for `breeders pet new`.
#[derive(Debug, Args)]
pub struct PetNewArgs {
    /// Species tag (dog, cat).
    #[arg(value_name = "SPECIES")]
    pub species: String,

    /// Resolve this breed through the species' breed source.
    #[arg(short = 'b', long = "breed", value_name = "NAME")]
    pub breed: Option<String>,
}

/// Arguments for `breeders pet build`.
///
/// Species and breed are optional here so that the builder itself reports
/// which one is missing.
#[derive(Debug, Args)]
pub struct PetBuildArgs {
    #[arg(short = 's', long = "species", value_name = "SPECIES")]
    pub species: Option<String>,

    #[arg(short = 'b', long = "breed", value_name = "NAME")]
    pub breed: Option<String>,

    /// Current weight in pounds.
    #[arg(short = 'w', long = "weight", value_name = "LBS")]
    pub weight: Option<u32>,

    #[arg(long = "min-weight", value_name = "LBS")]
    pub min_weight: Option<u32>,

    #[arg(long = "max-weight", value_name = "LBS")]
    pub max_weight: Option<u32>,

    #[arg(long = "average-weight", value_name = "LBS")]
    pub average_weight: Option<u32>,

    #[arg(short = 'd', long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// Expected lifespan in years.
    #[arg(long = "lifespan", value_name = "YEARS")]
    pub lifespan: Option<u32>,

    #[arg(long = "origin", value_name = "PLACE")]
    pub geographic_origin: Option<String>,

    #[arg(long = "color", value_name = "COLOR")]
    pub color: Option<String>,

    /// Age in years.
    #[arg(long = "age", value_name = "YEARS")]
    pub age: Option<u32>,

    /// Mark the age as an estimate.
    #[arg(long = "age-estimated")]
    pub age_estimated: bool,
}

/// Arguments for `breeders pet simple`.
#[derive(Debug, Args)]
pub struct PetSimpleArgs {
    #[arg(value_name = "SPECIES")]
    pub species: String,
}

// ── breeds ────────────────────────────────────────────────────────────────────

/// Arguments for `breeders breeds`.
#[derive(Debug, Args)]
pub struct BreedsArgs {
    #[arg(value_name = "SPECIES")]
    pub species: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `breeders init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,

    /// Create the SQLite store and load the built-in dog breeds into it.
    #[arg(long = "seed-db", help = "Create and seed the SQLite breed store")]
    pub seed_db: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `breeders completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `breeders config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `remote.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
