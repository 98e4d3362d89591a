use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "regsep")]
#[command(about = "Separate concept-annotation regression suites into per-category files")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.regsep)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyArg {
    /// Each case goes to the first category it fits
    First,
    /// Each case goes to every category it fits
    All,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Toml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Separate a regression suite into one file per category
    Separate {
        /// Category definition file (TOML)
        #[arg(short, long)]
        categories: PathBuf,

        /// Regression suite file (.toml or .json)
        #[arg(short, long)]
        suite: PathBuf,

        /// Output prefix; files are written as <prefix>_<category>.<ext>
        #[arg(short, long)]
        prefix: String,

        /// Separation strategy (default: from config, else first)
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Overwrite existing partition files; `--overwrite=false` overrides the config
        #[arg(
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        overwrite: Option<bool>,

        /// Output format (default: from config, else same as the suite)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Show the partition without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate and list the categories in a definition file
    Categories {
        /// Category definition file (TOML)
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., separate.strategy)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., separate.strategy)
        key: String,

        /// Value to set (e.g., "all", "true", "json")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
