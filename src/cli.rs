use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "shell-guard")]
#[command(author, version, about = "Shell script linter - enforce scripting conventions in CI")]
#[command(long_about = "Checks shell and Python scripts against a fixed set of heuristic \
    rules (shebang, fail-fast flags, palette colors, local variables, ...).\n\n\
    Exit codes:\n  \
    0 - All files passed (warnings allowed)\n  \
    1 - A file has a critical finding, the path does not exist, or no files matched\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint scripts and report findings
    Check(CheckArgs),

    /// Format shell scripts with shfmt
    Fmt(FmtArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// List the available checks
    Checks,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// File or directory to check
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File extensions to check (comma-separated or repeated: -t sh,py)
    #[arg(short = 't', long = "types", value_delimiter = ',')]
    pub types: Option<Vec<String>>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(short = 'x', long)]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the external syntax check
    #[arg(long)]
    pub no_syntax: bool,

    /// Shell used for the syntax check
    #[arg(long)]
    pub shell: Option<String>,

    /// Number of worker threads
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,
}

#[derive(Parser, Debug)]
pub struct FmtArgs {
    /// File or directory to format
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File extensions to format (comma-separated or repeated)
    #[arg(short = 't', long = "types", value_delimiter = ',')]
    pub types: Option<Vec<String>>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(short = 'x', long)]
    pub exclude: Vec<String>,

    /// Report files that need formatting without modifying them
    #[arg(short, long)]
    pub check: bool,

    /// shfmt binary to run
    #[arg(long)]
    pub shfmt: Option<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".shell-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
