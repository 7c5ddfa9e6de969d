use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Simple style checker for whitespace, includes and line length")]
#[command(long_about = "Checks every file under a root directory against textual style rules.\n\
    The applied rules depend on the file name; files matching no pattern are not checked.\n\n\
    Options: maxcols is the hard line-length limit, maxcols_soft the warning limit;\n\
    maxcols_soft greater than maxcols is rejected as a configuration error.\n\n\
    Exit codes:\n  \
    0 - All files comply\n  \
    1 - Uncompliant files found, or a configuration/runtime error")]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output; only the exit code reports the result
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check all files under a root directory
    Check(CheckArgs),

    /// Generate a default configuration file (maxcols_soft must not exceed maxcols)
    Init(InitArgs),

    /// Show how a single path would be treated
    Explain(ExplainArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Root directory; files below it are checked recursively
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to the options file (JSON, or TOML by extension)
    #[arg(long, short = 'c', alias = "config")]
    pub options: Option<PathBuf>,

    /// Extra exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Skip files ignored by .gitignore
    #[arg(long)]
    pub gitignore: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of worker threads (default: one per CPU)
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".style-guard.json")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// File path to explain
    pub path: PathBuf,

    /// Path to the options file; exclusions are only reported when given or discovered
    #[arg(long, short = 'c', alias = "config")]
    pub options: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
