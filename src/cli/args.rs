//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report dictionary keys never referenced in the source tree
//! - `init`: Initialize a keysweep configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Reference dictionary JSON file (overrides config file)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Source root directory to scan; repeatable (overrides config file)
    #[arg(long = "source-root")]
    pub source_roots: Vec<PathBuf>,

    /// Path prefix or glob pattern to exclude; repeatable
    #[arg(long = "ignore")]
    pub ignores: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Scan files one at a time instead of on the thread pool
    #[arg(long)]
    pub serial: bool,

    /// Visit every file even after all keys have been found
    #[arg(long)]
    pub no_early_exit: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for dictionary keys that no source file references
    Check(CheckCommand),
    /// Initialize a new .keysweeprc.json configuration file
    Init,
}
