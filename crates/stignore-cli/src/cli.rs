//! CLI argument parsing using clap derive

use clap::{Parser, ValueEnum};
use stignore_core::{AppendOptions, Target};

/// Add Syncthing ignore patterns to the folder enclosing the working directory
///
/// Patterns are anchored at the folder root by prepending the path from the
/// root to the working directory; use --absolute to copy them as-is.
///
/// By default patterns go to .stignore_sync if it exists, offering to include
/// it from .stignore when it is not yet. Otherwise they go to .stignore.
///
/// Examples:
///   stignore '*.tmp'                   # From photos/raw: adds /photos/raw/*.tmp
///   stignore -a '(?d)Thumbs.db'        # Copied as-is
///   stignore -t local build/ dist/     # Always into .stignore
#[derive(Parser, Debug)]
#[command(name = "stignore")]
#[command(author, version, about, long_about, verbatim_doc_comment)]
pub struct Cli {
    /// Patterns to add (an argument may hold several lines)
    #[arg(value_name = "PATTERN", required = true, num_args = 1..)]
    pub patterns: Vec<String>,

    /// Which file receives the patterns
    #[arg(short, long, value_enum, default_value_t = TargetArg::Auto, env = "STIGNORE_TARGET")]
    pub target: TargetArg,

    /// Copy patterns as-is instead of anchoring them at the folder root
    #[arg(short, long, env = "STIGNORE_ABSOLUTE")]
    pub absolute: bool,

    /// Don't ask questions or list planned changes
    #[arg(short, long, env = "STIGNORE_SILENT")]
    pub silent: bool,

    /// List planned changes and wait for confirmation
    #[arg(short, long, conflicts_with = "silent")]
    pub preview: bool,

    /// List planned changes without appending anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Target file selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArg {
    /// .stignore_sync if it exists (offering to include it), else .stignore
    Auto,
    /// .stignore, not synced across devices
    #[value(alias = "stignore")]
    Local,
    /// .stignore_sync, synced across devices
    #[value(alias = "stignore_sync")]
    Synced,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Auto => Target::Auto,
            TargetArg::Local => Target::Local,
            TargetArg::Synced => Target::Synced,
        }
    }
}

impl Cli {
    /// Options passed down to the core
    pub fn append_options(&self) -> AppendOptions {
        AppendOptions {
            target: self.target.into(),
            absolute: self.absolute,
            silent: self.silent,
        }
    }
}
