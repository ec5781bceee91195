//! Invocation options.

use std::fmt;

/// Which ignore file receives the patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Target {
    /// `.stignore_sync` if it exists (linking it when needed), else `.stignore`
    #[default]
    Auto,
    /// Always `.stignore`
    Local,
    /// Always `.stignore_sync`
    Synced,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Auto => write!(f, "auto"),
            Target::Local => write!(f, "local"),
            Target::Synced => write!(f, "synced"),
        }
    }
}

/// Options for adding patterns
#[derive(Debug, Clone, Default)]
pub struct AppendOptions {
    /// Target file selection
    pub target: Target,
    /// If true, patterns are copied as-is instead of being anchored at the
    /// folder root.
    pub absolute: bool,
    /// If true, never prompt; the prompt's default answer is used.
    pub silent: bool,
}
