//! Error types for stignore-core

use std::path::PathBuf;

/// Result type for stignore-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while adding ignore patterns
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The working directory is not inside a Syncthing folder
    #[error("current working dir \"{}\" is not inside of a syncthing folder", start.display())]
    RootNotFound { start: PathBuf },

    /// A supplied pattern could not be classified
    #[error("incorrect pattern \"{pattern}\": {reason}")]
    MalformedPattern {
        pattern: String,
        reason: &'static str,
    },

    /// Every supplied pattern line was blank
    #[error("no patterns supplied")]
    NoPatterns,

    /// Filesystem error from stignore-fs
    #[error(transparent)]
    Fs(#[from] stignore_fs::Error),

    /// Reading the confirmation answer failed
    #[error("prompt failed: {source}")]
    Prompt {
        #[source]
        source: std::io::Error,
    },

    /// The confirmation input ended before an answer was given
    #[error("prompt failed: input closed before an answer was given")]
    PromptClosed,

    /// Patterns were written to the shared file but the include directive
    /// could not be added to the local one
    #[error(
        "patterns were added to \"{}\" but it could not be included from \"{}\": {source}",
        written.display(),
        failed.display()
    )]
    PartialLink {
        written: PathBuf,
        failed: PathBuf,
        #[source]
        source: stignore_fs::Error,
    },
}

impl Error {
    pub(crate) fn malformed(pattern: &str, reason: &'static str) -> Self {
        Self::MalformedPattern {
            pattern: pattern.to_string(),
            reason,
        }
    }
}
