//! Well-known Syncthing folder entries.

use std::path::Path;

/// Reserved names inside a Syncthing folder root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnorePath {
    /// The `.stfolder` marker directory (present in every folder root)
    StFolder,
    /// The `.stignore` file (local to the device, never synced)
    Stignore,
    /// The `.stignore_sync` file (shared across devices by convention)
    StignoreSync,
}

impl IgnorePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StFolder => ".stfolder",
            Self::Stignore => ".stignore",
            Self::StignoreSync => ".stignore_sync",
        }
    }
}

impl AsRef<Path> for IgnorePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for IgnorePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for IgnorePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
