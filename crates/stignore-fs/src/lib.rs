//! Filesystem layer for stignore
//!
//! Provides the well-known Syncthing names, forward-slash path handling for
//! ignore patterns, and an append-only handle for ignore files.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::IgnorePath;
pub use error::{Error, Result};
pub use io::IgnoreFile;
pub use path::NormalizedPath;
