//! Core logic for adding Syncthing ignore patterns
//!
//! Given a working directory somewhere inside a Syncthing folder, this crate:
//!
//! - **locates** the folder root (the nearest ancestor holding `.stfolder`)
//! - **classifies** each pattern line into directives and argument
//! - **rewrites** arguments so they are anchored at the folder root
//! - **resolves** whether `.stignore` already includes `.stignore_sync`
//! - **plans and applies** the appends, linking the two files on request
//!
//! # Example
//!
//! ```no_run
//! use stignore_core::{AppendOptions, Patterns, Silent};
//!
//! # fn main() -> stignore_core::Result<()> {
//! let cwd = std::env::current_dir().unwrap();
//! let patterns = Patterns::from_args(["(?d)*.tmp"])?;
//! let root = stignore_core::run(&cwd, &patterns, &AppendOptions::default(), &mut Silent)?;
//! println!("{}", root.display());
//! # Ok(())
//! # }
//! ```

pub mod append;
pub mod error;
pub mod link;
pub mod locator;
pub mod options;
pub mod orchestrator;
pub mod pattern;
pub mod prompt;
pub mod rewrite;

pub use append::{AppendEngine, AppendPlan, PlannedAppend};
pub use error::{Error, Result};
pub use link::{LinkState, resolve_link};
pub use locator::{RootLocation, locate_root};
pub use options::{AppendOptions, Target};
pub use orchestrator::{prepare, run};
pub use pattern::{Classified, Entry, Patterns, Prefix, classify};
pub use prompt::{Answer, Confirm, LinePrompt, Silent};
pub use rewrite::{rewrite_line, rewrite_patterns};
pub use stignore_fs::IgnorePath;
