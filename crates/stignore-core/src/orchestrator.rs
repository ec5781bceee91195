//! Top-level sequencing: locate, rewrite, resolve, plan, append.

use std::path::{Path, PathBuf};

use stignore_fs::{IgnoreFile, IgnorePath};

use crate::append::{AppendEngine, AppendPlan};
use crate::error::Result;
use crate::link::{LinkState, resolve_link};
use crate::locator::{RootLocation, locate_root};
use crate::options::{AppendOptions, Target};
use crate::pattern::Patterns;
use crate::prompt::{Confirm, Silent};
use crate::rewrite::rewrite_patterns;

/// Work out what to append where, without appending anything.
///
/// Every pattern is validated before any file is opened. Resolving the link
/// may create an empty `.stignore`.
pub fn prepare(
    cwd: &Path,
    patterns: &Patterns,
    options: &AppendOptions,
    confirm: &mut dyn Confirm,
) -> Result<AppendPlan> {
    let location = locate_root(cwd)?;

    let patterns = if options.absolute {
        patterns.clone()
    } else {
        rewrite_patterns(patterns, location.offset())?
    };

    let state = link_state(&location, options.target)?;
    tracing::debug!(requested = %options.target, ?state, "Selected append mode");

    let mut silent = Silent;
    let confirm: &mut dyn Confirm = if options.silent { &mut silent } else { confirm };
    AppendEngine::new(location.root()).plan(state, &patterns, confirm)
}

/// Add `patterns` to the folder enclosing `cwd` and return the folder root.
pub fn run(
    cwd: &Path,
    patterns: &Patterns,
    options: &AppendOptions,
    confirm: &mut dyn Confirm,
) -> Result<PathBuf> {
    let plan = prepare(cwd, patterns, options, confirm)?;
    plan.apply()?;
    Ok(plan.root().to_path_buf())
}

fn link_state(location: &RootLocation, target: Target) -> Result<LinkState> {
    match target {
        Target::Local => Ok(LinkState::UnlinkedNoSecondary {
            target: IgnorePath::Stignore,
        }),
        Target::Synced => Ok(LinkState::UnlinkedNoSecondary {
            target: IgnorePath::StignoreSync,
        }),
        Target::Auto if location.file(IgnorePath::StignoreSync).is_file() => {
            let mut primary = IgnoreFile::open(location.file(IgnorePath::Stignore))?;
            resolve_link(&mut primary)
        }
        Target::Auto => Ok(LinkState::UnlinkedNoSecondary {
            target: IgnorePath::Stignore,
        }),
    }
}
