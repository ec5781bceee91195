//! Detection of the `.stignore` -> `.stignore_sync` link.
//!
//! The shared file only takes effect on a device once the local `.stignore`
//! includes it with `#include .stignore_sync`.

use stignore_fs::{IgnoreFile, IgnorePath};

use crate::error::Result;
use crate::pattern::{Classified, classify};

/// How the append target relates to the shared ignore file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// `.stignore` already includes `.stignore_sync`
    Linked,
    /// `.stignore_sync` exists but is not included yet; ask before linking
    UnlinkedShouldPrompt,
    /// Linking does not apply; append straight to `target`
    UnlinkedNoSecondary { target: IgnorePath },
}

/// Whether `line` is an include directive naming the shared file.
///
/// Comments and lines that do not classify never count.
pub fn links_secondary(line: &str) -> bool {
    match classify(line) {
        Ok(Classified::Entry(entry)) => entry.includes(IgnorePath::StignoreSync.as_str()),
        Ok(Classified::Comment(_)) | Err(_) => false,
    }
}

/// Scan the local ignore file for the include directive.
///
/// Scanning stops at the first matching line. Returns
/// [`LinkState::Linked`] or [`LinkState::UnlinkedShouldPrompt`].
pub fn resolve_link(primary: &mut IgnoreFile) -> Result<LinkState> {
    let linked = primary.find_line(links_secondary)?;
    let state = if linked {
        LinkState::Linked
    } else {
        LinkState::UnlinkedShouldPrompt
    };

    tracing::debug!(file = %primary.path().display(), ?state, "Resolved link state");
    Ok(state)
}
