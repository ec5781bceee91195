//! Anchoring patterns at the folder root.
//!
//! Patterns typed in a subdirectory are meant relative to that directory,
//! while Syncthing reads them relative to the folder root. Rewriting joins
//! the root-to-cwd offset in front of each pattern's argument.

use stignore_fs::NormalizedPath;

use crate::error::Result;
use crate::pattern::{Classified, Patterns, classify};

/// Rewrite one line, keeping its directive prefix verbatim.
///
/// Comments and prefix-only lines are returned unchanged.
///
/// # Example
/// ```
/// use stignore_core::rewrite::rewrite_line;
/// use stignore_fs::NormalizedPath;
///
/// let offset = NormalizedPath::new("/some/path");
/// assert_eq!(rewrite_line("(?d)**/.git", &offset).unwrap(), "(?d)/some/path/**/.git");
/// ```
pub fn rewrite_line(line: &str, offset: &NormalizedPath) -> Result<String> {
    match classify(line)? {
        Classified::Comment(comment) => Ok(comment.to_string()),
        Classified::Entry(entry) if entry.is_prefix_only() => Ok(line.trim().to_string()),
        Classified::Entry(entry) => Ok(format!(
            "{}{}",
            entry.prefix.as_str(),
            offset.join(entry.argument)
        )),
    }
}

/// Rewrite every line of `patterns` against `offset`.
///
/// Stops at the first malformed line; nothing is returned for the others.
pub fn rewrite_patterns(patterns: &Patterns, offset: &NormalizedPath) -> Result<Patterns> {
    let rewritten = patterns
        .iter()
        .map(|line| rewrite_line(line, offset))
        .collect::<Result<Patterns>>()?;

    tracing::debug!(offset = %offset, count = rewritten.len(), "Rewrote patterns");
    Ok(rewritten)
}
