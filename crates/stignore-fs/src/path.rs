//! Normalized path handling for ignore patterns
//!
//! Syncthing ignore patterns always use `/` as the separator, regardless of
//! the platform the folder lives on.

use std::path::Path;

/// A path normalized to forward slashes with `.`, `..` and empty segments
/// resolved.
///
/// Used both for the offset between a folder root and the working directory
/// and for the path part of a pattern after rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes and cleans the result.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&path_str.replace('\\', "/")),
        }
    }

    /// The anchored root, `/`.
    pub fn root() -> Self {
        Self {
            inner: "/".to_string(),
        }
    }

    /// Build an anchored path from platform path components, as produced by
    /// `Path::strip_prefix`.
    pub fn anchored(relative: &Path) -> Self {
        relative
            .components()
            .filter_map(|c| match c {
                std::path::Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .fold(Self::root(), |acc, segment| acc.join(&segment))
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Structurally join this path with a pattern segment.
    ///
    /// A leading `/` or `./` on the segment does not reset the base; `..`
    /// never climbs above an anchored base. Backslashes in the segment are
    /// kept, since they are escapes in ignore patterns.
    pub fn join(&self, segment: &str) -> Self {
        let joined = if self.inner.is_empty() {
            segment.to_string()
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self {
            inner: clean(&joined),
        }
    }

    /// Whether the path starts at the folder root.
    pub fn is_anchored(&self) -> bool {
        self.inner.starts_with('/')
    }

    /// Whether this is the folder root itself.
    pub fn is_root(&self) -> bool {
        self.inner == "/"
    }
}

/// Lexically clean a forward-slash path.
///
/// Empty and `.` segments are dropped, `..` removes the previous segment.
/// On an anchored path a leading `..` is discarded; on a relative one it is
/// kept.
fn clean(path: &str) -> String {
    let anchored = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if anchored => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let body = segments.join("/");
    if anchored {
        format!("/{}", body)
    } else {
        body
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_separators() {
        assert_eq!(clean("/a//b/./c/"), "/a/b/c");
        assert_eq!(clean("a/../../b"), "../b");
        assert_eq!(clean("/../a"), "/a");
        assert_eq!(clean(""), "");
    }
}
