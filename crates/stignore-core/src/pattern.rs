//! Classification of ignore pattern lines.
//!
//! A line is either a comment (`// ...`) or an entry made of a directive
//! prefix followed by an argument:
//!
//! ```text
//! (?d)(?i)some/path     flags "(?d)(?i)", argument "some/path"
//! !**/*.tmp             flags "!",        argument "**/*.tmp"
//! #include extra.txt    include,          argument "extra.txt"
//! (?d)                  flags "(?d)",     no argument
//! ```
//!
//! Flag groups and `#include` never appear together.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Marker that starts a comment line.
pub const COMMENT_PREFIX: &str = "//";

/// The include directive token, including its separating space.
pub const INCLUDE_DIRECTIVE: &str = "#include ";

/// Either one `#include ` token, or any run of `(?x)` flag groups and `!`
/// negations; then the argument.
static LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(#include )|((?:\(\?.\)|!)*)) *(.*)$").expect("Invalid pattern line regex")
});

/// The directive prefix of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix<'a> {
    /// Zero or more flag groups and negations, verbatim
    Flags(&'a str),
    /// The `#include ` token
    Include,
}

impl<'a> Prefix<'a> {
    /// The prefix exactly as it is written before the argument.
    pub fn as_str(&self) -> &'a str {
        match self {
            Prefix::Flags(flags) => flags,
            Prefix::Include => INCLUDE_DIRECTIVE,
        }
    }
}

/// A non-comment line split into prefix and argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub prefix: Prefix<'a>,
    /// Path or include target, may be empty
    pub argument: &'a str,
}

impl Entry<'_> {
    /// Whether the line is only directives (or blank) with nothing to rewrite.
    pub fn is_prefix_only(&self) -> bool {
        self.argument.is_empty()
    }

    /// Whether this is `#include <name>` for exactly `name`.
    pub fn includes(&self, name: &str) -> bool {
        self.prefix == Prefix::Include && self.argument == name
    }
}

/// Result of classifying one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    /// Comment, passed through as-is
    Comment(&'a str),
    Entry(Entry<'a>),
}

/// Classify a single pattern line.
///
/// Surrounding whitespace is ignored. Lines that do not fit the grammar are
/// reported as [`Error::MalformedPattern`] naming the line.
///
/// # Example
/// ```
/// use stignore_core::pattern::{classify, Classified, Prefix};
///
/// let Classified::Entry(entry) = classify("(?d)**/.git").unwrap() else {
///     panic!("not an entry");
/// };
/// assert_eq!(entry.prefix, Prefix::Flags("(?d)"));
/// assert_eq!(entry.argument, "**/.git");
/// ```
pub fn classify(line: &str) -> Result<Classified<'_>> {
    let line = line.trim();
    if line.starts_with(COMMENT_PREFIX) {
        return Ok(Classified::Comment(line));
    }

    let caps = LINE_REGEX
        .captures(line)
        .ok_or_else(|| Error::malformed(line, "not a pattern line"))?;

    let argument = caps.get(3).map_or("", |m| m.as_str());
    let prefix = if caps.get(1).is_some() {
        Prefix::Include
    } else {
        Prefix::Flags(caps.get(2).map_or("", |m| m.as_str()))
    };

    match prefix {
        Prefix::Include if argument.is_empty() => {
            return Err(Error::malformed(line, "#include needs a file name"));
        }
        Prefix::Flags(flags) if is_include_token(argument) => {
            if !flags.is_empty() {
                return Err(Error::malformed(
                    line,
                    "flag groups cannot be combined with #include",
                ));
            }
            return Err(Error::malformed(line, "#include needs a file name"));
        }
        _ => {}
    }

    if has_dangling_flag_group(argument) {
        return Err(Error::malformed(line, "unterminated \"(?\" flag group"));
    }

    Ok(Classified::Entry(Entry { prefix, argument }))
}

/// Pattern lines as supplied by the caller.
///
/// Each argument may hold several lines; they are split and trimmed. Blank
/// lines are kept so they end up as blank lines in the ignore file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Patterns {
    lines: Vec<String>,
}

impl Patterns {
    /// Collect pattern lines from raw arguments.
    ///
    /// Fails with [`Error::NoPatterns`] if nothing but blank lines is given.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = args
            .into_iter()
            .flat_map(|arg| {
                arg.as_ref()
                    .split('\n')
                    .map(|line| line.trim().to_string())
                    .collect::<Vec<_>>()
            })
            .collect();

        if lines.iter().all(|line| line.is_empty()) {
            return Err(Error::NoPatterns);
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }
}

impl FromIterator<String> for Patterns {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Patterns {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Whether `argument` is an include directive that slipped past the prefix
/// match: bare `#include`, or `#include ` after flag groups.
fn is_include_token(argument: &str) -> bool {
    argument == INCLUDE_DIRECTIVE.trim_end() || argument.starts_with(INCLUDE_DIRECTIVE)
}

/// Whether `s` opens a `(?` that is never closed by a later `)`.
fn has_dangling_flag_group(s: &str) -> bool {
    s.match_indices("(?").any(|(idx, _)| !s[idx + 2..].contains(')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(line: &str) -> Entry<'_> {
        match classify(line).unwrap() {
            Classified::Entry(entry) => entry,
            other => panic!("Expected entry, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_path() {
        let e = entry("ba{r,z}/*.png");
        assert_eq!(e.prefix, Prefix::Flags(""));
        assert_eq!(e.argument, "ba{r,z}/*.png");
    }

    #[test]
    fn test_multiple_flag_groups() {
        let e = entry("(?d)(?i)Thumbs.db");
        assert_eq!(e.prefix, Prefix::Flags("(?d)(?i)"));
        assert_eq!(e.argument, "Thumbs.db");
    }

    #[test]
    fn test_negation_prefix() {
        let e = entry("!(?i)keep.me");
        assert_eq!(e.prefix, Prefix::Flags("!(?i)"));
        assert_eq!(e.argument, "keep.me");
    }

    #[test]
    fn test_include_with_extra_spaces() {
        let e = entry("#include    .stignore_sync");
        assert!(e.includes(".stignore_sync"));
    }

    #[test]
    fn test_include_token_needs_space() {
        let e = entry("(?d)#includes");
        assert_eq!(e.prefix, Prefix::Flags("(?d)"));
        assert_eq!(e.argument, "#includes");
        assert!(is_include_token("#include"));
        assert!(is_include_token("#include x"));
        assert!(!is_include_token("#included"));
    }

    #[test]
    fn test_prefix_only() {
        let e = entry("(?d)");
        assert!(e.is_prefix_only());
        assert_eq!(e.prefix.as_str(), "(?d)");
    }

    #[test]
    fn test_blank_line_is_prefix_only() {
        assert!(entry("   ").is_prefix_only());
    }

    #[test]
    fn test_comment_keeps_text() {
        assert_eq!(
            classify("  // note (?").unwrap(),
            Classified::Comment("// note (?")
        );
    }

    #[test]
    fn test_patterns_split_multiline_arguments() {
        let patterns = Patterns::from_args(["a\n  b  ", "c"]).unwrap();
        assert_eq!(patterns.lines(), ["a", "b", "c"]);
    }

    #[test]
    fn test_patterns_keep_blank_lines() {
        let patterns = Patterns::from_args(["a\n\nb"]).unwrap();
        assert_eq!(patterns.lines(), ["a", "", "b"]);
    }

    #[test]
    fn test_patterns_all_blank() {
        let result = Patterns::from_args(["", " \n "]);
        assert!(matches!(result, Err(Error::NoPatterns)));
    }

    #[test]
    fn test_dangling_group() {
        assert!(has_dangling_flag_group("line(?"));
        assert!(has_dangling_flag_group("(?d"));
        assert!(has_dangling_flag_group("a(?).jpg(?"));
        assert!(!has_dangling_flag_group("a(?d)b"));
        assert!(!has_dangling_flag_group("IMG(?).jpg"));
        assert!(!has_dangling_flag_group("report(?)"));
        assert!(!has_dangling_flag_group("plain"));
    }
}
