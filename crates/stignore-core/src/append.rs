//! Deciding where patterns go, then appending them.
//!
//! [`AppendEngine::plan`] turns a [`LinkState`] into an [`AppendPlan`]: an
//! ordered list of appends. Nothing touches the disk until
//! [`AppendPlan::apply`].

use std::fmt;
use std::path::{Path, PathBuf};

use stignore_fs::{IgnoreFile, IgnorePath};

use crate::error::{Error, Result};
use crate::link::LinkState;
use crate::pattern::{INCLUDE_DIRECTIVE, Patterns};
use crate::prompt::Confirm;

/// One append to one ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAppend {
    pub file: IgnorePath,
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl PlannedAppend {
    fn apply(&self) -> Result<()> {
        let mut file = IgnoreFile::open(&self.path)?;
        file.append_lines(&self.lines)?;
        tracing::info!(file = %self.path.display(), lines = self.lines.len(), "Appended");
        Ok(())
    }
}

/// The appends for one invocation, in the order they are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendPlan {
    root: PathBuf,
    steps: Vec<PlannedAppend>,
    establishes_link: bool,
}

impl AppendPlan {
    /// Folder root the plan writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn steps(&self) -> &[PlannedAppend] {
        &self.steps
    }

    /// Whether applying the plan adds the include directive to `.stignore`.
    pub fn establishes_link(&self) -> bool {
        self.establishes_link
    }

    /// The file receiving the patterns.
    pub fn target(&self) -> Option<IgnorePath> {
        self.steps.first().map(|step| step.file)
    }

    /// Perform every append in order.
    ///
    /// When linking, the shared file is written first. If the include
    /// directive then fails the patterns stay where they are and
    /// [`Error::PartialLink`] is returned; a later run will offer the link
    /// again.
    pub fn apply(&self) -> Result<()> {
        for (idx, step) in self.steps.iter().enumerate() {
            match step.apply() {
                Ok(()) => {}
                Err(Error::Fs(source)) if idx > 0 && self.establishes_link => {
                    return Err(Error::PartialLink {
                        written: self.steps[0].path.clone(),
                        failed: step.path.clone(),
                        source,
                    });
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

impl fmt::Display for AppendPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "Appending to {}:", step.path.display())?;
            for line in &step.lines {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// Builds append plans for one folder root.
#[derive(Debug, Clone)]
pub struct AppendEngine {
    root: PathBuf,
}

impl AppendEngine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The include directive line added to `.stignore` when linking.
    pub fn include_line() -> String {
        format!("{}{}", INCLUDE_DIRECTIVE, IgnorePath::StignoreSync)
    }

    /// Decide which file(s) receive `patterns`.
    ///
    /// Only [`LinkState::UnlinkedShouldPrompt`] consults `confirm`; an empty
    /// or defaulted answer means "link them".
    pub fn plan(
        &self,
        state: LinkState,
        patterns: &Patterns,
        confirm: &mut dyn Confirm,
    ) -> Result<AppendPlan> {
        let lines = patterns.lines().to_vec();

        let (steps, establishes_link) = match state {
            LinkState::Linked => (vec![self.step(IgnorePath::StignoreSync, lines)], false),
            LinkState::UnlinkedShouldPrompt => {
                let question = format!(
                    "{} exists, but not included in {}. Include it",
                    IgnorePath::StignoreSync,
                    IgnorePath::Stignore
                );
                if confirm.confirm(&question)?.or_default(true) {
                    (
                        vec![
                            self.step(IgnorePath::StignoreSync, lines),
                            self.step(IgnorePath::Stignore, vec![Self::include_line()]),
                        ],
                        true,
                    )
                } else {
                    (vec![self.step(IgnorePath::Stignore, lines)], false)
                }
            }
            LinkState::UnlinkedNoSecondary { target } => (vec![self.step(target, lines)], false),
        };

        for step in &steps {
            tracing::debug!(file = %step.path.display(), lines = step.lines.len(), "Planned append");
        }

        Ok(AppendPlan {
            root: self.root.clone(),
            steps,
            establishes_link,
        })
    }

    fn step(&self, file: IgnorePath, lines: Vec<String>) -> PlannedAppend {
        PlannedAppend {
            file,
            path: self.root.join(file),
            lines,
        }
    }
}
