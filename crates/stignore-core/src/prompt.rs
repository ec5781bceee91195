//! Yes/no confirmation with a default answer.
//!
//! The question is asked through the [`Confirm`] trait so the append logic
//! can run against a terminal, fabricated input, or no input at all.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Outcome of a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Nothing was entered (or no one was asked); the caller's default applies
    Default,
}

impl Answer {
    /// Collapse to a boolean, using `default` for [`Answer::Default`].
    pub fn or_default(self, default: bool) -> bool {
        match self {
            Answer::Yes => true,
            Answer::No => false,
            Answer::Default => default,
        }
    }
}

/// Something that can answer a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<Answer>;
}

/// Never asks; always answers [`Answer::Default`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Confirm for Silent {
    fn confirm(&mut self, _question: &str) -> Result<Answer> {
        Ok(Answer::Default)
    }
}

/// Line-based prompt over any reader/writer pair.
///
/// An empty line is [`Answer::Default`]; a line starting with `y`/`Y` or
/// `n`/`N` is yes or no. Anything else asks again. Input ending before an
/// answer is an error.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text).map_err(|source| Error::Prompt { source })?;
        self.output
            .flush()
            .map_err(|source| Error::Prompt { source })?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| Error::Prompt { source })?;
        Ok((read > 0).then_some(line))
    }
}

impl LinePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the process terminal: read stdin, write to stdout alongside
    /// the plan listing.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<Answer> {
        let mut text = format!("{} ([Y]/n)? ", question);
        loop {
            let line = self.ask(&text)?.ok_or(Error::PromptClosed)?;
            match line.trim().chars().next() {
                None => return Ok(Answer::Default),
                Some('y' | 'Y') => return Ok(Answer::Yes),
                Some('n' | 'N') => return Ok(Answer::No),
                Some(_) => text = "Wrong input. ([Y]/n): ".to_string(),
            }
        }
    }
}
