//! The person running the tool: questions in, answers out.
//!
//! The session only talks to an [`Operator`], so it can be driven by a
//! terminal or by a scripted stand-in.

use crate::error::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub trait Operator {
    /// Show a message.
    fn say(&mut self, msg: &str);

    /// Ask a question and return the trimmed answer.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Ask a yes/no question. Only `y` (any case) counts as yes.
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} (y/n)", question))?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }
}

// ---------------------------------------------------------------------------
// ConsoleOperator
// ---------------------------------------------------------------------------

/// An [`Operator`] over a line-oriented reader and a writer.
pub struct ConsoleOperator<R, W> {
    input: R,
    output: W,
}

impl ConsoleOperator<io::StdinLock<'static>, io::Stdout> {
    /// Bind to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleOperator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was shown.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Operator for ConsoleOperator<R, W> {
    fn say(&mut self, msg: &str) {
        let _ = writeln!(self.output, "\n{}", msg);
        let _ = self.output.flush();
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "\n{}\n> ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no answer to: {}", question),
            )
            .into());
        }
        Ok(line.trim().to_string())
    }
}

/// Turn a pasted path into a [`PathBuf`].
///
/// Trims whitespace, strips one pair of matching surrounding quotes and
/// expands a leading `~` to the home directory.
pub fn clean_path_input(raw: &str) -> PathBuf {
    let mut s = raw.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s = &s[1..s.len() - 1];
    }

    if s == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = s.strip_prefix("~/").or_else(|| s.strip_prefix("~\\")) {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(s)
}
