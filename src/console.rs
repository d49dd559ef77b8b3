//! Console collaborators
//!
//! The menu core only assembles strings and interprets answers. Writing
//! lines and reading answers goes through [`Console`], so the same flow
//! runs against a real terminal or a scripted answer list.

use crossterm::{
    ExecutableCommand,
    style::{Color, Print, Stylize, style},
};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Visual role of an emitted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Option rows, previews, ordinary text
    Plain,
    /// Separators and step titles
    Heading,
    /// Informational messages (exiting, returning)
    Notice,
    /// Rejected input
    Error,
}

impl LineKind {
    fn color(self) -> Option<Color> {
        match self {
            LineKind::Plain => None,
            LineKind::Heading => Some(Color::Cyan),
            LineKind::Notice => Some(Color::Yellow),
            LineKind::Error => Some(Color::Red),
        }
    }
}

/// Line-oriented prompt I/O
pub trait Console {
    /// Write one line of text
    fn write_line(&mut self, kind: LineKind, line: &str) -> io::Result<()>;

    /// Show `prompt` and block until one line is available.
    ///
    /// Returns `None` once the input stream is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, kind: LineKind, line: &str) -> io::Result<()> {
        (**self).write_line(kind, line)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Console bound to the process stdin/stdout
pub struct Terminal {
    use_color: bool,
}

impl Terminal {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Console for Terminal {
    fn write_line(&mut self, kind: LineKind, line: &str) -> io::Result<()> {
        let mut out = io::stdout();
        match kind.color().filter(|_| self.use_color) {
            Some(color) if kind == LineKind::Heading => {
                out.execute(Print(style(line).with(color).bold()))?;
            }
            Some(color) => {
                out.execute(Print(style(line).with(color)))?;
            }
            None => {
                out.execute(Print(line))?;
            }
        }
        out.execute(Print("\n"))?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut out = io::stdout();
        out.execute(Print(prompt))?;
        out.flush()?;

        let mut buffer = String::new();
        let read = io::stdin().lock().read_line(&mut buffer)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buffer))
    }
}

/// Console that replays a fixed list of answers and records everything
/// written to it
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
    prompts: usize,
}

impl ScriptedConsole {
    /// Create a console answering with `answers` in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            prompts: 0,
        }
    }

    /// Every written line and prompt, in order
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// The transcript joined by newlines
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    /// Whether any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Number of recorded lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    /// Number of prompts shown so far
    pub fn prompts_shown(&self) -> usize {
        self.prompts
    }

    /// Answers not consumed yet
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, _kind: LineKind, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts += 1;
        let answer = self.answers.pop_front();
        match &answer {
            Some(text) => self.transcript.push(format!("{}{}", prompt, text)),
            None => self.transcript.push(prompt.to_string()),
        }
        Ok(answer)
    }
}
