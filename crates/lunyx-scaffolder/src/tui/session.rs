//! The interactive input session
//!
//! A [`Session`] owns the line-oriented input device for one run and
//! releases it exactly once, either through [`Session::close`] or on drop.

use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Ask a question, get a line of text
pub trait Prompter {
    fn ask(&mut self, question: &str) -> io::Result<String>;

    /// Release the input device
    fn close(&mut self) -> io::Result<()>;
}

/// Owned input session
pub struct Session<P: Prompter> {
    prompter: P,
    open: bool,
}

impl<P: Prompter> Session<P> {
    pub fn open(prompter: P) -> Self {
        Self {
            prompter,
            open: true,
        }
    }

    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        if !self.open {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "input session already closed",
            ));
        }
        self.prompter.ask(question)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Close the session now and surface any error from releasing it
    pub fn close(mut self) -> io::Result<()> {
        self.release()
    }

    fn release(&mut self) -> io::Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.prompter.close()
    }
}

impl<P: Prompter> Drop for Session<P> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::debug!(error = %e, "failed to close input session");
        }
    }
}

/// Plain line prompts over any reader/writer pair
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    /// Returns the line without its terminator; other whitespace is kept.
    /// End of input yields an empty answer.
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{} ", question.blue())?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn close(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
