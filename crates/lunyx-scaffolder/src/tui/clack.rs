//! Charm-style prompts and status lines using cliclack

use super::report::Reporter;
use super::session::Prompter;
use std::io;

/// Inline text prompts
#[derive(Debug, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        // Not required: an empty answer must reach validation instead of re-prompting
        cliclack::input(question).required(false).interact()
    }

    fn close(&mut self) -> io::Result<()> {
        console::Term::stderr().show_cursor()
    }
}

/// cliclack's left bar plus padding
const GUTTER: &str = "│  ";

/// Status lines in the cliclack gutter
#[derive(Debug, Default)]
pub struct ClackReporter;

impl Reporter for ClackReporter {
    fn intro(&mut self, title: &str) {
        emit(cliclack::intro(title));
    }

    fn step(&mut self, message: &str) {
        emit(cliclack::log::step(message));
    }

    fn success(&mut self, message: &str) {
        emit(cliclack::log::success(message));
    }

    fn warning(&mut self, message: &str) {
        emit(cliclack::log::warning(message));
    }

    fn error(&mut self, message: &str) {
        emit(cliclack::log::error(message));
    }

    fn outro(&mut self, message: &str) {
        emit(cliclack::outro(message));
    }

    fn abort(&mut self, message: &str) {
        emit(cliclack::outro_cancel(message));
    }

    fn progress_prefix(&self) -> &'static str {
        GUTTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_sits_in_gutter() {
        assert_eq!(ClackReporter.progress_prefix(), "│  ");
    }
}

fn emit(result: io::Result<()>) {
    if let Err(e) = result {
        tracing::debug!(error = %e, "terminal write failed");
    }
}
