//! User-facing status output

use colored::Colorize;

/// Sink for the status lines of one run.
///
/// Terminal write failures are not actionable mid-run, so these methods
/// do not return errors.
pub trait Reporter {
    /// Opening banner
    fn intro(&mut self, title: &str);

    /// A stage is starting
    fn step(&mut self, message: &str);

    fn success(&mut self, message: &str);

    fn warning(&mut self, message: &str);

    /// A non-fatal failure
    fn error(&mut self, message: &str);

    /// Closing line of a run that produced a project
    fn outro(&mut self, message: &str);

    /// Closing line of a run that stopped on a fatal error
    fn abort(&mut self, message: &str);

    /// Drawn before each progress frame so the spinner lines up with status lines
    fn progress_prefix(&self) -> &'static str {
        ""
    }
}

/// Colored `println!` output
#[derive(Debug, Default)]
pub struct PlainReporter;

impl Reporter for PlainReporter {
    fn intro(&mut self, title: &str) {
        println!("{}", format!("✨ {} ✨", title).cyan());
    }

    fn step(&mut self, message: &str) {
        println!("{}", format!("\n⏳ {}", message).yellow());
    }

    fn success(&mut self, message: &str) {
        println!("{}", format!("✅ {}", message).green());
    }

    fn warning(&mut self, message: &str) {
        eprintln!("{}", message.yellow());
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn outro(&mut self, message: &str) {
        println!("{}", message.cyan());
    }

    fn abort(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }
}
