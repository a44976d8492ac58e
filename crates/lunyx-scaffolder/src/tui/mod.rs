//! Interactive front-end: input session, status output, orchestration
//!
//! The plain line prompter is always available; the cliclack front-end is
//! only compiled with the `tui` feature.

#[cfg(feature = "tui")]
mod clack;
mod prompts;
mod report;
mod session;

#[cfg(feature = "tui")]
pub use clack::{ClackPrompter, ClackReporter};
pub use prompts::{CreateArgs, ScaffoldOutcome, Scaffolder};
pub use report::{PlainReporter, Reporter};
pub use session::{LinePrompter, Prompter, Session};
