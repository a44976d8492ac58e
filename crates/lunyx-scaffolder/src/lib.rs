//! Lunyx Scaffolder - Core library for the `lunyx-create` CLI
//!
//! Collects a display name and a class name, derives machine-safe
//! identifiers from them, renders the extension's manifest, project
//! descriptor and entry file, writes them to disk, and installs the new
//! project's dependencies behind a progress indicator.
//!
//! # Architecture
//!
//! The pipeline is strictly linear; each stage runs only if the previous
//! one succeeded:
//!
//! - **validation** - rejects empty answers
//! - **identifiers** - slug, package id, repository URL
//! - **templates** - renders the three artifacts
//! - **materializer** - creates `src/` and writes the artifacts, fail-fast
//! - **runtime** - runs the install command while a spinner animates
//! - **tui** - owns the input session and drives the stages above
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts and status lines
//!
//! # Example Usage
//!
//! ```ignore
//! use lunyx_scaffolder::{CreateArgs, Lunyx, NamingScheme, Scaffolder};
//! use lunyx_scaffolder::tui::{LinePrompter, PlainReporter, Session};
//!
//! let scheme = NamingScheme::from_config(&Lunyx)?;
//! let outcome = Scaffolder::new(Lunyx, scheme, CreateArgs::default())
//!     .run(Session::open(LinePrompter::stdio()), &mut PlainReporter)
//!     .await;
//! ```

pub mod error;
pub mod identifiers;
pub mod materializer;
pub mod product;
pub mod runtime;
pub mod templates;
pub mod tui;
pub mod validation;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use error::{Field, InstallError, ScaffoldError, ValidationError};
pub use identifiers::{DerivedIdentifiers, ScaffoldRequest};
pub use materializer::{materialize, Filesystem, LocalFilesystem};
pub use product::{Lunyx, NamingScheme, ProductConfig};
pub use runtime::{install_dependencies, InstallCommand, InstallOutcome, ProcessInstall};
pub use templates::{render, Artifact, ArtifactSet};
pub use tui::{CreateArgs, ScaffoldOutcome, Scaffolder};
