//! Dependency installation and progress feedback
//!
//! This module provides:
//! - A glyph-cycling progress indicator confined to one tokio task
//! - The install command abstraction and its subprocess implementation

pub mod install;
pub mod spinner;

pub use install::{install_dependencies, InstallCommand, InstallOutcome, ProcessInstall};
pub use spinner::{GlyphCycle, Spinner, TICK_INTERVAL};
