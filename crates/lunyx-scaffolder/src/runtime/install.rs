//! Dependency installation
//!
//! Runs the product's install command as a subprocess with its output
//! discarded while a [`Spinner`] animates on the progress stream.

use super::spinner::Spinner;
use crate::error::InstallError;
use crate::product::ProductConfig;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command as TokioCommand;

/// An external command that installs the project's declared dependencies
pub trait InstallCommand: Sync {
    /// The command as the user would type it
    fn command_line(&self) -> String;

    /// Run to completion; only the exit status decides success
    fn run(&self) -> impl Future<Output = Result<(), InstallError>> + Send;
}

/// Install command backed by a real subprocess
#[derive(Debug, Clone)]
pub struct ProcessInstall {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl ProcessInstall {
    pub fn new(program: impl Into<String>, args: &[&str], working_dir: &Path) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// The product's install command, run inside `working_dir`
    pub fn from_config<C: ProductConfig>(config: &C, working_dir: &Path) -> Self {
        let (program, args) = config.install_command();
        Self::new(program, args, working_dir)
    }
}

impl InstallCommand for ProcessInstall {
    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(&self) -> impl Future<Output = Result<(), InstallError>> + Send {
        async move {
            let status = TokioCommand::new(&self.program)
                .args(&self.args)
                .current_dir(&self.working_dir)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await
                .map_err(|source| InstallError::Spawn {
                    command: self.command_line(),
                    source,
                })?;

            if status.success() {
                Ok(())
            } else {
                Err(InstallError::Failed {
                    command: self.command_line(),
                    code: status.code(),
                })
            }
        }
    }
}

/// Result of the install stage
#[derive(Debug)]
pub enum InstallOutcome {
    Installed,
    Failed(InstallError),
    /// The install stage was turned off by the caller
    Skipped,
}

impl InstallOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, InstallOutcome::Installed)
    }

    /// Underlying error message, if the install failed
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            InstallOutcome::Failed(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

/// Run `installer` while a spinner animates on `progress`.
///
/// Every frame starts with `prefix`, so the spinner can sit inside a gutter.
/// The spinner is stopped and its line cleared before this returns, on
/// success and on failure alike.
pub async fn install_dependencies<I, W>(
    installer: &I,
    progress: W,
    interval: Duration,
    prefix: &'static str,
) -> InstallOutcome
where
    I: InstallCommand,
    W: Write + Send + 'static,
{
    let command = installer.command_line();
    tracing::info!(%command, "installing dependencies");

    let spinner = Spinner::start_prefixed(progress, interval, prefix);
    let result = installer.run().await;
    match spinner.stop().await {
        Ok(frames) => tracing::debug!(frames, "progress indicator stopped"),
        Err(e) => tracing::debug!(error = %e, "progress indicator failed"),
    }

    match result {
        Ok(()) => {
            tracing::info!(%command, "dependencies installed");
            InstallOutcome::Installed
        }
        Err(e) => {
            tracing::info!(%command, error = %e, "dependency install failed");
            InstallOutcome::Failed(e)
        }
    }
}
