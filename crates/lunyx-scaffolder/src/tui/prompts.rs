//! Prompt orchestration: ask, derive, render, write, install, report

use super::report::Reporter;
use super::session::{Prompter, Session};
use crate::error::{Field, ScaffoldError, ValidationError};
use crate::identifiers::{DerivedIdentifiers, ScaffoldRequest};
use crate::materializer::{materialize, Filesystem, LocalFilesystem};
use crate::product::{NamingScheme, ProductConfig};
use crate::runtime::{install_dependencies, InstallCommand, InstallOutcome, ProcessInstall};
use crate::runtime::spinner::TICK_INTERVAL;
use crate::templates;
use crate::validation::validate;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Options for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project root; defaults to the working directory
    pub directory: Option<PathBuf>,

    /// Pre-supplied display name; skips the first prompt
    pub display_name: Option<String>,

    /// Pre-supplied class name; skips the second prompt
    pub class_name: Option<String>,

    /// Do not run the install command
    pub skip_install: bool,
}

/// How a run ended
#[derive(Debug)]
pub enum ScaffoldOutcome {
    /// An answer was empty; nothing was written
    Rejected(ValidationError),
    /// A prompt or filesystem operation failed
    Aborted(ScaffoldError),
    /// All artifacts were written; the install may still have failed
    Created {
        files: Vec<PathBuf>,
        install: InstallOutcome,
    },
}

impl ScaffoldOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, ScaffoldOutcome::Created { .. })
    }
}

/// One scaffolding run, wired to its collaborators
pub struct Scaffolder<C, F, I, W> {
    config: C,
    scheme: NamingScheme,
    root: PathBuf,
    args: CreateArgs,
    fs: F,
    installer: I,
    progress: W,
    tick: Duration,
}

impl<C: ProductConfig> Scaffolder<C, LocalFilesystem, ProcessInstall, Stdout> {
    /// Scaffolder on the real filesystem, installing with the product's command
    pub fn new(config: C, scheme: NamingScheme, args: CreateArgs) -> Self {
        let root = args.directory.clone().unwrap_or_else(|| PathBuf::from("."));
        let installer = ProcessInstall::from_config(&config, &root);

        Self {
            config,
            scheme,
            root,
            args,
            fs: LocalFilesystem,
            installer,
            progress: io::stdout(),
            tick: TICK_INTERVAL,
        }
    }
}

impl<C, F, I, W> Scaffolder<C, F, I, W>
where
    C: ProductConfig,
    F: Filesystem,
    I: InstallCommand,
    W: Write + Send + 'static,
{
    pub fn with_filesystem<F2: Filesystem>(self, fs: F2) -> Scaffolder<C, F2, I, W> {
        Scaffolder {
            config: self.config,
            scheme: self.scheme,
            root: self.root,
            args: self.args,
            fs,
            installer: self.installer,
            progress: self.progress,
            tick: self.tick,
        }
    }

    pub fn with_installer<I2: InstallCommand>(self, installer: I2) -> Scaffolder<C, F, I2, W> {
        Scaffolder {
            config: self.config,
            scheme: self.scheme,
            root: self.root,
            args: self.args,
            fs: self.fs,
            installer,
            progress: self.progress,
            tick: self.tick,
        }
    }

    /// Stream the progress indicator draws on
    pub fn with_progress<W2>(self, progress: W2) -> Scaffolder<C, F, I, W2>
    where
        W2: Write + Send + 'static,
    {
        Scaffolder {
            config: self.config,
            scheme: self.scheme,
            root: self.root,
            args: self.args,
            fs: self.fs,
            installer: self.installer,
            progress,
            tick: self.tick,
        }
    }

    pub fn with_tick_interval(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Run the pipeline and close the session.
    ///
    /// The session is closed exactly once on every path, after the last
    /// status line has been written.
    pub async fn run<P, R>(self, mut session: Session<P>, reporter: &mut R) -> ScaffoldOutcome
    where
        P: Prompter,
        R: Reporter,
    {
        let outcome = self.drive(&mut session, reporter).await;
        if let Err(e) = session.close() {
            tracing::debug!(error = %e, "failed to close input session");
        }
        outcome
    }

    async fn drive<P, R>(self, session: &mut Session<P>, reporter: &mut R) -> ScaffoldOutcome
    where
        P: Prompter,
        R: Reporter,
    {
        reporter.intro(&format!(
            "Welcome to your {} Extension Creator!",
            self.config.display_name()
        ));

        let request = match self.collect(session) {
            Ok(request) => request,
            Err(e) => return abort(reporter, e),
        };

        let ids = DerivedIdentifiers::derive(&self.scheme, &request.display_name);
        tracing::debug!(slug = %ids.id_slug, package_id = %ids.package_id, "derived identifiers");

        let artifacts = match templates::render(&self.config, &request, &ids) {
            Ok(artifacts) => artifacts,
            Err(e) => return abort(reporter, e),
        };

        let files = match materialize(&self.fs, &self.root, &artifacts) {
            Ok(files) => files,
            Err(e) => return abort(reporter, e),
        };
        reporter.success(&format!(
            "Created {} files in {} ({})",
            files.len(),
            self.root.display(),
            self.relative_names(&files).join(", ")
        ));

        let install_line = self.config.install_command_line();
        let install = if self.args.skip_install {
            reporter.warning(&format!(
                "Skipped dependency install. Run '{}' before you start.",
                install_line
            ));
            InstallOutcome::Skipped
        } else {
            reporter.step("Installing dependencies (this might take a moment)...");
            let outcome = install_dependencies(
                &self.installer,
                self.progress,
                self.tick,
                reporter.progress_prefix(),
            )
            .await;
            match &outcome {
                InstallOutcome::Installed => reporter.success("Dependencies installed successfully!"),
                InstallOutcome::Failed(e) => {
                    reporter.error(&format!("Failed to install dependencies: {}", e));
                    reporter.error(&format!(
                        "You might need to run '{}' manually.",
                        install_line
                    ));
                }
                InstallOutcome::Skipped => {}
            }
            outcome
        };

        reporter.outro(&format!(
            "You can run '{}' to start development server.",
            self.config.dev_command()
        ));

        ScaffoldOutcome::Created { files, install }
    }

    /// Written paths as the user sees them, relative to the project root
    fn relative_names(&self, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|file| file.strip_prefix(&self.root).unwrap_or(file).display().to_string())
            .collect()
    }

    /// Ask for both answers, validating each before the next prompt
    fn collect<P: Prompter>(&self, session: &mut Session<P>) -> Result<ScaffoldRequest, ScaffoldError> {
        let display_name = answer(
            session,
            Field::DisplayName,
            &format!(
                "What name do you want to give to your {} extension?",
                self.config.display_name()
            ),
            self.args.display_name.as_deref(),
        )?;
        validate(Field::DisplayName, &display_name)?;

        let class_name = answer(
            session,
            Field::ClassName,
            "What class name do you want to use for your main plugin file (e.g., MyExtension)?",
            self.args.class_name.as_deref(),
        )?;
        validate(Field::ClassName, &class_name)?;

        Ok(ScaffoldRequest {
            display_name,
            class_name,
        })
    }
}

fn answer<P: Prompter>(
    session: &mut Session<P>,
    field: Field,
    question: &str,
    preset: Option<&str>,
) -> Result<String, ScaffoldError> {
    match preset {
        Some(value) => Ok(value.to_string()),
        None => session
            .ask(question)
            .map_err(|source| ScaffoldError::Prompt { field, source }),
    }
}

fn abort<R: Reporter>(reporter: &mut R, err: ScaffoldError) -> ScaffoldOutcome {
    tracing::debug!(error = %err, "scaffolding stopped");
    reporter.abort(&format!("{}. Exiting.", err));
    match err {
        ScaffoldError::Validation(e) => ScaffoldOutcome::Rejected(e),
        other => ScaffoldOutcome::Aborted(other),
    }
}
