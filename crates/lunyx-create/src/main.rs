//! Lunyx CLI - Project scaffolding for Lunyx extensions

mod logging;

use anyhow::Result;
use clap::Parser;
use lunyx_scaffolder::tui::{LinePrompter, PlainReporter, Session};
use lunyx_scaffolder::{CreateArgs, Lunyx, NamingScheme, ScaffoldOutcome, Scaffolder};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lunyx-create")]
#[command(about = "Create a new Lunyx extension project")]
#[command(version)]
pub struct Args {
    /// Project directory (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Extension name; skips the first prompt
    #[arg(long)]
    pub name: Option<String>,

    /// Main plugin class name; skips the second prompt
    #[arg(long = "class-name")]
    pub class_name: Option<String>,

    /// Write the project files without installing dependencies
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Use plain line prompts instead of the interactive UI
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl From<&Args> for CreateArgs {
    fn from(args: &Args) -> Self {
        CreateArgs {
            directory: args.directory.clone(),
            display_name: args.name.clone(),
            class_name: args.class_name.clone(),
            skip_install: args.skip_install,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    logging::init_logging(args.verbose, args.quiet)?;

    let config = Lunyx;
    let scheme = NamingScheme::from_config(&config)?;
    let scaffolder = Scaffolder::new(config, scheme, CreateArgs::from(&args));

    #[cfg(feature = "tui")]
    {
        use lunyx_scaffolder::tui::{ClackPrompter, ClackReporter};

        if !args.plain && interactive_terminal() {
            let outcome = scaffolder
                .run(Session::open(ClackPrompter), &mut ClackReporter)
                .await;
            finish(&outcome);
            return Ok(());
        }
    }

    let outcome = scaffolder
        .run(Session::open(LinePrompter::stdio()), &mut PlainReporter)
        .await;
    finish(&outcome);
    Ok(())
}

/// cliclack needs a terminal on both ends
#[cfg(feature = "tui")]
fn interactive_terminal() -> bool {
    use std::io::IsTerminal;

    console::user_attended() && std::io::stdin().is_terminal()
}

/// Every outcome exits normally; the user has already seen the details.
///
/// The session is closed by now, so this only logs.
fn finish(outcome: &ScaffoldOutcome) {
    match outcome {
        ScaffoldOutcome::Created { files, install } => tracing::debug!(
            files = files.len(),
            installed = install.succeeded(),
            "scaffold created"
        ),
        ScaffoldOutcome::Rejected(e) => tracing::debug!(error = %e, "answer rejected"),
        ScaffoldOutcome::Aborted(e) => tracing::debug!(error = %e, "scaffold aborted"),
    }
}
