//! Command execution: settings, wiring and result printing

use tracing::{debug, instrument};

use crate::application::services::{CommandOutcome, LoadStatus};
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

/// Run one invocation: load settings, dispatch the command, print the outcome.
#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = resolve_settings(cli)?;

    if cli.show_config {
        if !cli.args.is_empty() {
            return Err(CliError::InvalidArgs(
                "--show-config takes no command".to_string(),
            ));
        }
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    let container = ServiceContainer::new(settings);
    let mut dispatcher = container.dispatcher()?;
    report_load_status(dispatcher.store().load_status());

    let outcome = dispatcher.execute(&cli.args)?;
    print_outcome(&outcome);
    Ok(())
}

/// Layered settings with the `--file` flag applied last.
fn resolve_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load()?;
    if let Some(file) = &cli.file {
        settings = settings.with_data_file(file);
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn report_load_status(status: &LoadStatus) {
    match status {
        LoadStatus::Loaded(n) => debug!("loaded {} employees", n),
        LoadStatus::Missing | LoadStatus::Malformed(_) => output::warning(status),
    }
}

fn print_outcome(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Found(_) | CommandOutcome::Listed(_) => output::info(outcome),
        CommandOutcome::Added(_) | CommandOutcome::Updated(_) | CommandOutcome::Deleted(_) => {
            output::success(outcome)
        }
    }
}
