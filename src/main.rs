mod cli;
mod errors;
mod launch;
mod logging;
mod model;
mod notice;
mod scan;
mod state;
mod ui;
mod view;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Startup};
use model::Decision;
use scan::find_mcp_files;
use state::PickerState;
use tracing::{error, info};
use ui::Picker;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<errors::DiscoveryError>()
                .map(errors::DiscoveryError::error_code)
                .or_else(|| {
                    err.downcast_ref::<errors::LaunchError>()
                        .map(errors::LaunchError::error_code)
                })
                .or_else(|| {
                    err.downcast_ref::<errors::TuiError>()
                        .map(|_| "TUI_RUNTIME_ERROR")
                })
                .unwrap_or("UNEXPECTED");
            error!(event = "launcher.failed", code, error = %format!("{err:#}"));
            notice::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let decision = match cli.startup() {
        Startup::Direct(flags) => Decision::blank(flags),
        Startup::Picker(flags) => match pick(cli, flags, true)? {
            Some(decision) => decision,
            None => return Ok(()),
        },
        Startup::Discover(flags) => match pick(cli, flags, false)? {
            Some(decision) => decision,
            None => return Ok(()),
        },
    };

    let plan = launch::plan(
        &decision,
        decision.flags.happy,
        launch::which_on_path,
        notice::print_happy_missing,
    )
    .context("Error launching Claude Code")?;
    Err(launch::exec(&plan)).context("Error launching Claude Code")
}

/// Discover configs and let the user choose. `None` means they quit.
fn pick(cli: &Cli, flags: model::LaunchFlags, always: bool) -> Result<Option<Decision>> {
    let mcp_files = find_mcp_files(cli.local).context("Error finding MCP files")?;
    info!(event = "launcher.discovery.completed", count = mcp_files.len());

    if mcp_files.is_empty() && !always {
        notice::print_no_configs();
        return Ok(Some(Decision::blank(flags)));
    }

    let decision = Picker::new()
        .pick(PickerState::new(mcp_files, flags))
        .context("Error running program")?;
    if decision.is_some() {
        notice::print_launching("");
    }
    Ok(decision)
}
