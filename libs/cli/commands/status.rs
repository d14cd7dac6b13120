use chrono::{DateTime, Local};
use clap::Args;
use daydo_core::{Core, Progress};
use serde_derive::Serialize;

use crate::utils::{
    command_error,
    display::{progress_line, TerminalPresenter},
    log::{LogBuilder, LogType},
};

#[derive(Serialize, Debug)]
struct StatusOutput {
    overall: Progress,
    lists: usize,
    daily_reset: bool,
    last_reset: Option<DateTime<Local>>,
    next_reset: Option<DateTime<Local>>,
    storage: String,
    config_found: bool,
}

#[derive(Args, Debug)]
pub struct Command {
    /// Show json output
    #[clap(long)]
    json: bool,
}

pub fn handle(command: Command, core: Core) -> command_error::Result<()> {
    let scheduler = core.reset_scheduler()?;
    let storage = core.describe_storage();
    let config_found = core.has_found_config_file().is_ok();

    let app = core.start(TerminalPresenter::default())?;
    let last_reset = app.last_reset();
    let next_reset = scheduler
        .as_ref()
        .and_then(|scheduler| scheduler.next_reset_time(last_reset));

    let output = StatusOutput {
        overall: app.overall_progress(),
        lists: app.lists().len(),
        daily_reset: scheduler.is_some(),
        last_reset: last_reset.map(|t| t.with_timezone(&Local)),
        next_reset,
        storage,
        config_found,
    };

    if command.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        pretty_print_status(output);
    }

    Ok(())
}

fn format_time(time: Option<DateTime<Local>>, fallback: &str) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| fallback.to_owned())
}

fn pretty_print_status(output: StatusOutput) {
    let next_reset = if output.daily_reset {
        format_time(output.next_reset, "at next start")
    } else {
        "disabled".to_owned()
    };

    let config_hint =
        (!output.config_found).then_some("not found, run `daydo init` to create one");

    LogBuilder::new(LogType::Info, "Overall progress")
        .with_branch("Progress", progress_line(&output.overall))
        .with_branch("Lists", output.lists)
        .with_branch("Last reset", format_time(output.last_reset, "never"))
        .with_branch("Next reset", next_reset)
        .with_branch("Storage", output.storage)
        .with_optional_branch("Config", config_hint)
        .print();
}
