use clap::Subcommand;
use daydo_core::{App, Core, ListId, TodoId, ValidationError};

use crate::utils::{
    command_error,
    display::TerminalPresenter,
    exit_code::ExitCode,
    log::{usage_error, LogBuilder, LogType},
};

pub mod init;
pub mod list;
pub mod lists;
pub mod show;
pub mod status;
pub mod todo;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a default config file
    Init(init::Command),
    /// Show every list with its progress
    Lists(lists::Command),
    /// Show the to-dos of a list
    Show(show::Command),
    /// Create, rename or delete lists
    #[command(subcommand)]
    List(list::Command),
    /// Add, toggle, rename or delete to-dos
    #[command(subcommand)]
    Todo(todo::Command),
    /// Display overall progress and daily reset information
    Status(status::Command),
}

impl Command {
    pub fn execute(self, config_path: &str, profile: Option<&str>) -> command_error::Result<()> {
        match self {
            Self::Init(o) => init::handle(o, config_path)?,
            Self::Lists(o) => lists::handle(o, load_core(config_path, profile)?)?,
            Self::Show(o) => show::handle(o, load_core(config_path, profile)?)?,
            Self::List(o) => list::handle(o, load_core(config_path, profile)?)?,
            Self::Todo(o) => todo::handle(o, load_core(config_path, profile)?)?,
            Self::Status(o) => status::handle(o, load_core(config_path, profile)?)?,
        };

        Ok(())
    }
}

fn load_core(config_path: &str, profile: Option<&str>) -> command_error::Result<Core> {
    let core = daydo_core::load(config_path, profile).map_err(|e| {
        command_error::Error::config(eyre::eyre!(
            "An error occured when trying to load the configuration file '{config_path}': {e}"
        ))
    })?;

    if let Err(e) = core.has_found_config_file() {
        tracing::debug!("{e}");
    }
    Ok(core)
}

/// Print the last rendered frame. A failed save is reported since the change
/// dies with the process.
pub(crate) fn finish(app: &mut App<TerminalPresenter>) -> command_error::Result<()> {
    app.presenter_mut().flush();

    if app.has_unsaved_changes() {
        LogBuilder::new(LogType::Warning, "Changes could not be saved")
            .with_branch("Hint", "run again with --verbose for details")
            .print();
        return Err(command_error::Error::Exit(ExitCode::Error));
    }
    Ok(())
}

pub(crate) fn unknown_list<T>(list_id: ListId) -> command_error::Result<T> {
    usage_error(format!("No list with id {list_id}"))
}

pub(crate) fn unknown_todo<T>(list_id: ListId, todo_id: TodoId) -> command_error::Result<T> {
    usage_error(format!("No to-do with id {todo_id} in list {list_id}"))
}

pub(crate) fn invalid_name<T>(error: ValidationError) -> command_error::Result<T> {
    usage_error(format!("Invalid name: {error}"))
}
