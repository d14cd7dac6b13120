use clap::Subcommand;
use daydo_core::{Core, ListId, TodoId};

use super::{finish, invalid_name, unknown_list, unknown_todo};
use crate::utils::{
    command_error,
    display::TerminalPresenter,
    log::{LogBuilder, LogType},
    prompt,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a to-do at the end of a list
    Add {
        list_id: ListId,
        /// Name of the to-do
        name: String,
    },
    /// Mark a to-do as done, or as not done again
    Toggle { list_id: ListId, todo_id: TodoId },
    /// Rename a to-do
    Rename {
        list_id: ListId,
        todo_id: TodoId,
        /// New name of the to-do
        name: String,
    },
    /// Delete a to-do
    Delete {
        list_id: ListId,
        todo_id: TodoId,
        /// Skip the confirmation prompt
        #[clap(short, long)]
        yes: bool,
    },
}

impl Command {
    fn list_id(&self) -> ListId {
        match self {
            Self::Add { list_id, .. }
            | Self::Toggle { list_id, .. }
            | Self::Rename { list_id, .. }
            | Self::Delete { list_id, .. } => *list_id,
        }
    }
}

pub fn handle(command: Command, core: Core) -> command_error::Result<()> {
    let mut app = core.start(TerminalPresenter::default())?;

    let list_id = command.list_id();
    if !app.open_list(list_id) {
        return unknown_list(list_id);
    }

    match command {
        Command::Add { name, .. } => {
            let Some(todo_id) = app.add_todo(list_id, &name).or_else(invalid_name)? else {
                return unknown_list(list_id);
            };
            finish(&mut app)?;

            LogBuilder::new(LogType::Success, "To-do added")
                .with_branch("ID", todo_id)
                .print();
        }
        Command::Toggle { todo_id, .. } => {
            let Some(completed) = app.toggle_todo(list_id, todo_id) else {
                return unknown_todo(list_id, todo_id);
            };
            finish(&mut app)?;

            let message = if completed {
                "To-do done"
            } else {
                "To-do not done"
            };
            LogBuilder::new(LogType::Success, message)
                .with_branch("ID", todo_id)
                .print();
        }
        Command::Rename { todo_id, name, .. } => {
            if !app.rename_todo(list_id, todo_id, &name).or_else(invalid_name)? {
                return unknown_todo(list_id, todo_id);
            }
            finish(&mut app)?;

            LogBuilder::new(LogType::Success, "To-do renamed")
                .with_branch("ID", todo_id)
                .print();
        }
        Command::Delete { todo_id, yes, .. } => {
            let Some(name) = app.todo(list_id, todo_id).map(|t| t.name.clone()) else {
                return unknown_todo(list_id, todo_id);
            };

            let request = app.request_delete_todo(list_id, todo_id);
            let confirmed = yes || prompt::confirm(&request)?;
            if !app.resolve_confirmation(request.token, confirmed) {
                LogBuilder::new(LogType::Info, "Nothing was deleted").print();
                return Ok(());
            }
            finish(&mut app)?;

            LogBuilder::new(LogType::Success, "To-do deleted")
                .with_branch("Name", name)
                .with_branch("ID", todo_id)
                .print();
        }
    }

    Ok(())
}
