use clap::Subcommand;
use daydo_core::{Core, ListId};

use super::{finish, invalid_name, unknown_list};
use crate::utils::{
    command_error,
    display::TerminalPresenter,
    log::{LogBuilder, LogType},
    prompt,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new list
    Add {
        /// Name of the list
        name: String,
    },
    /// Rename a list
    Rename {
        list_id: ListId,
        /// New name of the list
        name: String,
    },
    /// Delete a list and every to-do it holds
    Delete {
        list_id: ListId,
        /// Skip the confirmation prompt
        #[clap(short, long)]
        yes: bool,
    },
}

pub fn handle(command: Command, core: Core) -> command_error::Result<()> {
    let mut app = core.start(TerminalPresenter::default())?;

    match command {
        Command::Add { name } => {
            let list_id = app.add_list(&name).or_else(invalid_name)?;
            finish(&mut app)?;

            LogBuilder::new(LogType::Success, "List created")
                .with_branch("ID", list_id)
                .print();
        }
        Command::Rename { list_id, name } => {
            if !app.rename_list(list_id, &name).or_else(invalid_name)? {
                return unknown_list(list_id);
            }
            finish(&mut app)?;

            LogBuilder::new(LogType::Success, "List renamed")
                .with_branch("ID", list_id)
                .print();
        }
        Command::Delete { list_id, yes } => {
            let Some(name) = app.list(list_id).map(|l| l.name.clone()) else {
                return unknown_list(list_id);
            };

            let request = app.request_delete_list(list_id);
            let confirmed = yes || prompt::confirm(&request)?;
            if !app.resolve_confirmation(request.token, confirmed) {
                LogBuilder::new(LogType::Info, "Nothing was deleted").print();
                return Ok(());
            }
            finish(&mut app)?;

            LogBuilder::new(LogType::Success, "List deleted")
                .with_branch("Name", name)
                .with_branch("ID", list_id)
                .print();
        }
    }

    Ok(())
}
