use clap::Args;
use daydo_core::{Core, ListId};

use crate::utils::{command_error, display::TerminalPresenter};

#[derive(Args, Debug)]
pub struct Command {
    /// Id of the list to open
    list_id: ListId,
}

pub fn handle(command: Command, core: Core) -> command_error::Result<()> {
    let mut app = core.start(TerminalPresenter::default())?;

    if !app.open_list(command.list_id) {
        return super::unknown_list(command.list_id);
    }
    super::finish(&mut app)
}
