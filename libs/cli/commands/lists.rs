use clap::Args;
use daydo_core::Core;

use crate::utils::{command_error, display::TerminalPresenter};

#[derive(Args, Debug)]
pub struct Command {}

pub fn handle(_command: Command, core: Core) -> command_error::Result<()> {
    let mut app = core.start(TerminalPresenter::default())?;
    super::finish(&mut app)
}
