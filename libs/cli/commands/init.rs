use std::path::Path;

use clap::Args;
use daydo_config::Config;

use crate::utils::{
    command_error,
    log::{usage_error, LogBuilder, LogType},
};

#[derive(Args, Debug)]
pub struct Command {
    /// Overwrite an existing configuration file
    #[clap(long)]
    force: bool,
}

pub fn handle(command: Command, config_path: &str) -> command_error::Result<()> {
    if Path::new(config_path).exists() && !command.force {
        return usage_error(format!(
            "A configuration file already exists at '{config_path}', use --force to overwrite it"
        ));
    }

    daydo_config::save(config_path, &Config::default())?;

    LogBuilder::new(LogType::Success, "Configuration file created")
        .with_branch("Path", config_path.to_owned())
        .print();
    Ok(())
}
