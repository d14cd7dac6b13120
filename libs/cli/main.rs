use clap::Parser;
use colored::Colorize;
use directories_next::ProjectDirs;
use std::path::PathBuf;

use utils::{command_error, exit_code::ExitCode};

mod commands;
mod tracing;

mod utils {
    pub mod command_error;
    pub mod display;
    pub mod exit_code;
    pub mod log;
    pub mod prompt;
}

// Note: for uniformity, we dont use clap `default_value` or `default_value_t` options
#[derive(Parser, Debug)]
#[command(
    name = "daydo",
    version,
    long_about = Some("Offline to-do lists whose completion resets every night.")
)]
struct Args {
    /// Path of configuration file (default: "~/.config/daydo/config.toml")
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Profile to use (default: core.default_profile_name or "default")
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: commands::Command,
}

impl Args {
    fn get_config_path(&self) -> eyre::Result<String> {
        let config_path = match &self.config {
            Some(x) => Ok(x.clone()),
            None => {
                if let Some(proj_dirs) = ProjectDirs::from("", "", "daydo") {
                    let config_path: PathBuf = proj_dirs.config_dir().join("config.toml");

                    config_path
                        .to_str()
                        .map(|t| t.to_owned())
                        .ok_or_else(|| eyre::eyre!("couldn't convert os path to string"))
                } else {
                    Err(eyre::eyre!("Project directories could not be found."))
                }
            }
        }?;

        Ok(shellexpand::full(&config_path)?.into_owned())
    }
}

fn run(args: Args) -> command_error::Result<()> {
    let config_path = args
        .get_config_path()
        .map_err(command_error::Error::config)?;

    args.command.execute(&config_path, args.profile.as_deref())
}

pub fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = color_eyre::install().and_then(|_| tracing::setup(args.verbose)) {
        eprintln!("{} {e:?}", "error:".red().bold());
        return ExitCode::Error;
    }

    match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            if let command_error::Error::ExitWithError(_, report) = &e {
                eprintln!("{} {report:?}", "error:".red().bold());
            }
            *e.code()
        }
    }
}
