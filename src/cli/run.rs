use std::{fs, path::Path};

use anyhow::Result;
use clap::CommandFactory;

use super::{
    args::{Arguments, Command},
    check::check,
    exit_status::ExitStatus,
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Main entry point for the keysweep CLI: dispatches to the command
/// handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            Ok(ExitStatus::Success)
        }
        None => {
            Arguments::command().print_help()?;
            Ok(ExitStatus::Success)
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
