use crate::cli::Cli;
use crate::cli::Commands::{Check, Init, Options, Ui};
use crate::config::ConfigManager;
use crate::utils::logging;
use std::path::Path;

mod check;
mod init;
mod options;
mod ui;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let initial = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logging::init(initial);

    let config_path = cli.config.as_deref();
    match cli.command {
        Ui => ui::handle(load(config_path, cli.verbose)?),
        Options { all } => options::handle(load(config_path, cli.verbose)?, all),
        Init { force } => init::handle(config_path, force),
        Check => check::handle(load(config_path, cli.verbose)?),
    }
}

fn load(path: Option<&Path>, verbose: bool) -> Result<ConfigManager, Box<dyn std::error::Error>> {
    let config_manager = ConfigManager::new(path)?;
    if !verbose {
        logging::set_level(config_manager.app_config.log_level.into());
    }
    Ok(config_manager)
}
