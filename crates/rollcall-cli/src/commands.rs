use anyhow::Result;
use rollcall_runtime::{Config, resolve_data_path};

use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging::{self, LogTarget};

pub fn run(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => resolve_data_path(Some(path.as_str()))?,
        None => Config::default_path()?,
    };
    let format = cli.format;

    match cli.command {
        Commands::List {
            view,
            pages,
            delete,
            view_mode,
        } => {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            let config = Config::load_from(&config_path)?;
            let options = handlers::list::ListOptions {
                view: view.to_view_state(config.display.color_rows),
                pages,
                delete,
            };
            handlers::list::handle(&config, options, format, view_mode.resolve())
        }

        Commands::Browse { view, log_file } => {
            let target = log_file.map(LogTarget::File).unwrap_or(LogTarget::Off);
            logging::init(cli.log_level, target)?;
            let config = Config::load_from(&config_path)?;
            handlers::browse::handle(&config, view.to_view_state(config.display.color_rows))
        }

        Commands::Config { command } => {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            match command {
                ConfigCommand::Show => handlers::config::show(&config_path, format),
                ConfigCommand::Init { force } => {
                    handlers::config::init(&config_path, force, format)
                }
            }
        }
    }
}

