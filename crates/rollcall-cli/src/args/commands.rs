use clap::Subcommand;
use std::path::PathBuf;

use super::{ViewArgs, ViewModeArgs};

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Fetch pages and print the user table",
        long_about = "Fetch up to --pages pages (the source ends after page 4), apply local \
deletions, then filter by country and sort. A failure on a later page still prints the rows \
fetched before it."
    )]
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Number of pages to load
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,

        /// Remove a user by id before display (repeatable)
        #[arg(long = "delete", value_name = "ID")]
        delete: Vec<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Interactive user table (press q to quit)")]
    Browse {
        #[command(flatten)]
        view: ViewArgs,

        /// Write logs to this file; the terminal is owned by the table
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,
    },

    #[command(about = "Inspect or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write the default configuration file")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
