// NOTE: Command layout
//
// `list` is the one-shot, scriptable surface (plain table or JSON) and
// `browse` is the interactive one. Both share the same sort/filter/color
// controls so a browse session can be reproduced with `list` flags.

mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "Browse randomuser.me records: sort, filter, color, delete and page", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of $ROLLCALL_PATH/config.toml
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
