// NOTE: rollcall Architecture
//
// Pages are fetched on demand and accumulated append-only; nothing is cached
// on disk. Every screen (console table, JSON, TUI) is a projection of the
// accumulated roster through the current ViewState, recomputed whenever the
// controls or the roster change.
//
// Deletions and reset are local to the session: they edit the roster's
// current view of the records, never the source.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, SortArg};
pub use commands::run;
