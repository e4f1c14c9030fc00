pub mod accumulator;
pub mod config;
pub mod error;
pub mod roster;

pub use accumulator::{LoadOutcome, LoadState, PageAccumulator};
pub use config::{Config, DisplayConfig, resolve_data_path};
pub use error::{Error, Result};
pub use roster::Roster;
