pub mod config;
pub mod roster;

pub use config::{present_config, present_config_init};
pub use roster::{present_roster_list, user_row};
