pub mod config;
pub mod roster;

pub use config::{ConfigInitView, ConfigView};
pub use roster::RosterListView;
