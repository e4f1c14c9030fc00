pub mod config;
pub mod result;
pub mod roster;
pub mod status;

pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use result::CommandResultViewModel;
pub use roster::{RosterListViewModel, UserRowViewModel};
pub use status::{StatusBadge, Tip};

use serde::Serialize;
use std::fmt;

/// Text density. JSON output ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Ids only
    Minimal,
    /// Name and country
    Compact,
    /// Ids, names, country and the summary line
    #[default]
    Standard,
    /// Standard plus thumbnails
    Verbose,
}

/// Build the text view of a ViewModel at the requested density.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
