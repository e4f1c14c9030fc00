use serde::{Deserialize, Serialize};
use std::fmt;

use crate::User;

/// Column used to order the visible rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep accumulation/filter order
    #[default]
    None,
    Country,
    FirstName,
    LastName,
}

impl SortKey {
    /// Attribute compared when sorting by this key. `None` has no attribute.
    pub fn extract(self) -> Option<fn(&User) -> &str> {
        match self {
            SortKey::None => None,
            SortKey::Country => Some(User::country),
            SortKey::FirstName => Some(User::first_name),
            SortKey::LastName => Some(User::last_name),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Country => "country",
            SortKey::FirstName => "first",
            SortKey::LastName => "last",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ephemeral UI controls. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub sort_key: SortKey,
    /// Always lower-cased; empty disables filtering
    pub filter_text: String,
    /// Presentation only, never changes the row set or order
    pub color_rows: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, text: &str) {
        self.filter_text = text.to_lowercase();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn toggle_country_sort(&mut self) {
        self.sort_key = match self.sort_key {
            SortKey::Country => SortKey::None,
            _ => SortKey::Country,
        };
    }

    pub fn toggle_color_rows(&mut self) {
        self.color_rows = !self.color_rows;
    }
}
