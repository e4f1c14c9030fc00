use rollcall_types::SortKey;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};
use crate::presentation::views::RosterListView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRowViewModel {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub thumbnail: String,
}

/// One rendering of the roster through the current view controls.
#[derive(Debug, Clone, Serialize)]
pub struct RosterListViewModel {
    pub rows: Vec<UserRowViewModel>,
    /// Records after deletions, before the country filter
    pub total: usize,
    pub fetched: usize,
    pub deleted: usize,
    pub sort: SortKey,
    pub filter: String,
    pub color_rows: bool,
    pub pages_loaded: usize,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
    /// Whether the text view may emit ANSI colors for `color_rows`
    #[serde(skip)]
    pub paint_rows: bool,
}

impl RosterListViewModel {
    pub fn shown(&self) -> usize {
        self.rows.len()
    }
}

impl CreateView for RosterListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(RosterListView::new(self, mode))
    }
}

impl fmt::Display for RosterListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
