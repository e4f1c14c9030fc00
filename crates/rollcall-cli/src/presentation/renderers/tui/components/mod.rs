use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod table;

pub(crate) use footer::FooterComponent;
pub(crate) use header::HeaderComponent;
pub(crate) use table::RosterTableComponent;
