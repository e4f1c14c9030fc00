use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::AppState;
use super::components::{Component, FooterComponent, HeaderComponent, RosterTableComponent};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(f.area());

    HeaderComponent.render(f, chunks[0], state);
    RosterTableComponent.render(f, chunks[1], state);
    FooterComponent.render(f, chunks[2], state);
}
