use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::{AppState, InputMode};

pub(crate) struct FooterComponent;

const KEY_HELP: &str =
    "j/k move  c colors  s country sort  1/2/3/0 sort first/last/country/none  / filter  d delete  r reset  n next page (R after an error)  q quit";

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let line = match state.input_mode {
            InputMode::EditingFilter => Line::from(format!(
                "Country filter: {}_   (Enter/Esc to finish)",
                state.filter_input
            )),
            InputMode::Normal => Line::from(KEY_HELP),
        };

        let footer_widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer_widget, area);
    }
}
