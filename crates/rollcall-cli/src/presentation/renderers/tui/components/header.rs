use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let (shown, total) = {
            let projection = state.visible();
            (projection.len(), projection.total)
        };

        let filter = if state.view.filter_text.is_empty() {
            "-".to_string()
        } else {
            format!("\"{}\"", state.view.filter_text)
        };
        let pages = state.roster.accumulator().pages_loaded();
        let more = if state.roster.has_next_page() { "+" } else { "" };

        let mut summary = vec![
            Span::styled(
                " rollcall ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " {}/{} users | sort: {} | filter: {} | colors: {} | pages: {}{}",
                shown,
                total,
                state.view.sort_key,
                filter,
                if state.view.color_rows { "on" } else { "off" },
                pages,
                more
            )),
        ];
        if state.roster.is_loading() {
            summary.push(Span::styled(
                "  ⏳ Loading...",
                Style::default().fg(Color::Yellow),
            ));
        }

        let status_style = if state.roster.is_errored() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let status = Line::from(Span::styled(
            format!(" {}", state.status.as_deref().unwrap_or("")),
            status_style,
        ));

        f.render_widget(Paragraph::new(vec![Line::from(summary), status]), area);
    }
}
