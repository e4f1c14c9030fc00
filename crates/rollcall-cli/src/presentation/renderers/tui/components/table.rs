use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct RosterTableComponent;

impl RosterTableComponent {
    fn render_placeholder(f: &mut Frame, area: Rect, lines: Vec<Line>, style: Style) {
        let widget = Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
    }
}

impl Component for RosterTableComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        if state.roster.originals().is_empty() {
            if state.roster.is_errored() {
                let mut lines = vec![Line::from("Error fetching users")];
                if let Some(error) = state.roster.last_error() {
                    lines.push(Line::from(error.to_string()));
                }
                lines.push(Line::from("Press n or R to try again"));
                Self::render_placeholder(f, area, lines, Style::default().fg(Color::Red));
                return;
            }
            if state.roster.is_loading() {
                Self::render_placeholder(
                    f,
                    area,
                    vec![Line::from("Loading users...")],
                    Style::default().fg(Color::Yellow),
                );
                return;
            }
        }

        let striped = state.view.color_rows;
        let rows: Vec<Row> = state
            .visible()
            .rows
            .iter()
            .enumerate()
            .map(|(index, user)| {
                let row = Row::new(vec![
                    Cell::from(user.first_name().to_string()),
                    Cell::from(user.last_name().to_string()),
                    Cell::from(user.country().to_string()),
                    Cell::from(user.id().to_string()),
                ]);
                if striped && index % 2 == 1 {
                    row.style(Style::default().bg(Color::DarkGray))
                } else {
                    row
                }
            })
            .collect();

        let header = Row::new(vec!["First", "Last", "Country", "ID"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let widths = [
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(22),
            Constraint::Min(10),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL))
            .row_highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut state.table_state);
    }
}
