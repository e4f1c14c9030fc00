use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::pad;
use crate::presentation::view_models::{RosterListViewModel, UserRowViewModel, ViewMode};

const ID_WIDTH: usize = 38;
const NAME_WIDTH: usize = 14;
const COUNTRY_WIDTH: usize = 20;

// --------------------------------------------------------
// Roster List View
// --------------------------------------------------------

pub struct RosterListView<'a> {
    data: &'a RosterListViewModel,
    mode: ViewMode,
}

impl<'a> RosterListView<'a> {
    pub fn new(data: &'a RosterListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn header(&self) -> String {
        match self.mode {
            ViewMode::Minimal => String::new(),
            ViewMode::Compact => format!(
                "{} {} COUNTRY",
                pad("FIRST", NAME_WIDTH),
                pad("LAST", NAME_WIDTH)
            ),
            ViewMode::Standard => format!(
                "{} {} {} COUNTRY",
                pad("ID", ID_WIDTH),
                pad("FIRST", NAME_WIDTH),
                pad("LAST", NAME_WIDTH)
            ),
            ViewMode::Verbose => format!(
                "{} {} {} {} THUMBNAIL",
                pad("ID", ID_WIDTH),
                pad("FIRST", NAME_WIDTH),
                pad("LAST", NAME_WIDTH),
                pad("COUNTRY", COUNTRY_WIDTH)
            ),
        }
    }

    fn line(&self, row: &UserRowViewModel) -> String {
        match self.mode {
            ViewMode::Minimal => row.id.clone(),
            ViewMode::Compact => format!(
                "{} {} {}",
                pad(&row.first_name, NAME_WIDTH),
                pad(&row.last_name, NAME_WIDTH),
                row.country
            ),
            ViewMode::Standard => format!(
                "{} {} {} {}",
                pad(&row.id, ID_WIDTH),
                pad(&row.first_name, NAME_WIDTH),
                pad(&row.last_name, NAME_WIDTH),
                row.country
            ),
            ViewMode::Verbose => format!(
                "{} {} {} {} {}",
                pad(&row.id, ID_WIDTH),
                pad(&row.first_name, NAME_WIDTH),
                pad(&row.last_name, NAME_WIDTH),
                pad(&row.country, COUNTRY_WIDTH),
                row.thumbnail
            ),
        }
    }

    fn summary(&self) -> String {
        let data = self.data;
        let filter = if data.filter.is_empty() {
            "-".to_string()
        } else {
            format!("\"{}\"", data.filter)
        };

        let mut summary = format!(
            "Showing {} of {} users | sort: {} | filter: {}",
            data.shown(),
            data.total,
            data.sort,
            filter
        );
        if data.deleted > 0 {
            summary.push_str(&format!(" | deleted: {}", data.deleted));
        }
        summary.push_str(&format!(" | pages loaded: {}", data.pages_loaded));
        if data.has_more {
            summary.push_str(" (more available)");
        }
        summary
    }
}

impl<'a> fmt::Display for RosterListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;

        if self.mode == ViewMode::Minimal {
            for row in &data.rows {
                writeln!(f, "{}", row.id)?;
            }
            return Ok(());
        }

        if data.rows.is_empty() {
            if data.total == 0 {
                writeln!(f, "No users loaded.")?;
            } else {
                writeln!(
                    f,
                    "No users match \"{}\" ({} hidden).",
                    data.filter, data.total
                )?;
            }
        } else {
            let header = self.header();
            writeln!(f, "{}", header)?;
            writeln!(f, "{}", "-".repeat(header.chars().count()))?;

            let paint = data.color_rows && data.paint_rows;
            for (index, row) in data.rows.iter().enumerate() {
                let line = self.line(row);
                if paint && index % 2 == 1 {
                    writeln!(f, "{}", line.on_bright_black())?;
                } else {
                    writeln!(f, "{}", line)?;
                }
            }
        }

        if self.mode != ViewMode::Compact {
            writeln!(f)?;
            writeln!(f, "{}", self.summary())?;
        }

        Ok(())
    }
}
