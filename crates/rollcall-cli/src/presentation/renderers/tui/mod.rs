mod app;
mod components;
mod tui_event;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rollcall_types::PageToken;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

pub use app::{Action, AppState, InputMode};
pub use tui_event::TuiEvent;

type Backend = CrosstermBackend<io::Stdout>;

/// Interactive roster table.
///
/// Fetches are started through `request_page` and report back on the
/// channel; the loop applies them between key presses so the roster has a
/// single owner.
pub struct BrowseTui {
    tx: Sender<TuiEvent>,
    rx: Receiver<TuiEvent>,
}

impl Default for BrowseTui {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseTui {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> Sender<TuiEvent> {
        self.tx.clone()
    }

    pub fn run<F>(self, mut app: AppState, mut request_page: F) -> Result<()>
    where
        F: FnMut(PageToken),
    {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        if let Some(token) = app.begin_load() {
            request_page(token);
        }

        let result = self.event_loop(&mut terminal, &mut app, &mut request_page);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<F>(
        &self,
        terminal: &mut Terminal<Backend>,
        app: &mut AppState,
        request_page: &mut F,
    ) -> Result<()>
    where
        F: FnMut(PageToken),
    {
        let tick_rate = Duration::from_millis(100);

        loop {
            terminal.draw(|f| ui::draw(f, app))?;

            if event::poll(tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match app.handle_key(key) {
                    Action::Quit => return Ok(()),
                    Action::LoadPage(token) => request_page(token),
                    Action::None => {}
                }
            }

            while let Ok(tui_event) = self.rx.try_recv() {
                match tui_event {
                    TuiEvent::PageLoaded(result) => app.apply_page(result),
                }
            }
        }
    }
}
