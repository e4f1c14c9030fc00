use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;
use rollcall_engine::{LocaleCollator, Projection};
use rollcall_providers::FetchError;
use rollcall_runtime::{LoadOutcome, Roster};
use rollcall_types::{PageResult, PageToken, SortKey, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    EditingFilter,
}

/// What the event loop must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    LoadPage(PageToken),
}

/// Everything the browse screen shows. Rows are never cached: each frame
/// projects the roster through `view`.
pub struct AppState {
    pub roster: Roster,
    pub view: ViewState,
    pub table_state: TableState,
    pub input_mode: InputMode,
    pub filter_input: String,
    pub status: Option<String>,
    collator: LocaleCollator,
}

impl AppState {
    pub fn new(collator: LocaleCollator, view: ViewState) -> Self {
        Self {
            roster: Roster::new(),
            filter_input: view.filter_text.clone(),
            view,
            table_state: TableState::default(),
            input_mode: InputMode::Normal,
            status: None,
            collator,
        }
    }

    pub fn visible(&self) -> Projection<'_> {
        self.roster.project(&self.view, &self.collator)
    }

    /// Claim the next page; the caller performs the fetch.
    pub fn begin_load(&mut self) -> Option<PageToken> {
        let token = self.roster.begin_load();
        if token.is_some() {
            self.status = None;
        }
        token
    }

    pub fn apply_page(&mut self, result: Result<PageResult, FetchError>) {
        match self.roster.complete_load(result) {
            LoadOutcome::Appended(count) => {
                let more = if self.roster.has_next_page() {
                    ", n for more"
                } else {
                    ", no more pages"
                };
                self.status = Some(format!("Loaded {} users{}", count, more));
            }
            LoadOutcome::Failed(err) => {
                self.status = Some(format!("Error fetching users: {} (n to try again)", err));
            }
            LoadOutcome::Skipped => {}
        }
        self.clamp_selection();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::EditingFilter => {
                self.edit_filter(key.code);
                Action::None
            }
            InputMode::Normal => self.handle_normal_key(key.code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char('c') => self.view.toggle_color_rows(),
            KeyCode::Char('s') => self.set_view(ViewState::toggle_country_sort),
            KeyCode::Char('0') => self.set_view(|v| v.set_sort(SortKey::None)),
            KeyCode::Char('1') => self.set_view(|v| v.set_sort(SortKey::FirstName)),
            KeyCode::Char('2') => self.set_view(|v| v.set_sort(SortKey::LastName)),
            KeyCode::Char('3') => self.set_view(|v| v.set_sort(SortKey::Country)),
            KeyCode::Char('/') => self.input_mode = InputMode::EditingFilter,
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('r') => {
                self.roster.reset();
                self.status = Some("Deletions undone".to_string());
                self.clamp_selection();
            }
            KeyCode::Char('n') | KeyCode::Char('R') => return self.request_next_page(),
            _ => {}
        }
        Action::None
    }

    fn request_next_page(&mut self) -> Action {
        if let Some(token) = self.begin_load() {
            return Action::LoadPage(token);
        }

        if !self.roster.has_next_page() {
            self.status = Some("No more pages".to_string());
        }
        Action::None
    }

    fn edit_filter(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                return;
            }
            KeyCode::Backspace => {
                self.filter_input.pop();
            }
            KeyCode::Char(c) => self.filter_input.push(c),
            _ => return,
        }

        let input = self.filter_input.clone();
        self.set_view(|v| v.set_filter(&input));
    }

    fn set_view(&mut self, update: impl FnOnce(&mut ViewState)) {
        update(&mut self.view);
        self.clamp_selection();
    }

    fn delete_selected(&mut self) {
        let Some(index) = self.table_state.selected() else {
            return;
        };
        let Some(id) = self.visible().rows.get(index).map(|u| u.id().to_string()) else {
            return;
        };

        let removed = self.roster.delete(&id);
        self.status = Some(format!("Deleted {} ({} row(s)), r to undo", id, removed));
        self.clamp_selection();
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        let prev = self
            .table_state
            .selected()
            .map(|i| i.saturating_sub(1))
            .unwrap_or(0);
        if self.visible().is_empty() {
            return;
        }
        self.table_state.select(Some(prev));
    }

    /// Keep the selection inside the visible rows.
    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        let selected = match (len, self.table_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.table_state.select(selected);
    }
}
