use rollcall_providers::{FetchError, PageSource};
use rollcall_types::{FIRST_PAGE, PageResult, PageToken, User};

// NOTE: Load state machine
//
//   Idle { next: Some(t) } --begin_load--> Loading { token: t }
//   Loading { token }      --Ok(page)----> Idle { next: page.next_page_token }
//   Loading { token }      --Err---------> Errored { token }
//   Errored { token }      --begin_load--> Loading { token }
//
// `Idle { next: None }` is the exhausted state and `Loading` refuses new
// loads, so a second request can never be in flight. A failed page is only
// requested again when the caller asks for the next page; nothing retries
// on its own.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle { next: Option<PageToken> },
    Loading { token: PageToken },
    Errored { token: PageToken },
}

/// What a completed (or refused) load did to the accumulated records.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Page appended; carries the number of new records
    Appended(usize),
    /// Fetch failed; records untouched
    Failed(FetchError),
    /// Nothing requested: already loading or no further page
    Skipped,
}

impl LoadOutcome {
    pub fn appended(&self) -> usize {
        match self {
            LoadOutcome::Appended(count) => *count,
            _ => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }
}

/// Append-only collection of every record fetched so far, in fetch order.
///
/// No de-duplication happens across pages: if the source repeats an
/// identifier on a later page, both copies are kept.
#[derive(Debug, Clone)]
pub struct PageAccumulator {
    records: Vec<User>,
    state: LoadState,
    pages_loaded: usize,
    last_error: Option<String>,
}

impl Default for PageAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PageAccumulator {
    pub fn new() -> Self {
        Self::starting_at(FIRST_PAGE)
    }

    pub fn starting_at(token: PageToken) -> Self {
        Self {
            records: Vec::new(),
            state: LoadState::Idle { next: Some(token) },
            pages_loaded: 0,
            last_error: None,
        }
    }

    pub fn records(&self) -> &[User] {
        &self.records
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    pub fn has_next_page(&self) -> bool {
        match self.state {
            LoadState::Idle { next } => next.is_some(),
            LoadState::Loading { .. } | LoadState::Errored { .. } => true,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    pub fn is_errored(&self) -> bool {
        matches!(self.state, LoadState::Errored { .. })
    }

    /// Message of the most recent failure, cleared by the next successful load.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Claim the next page for loading. After a failure this is the page
    /// that failed.
    ///
    /// Returns `None` without changing state when a load is in flight or the
    /// stream is exhausted.
    pub fn begin_load(&mut self) -> Option<PageToken> {
        let token = match self.state {
            LoadState::Idle { next: Some(token) } => token,
            LoadState::Errored { token } => {
                tracing::debug!(page = %token, "requesting failed page again");
                token
            }
            LoadState::Idle { next: None } | LoadState::Loading { .. } => {
                tracing::trace!(state = ?self.state, "load request ignored");
                return None;
            }
        };

        self.state = LoadState::Loading { token };
        tracing::debug!(page = %token, "load started");
        Some(token)
    }

    /// Apply the result of the fetch started by `begin_load`.
    pub fn complete_load(
        &mut self,
        result: std::result::Result<PageResult, FetchError>,
    ) -> LoadOutcome {
        let LoadState::Loading { token } = self.state else {
            tracing::warn!(state = ?self.state, "completion without a load in flight");
            return LoadOutcome::Skipped;
        };

        match result {
            Ok(page) => {
                let count = page.records.len();
                self.records.extend(page.records);
                self.pages_loaded += 1;
                self.last_error = None;
                self.state = LoadState::Idle {
                    next: page.next_page_token,
                };
                tracing::info!(
                    page = %token,
                    appended = count,
                    total = self.records.len(),
                    more = page.next_page_token.is_some(),
                    "page accumulated"
                );
                LoadOutcome::Appended(count)
            }
            Err(err) => {
                tracing::warn!(page = %token, error = %err, "page load failed");
                self.last_error = Some(err.to_string());
                self.state = LoadState::Errored { token };
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Fetch and append the next page, if one may be requested.
    pub async fn load_next<S>(&mut self, source: &S) -> LoadOutcome
    where
        S: PageSource,
    {
        let Some(token) = self.begin_load() else {
            return LoadOutcome::Skipped;
        };

        let result = source.fetch_page(token).await;
        self.complete_load(result)
    }
}
