use rollcall_engine::{Collation, Projection, project_view};
use rollcall_providers::{FetchError, PageSource};
use rollcall_types::{PageResult, PageToken, User, ViewState};

use crate::accumulator::{LoadOutcome, PageAccumulator};

/// A browsing session over the accumulated user list.
///
/// The accumulator keeps the originally fetched records; `current` is that
/// set minus local deletions. New pages are appended to both, and `reset`
/// copies the originals back without fetching anything.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pages: PageAccumulator,
    current: Vec<User>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and run its initial load.
    pub async fn open<S>(source: &S) -> (Self, LoadOutcome)
    where
        S: PageSource,
    {
        let mut roster = Self::new();
        let outcome = roster.load_next(source).await;
        (roster, outcome)
    }

    pub fn accumulator(&self) -> &PageAccumulator {
        &self.pages
    }

    /// Records after local deletions, in fetch order.
    pub fn records(&self) -> &[User] {
        &self.current
    }

    /// Every record fetched so far, deletions ignored.
    pub fn originals(&self) -> &[User] {
        self.pages.records()
    }

    pub fn has_next_page(&self) -> bool {
        self.pages.has_next_page()
    }

    pub fn is_loading(&self) -> bool {
        self.pages.is_loading()
    }

    pub fn is_errored(&self) -> bool {
        self.pages.is_errored()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.pages.last_error()
    }

    pub fn begin_load(&mut self) -> Option<PageToken> {
        self.pages.begin_load()
    }

    pub fn complete_load(
        &mut self,
        result: std::result::Result<PageResult, FetchError>,
    ) -> LoadOutcome {
        let outcome = self.pages.complete_load(result);

        if let LoadOutcome::Appended(count) = &outcome {
            let originals = self.pages.records();
            self.current
                .extend_from_slice(&originals[originals.len() - *count..]);
        }

        outcome
    }

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

    /// Remove every record carrying `id`. Returns how many were removed.
    pub fn delete(&mut self, id: &str) -> usize {
        let before = self.current.len();
        self.current.retain(|user| user.id() != id);
        let removed = before - self.current.len();

        tracing::debug!(id, removed, "records deleted");
        removed
    }

    /// Restore every originally fetched record.
    pub fn reset(&mut self) {
        self.current = self.pages.records().to_vec();
        tracing::debug!(total = self.current.len(), "roster reset");
    }

    pub fn project<'a, C>(&'a self, view: &ViewState, collator: &C) -> Projection<'a>
    where
        C: Collation + ?Sized,
    {
        project_view(&self.current, view, collator)
    }
}
