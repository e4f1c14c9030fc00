//! Scripted in-memory page source.

use rollcall_providers::{FetchError, PageSource, Result};
use rollcall_types::{PageResult, PageToken};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::fixtures::linked_pages;

enum Step {
    Page(PageResult),
    Fail(u16),
}

/// `PageSource` that replays a fixed script and records every requested token.
pub struct ScriptedSource {
    steps: Mutex<VecDeque<Step>>,
    requested: Mutex<Vec<PageToken>>,
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            steps: Mutex::new(VecDeque::new()),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Script consecutive pages with the given sizes.
    pub fn with_page_sizes(sizes: &[usize]) -> Self {
        linked_pages(sizes)
            .into_iter()
            .fold(Self::new(), |source, page| source.then_page(page))
    }

    pub fn then_page(self, page: PageResult) -> Self {
        self.steps.lock().unwrap().push_back(Step::Page(page));
        self
    }

    /// Answer the next request with a non-success status.
    pub fn then_fail(self, status: u16) -> Self {
        self.steps.lock().unwrap().push_back(Step::Fail(status));
        self
    }

    /// Tokens requested so far, in order.
    pub fn requested(&self) -> Vec<PageToken> {
        self.requested.lock().unwrap().clone()
    }

    fn next_step(&self, token: PageToken) -> Result<PageResult> {
        self.requested.lock().unwrap().push(token);

        match self.steps.lock().unwrap().pop_front() {
            Some(Step::Page(page)) => Ok(page),
            Some(Step::Fail(status)) => Err(FetchError::Status {
                status,
                url: format!("scripted://page/{}", token),
            }),
            None => panic!("ScriptedSource exhausted at page {}", token),
        }
    }
}

impl PageSource for ScriptedSource {
    async fn fetch_page(&self, token: PageToken) -> Result<PageResult> {
        self.next_step(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_script_in_order() {
        let source = ScriptedSource::with_page_sizes(&[2, 1]).then_fail(503);

        let first = source.fetch_page(PageToken::new(1)).await.unwrap();
        assert_eq!(first.records.len(), 2);
        assert_eq!(first.next_page_token, Some(PageToken::new(2)));

        let second = source.fetch_page(PageToken::new(2)).await.unwrap();
        assert!(second.is_last());

        let err = source.fetch_page(PageToken::new(3)).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));

        assert_eq!(
            source.requested(),
            vec![PageToken::new(1), PageToken::new(2), PageToken::new(3)]
        );
    }
}
