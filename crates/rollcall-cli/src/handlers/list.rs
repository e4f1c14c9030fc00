use anyhow::{Result, anyhow};
use is_terminal::IsTerminal;
use rollcall_providers::PageSource;
use rollcall_runtime::{Config, LoadOutcome, Roster};
use rollcall_types::ViewState;

use crate::presentation::presenters;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::args::OutputFormat;
use crate::presentation::ViewMode;

pub struct ListOptions {
    pub view: ViewState,
    pub pages: u32,
    pub delete: Vec<String>,
}

pub fn handle(
    config: &Config,
    options: ListOptions,
    format: OutputFormat,
    mode: ViewMode,
) -> Result<()> {
    let collator = config.collator()?;
    let client = config.client();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut roster = runtime.block_on(load_pages(&client, options.pages))?;

    for id in &options.delete {
        if roster.delete(id) == 0 {
            tracing::warn!(id = %id, "no user with this id");
        }
    }

    let projection = roster.project(&options.view, &collator);
    let paint_rows = format == OutputFormat::Plain && std::io::stdout().is_terminal();
    let result = presenters::present_roster_list(&roster, &projection, &options.view, paint_rows);

    ConsoleRenderer::new(format, mode).render(result)
}

/// Open a roster and keep loading until `pages` pages, the end of the
/// stream, or the first failure.
///
/// Only a failure of the very first page is an error; later failures leave
/// the roster errored with its earlier rows intact.
pub async fn load_pages<S>(source: &S, pages: u32) -> Result<Roster>
where
    S: PageSource,
{
    let (mut roster, mut outcome) = Roster::open(source).await;
    let mut requested = 1;

    while requested < pages && !outcome.is_failed() && roster.has_next_page() {
        outcome = roster.load_next(source).await;
        requested += 1;
    }

    if let LoadOutcome::Failed(err) = outcome
        && roster.accumulator().pages_loaded() == 0
    {
        return Err(anyhow!(err).context("Error fetching users"));
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_testing::ScriptedSource;
    use rollcall_testing::fixtures::page_users;
    use rollcall_types::{PageResult, PageToken};

    #[tokio::test]
    async fn test_loads_requested_number_of_pages() {
        let source = ScriptedSource::with_page_sizes(&[2, 2, 2, 2]);
        let roster = load_pages(&source, 3).await.unwrap();
        assert_eq!(roster.records().len(), 6);
        assert_eq!(source.requested().len(), 3);
        assert!(roster.has_next_page());
    }

    #[tokio::test]
    async fn test_stops_at_end_of_stream() {
        let source = ScriptedSource::with_page_sizes(&[2, 2]);
        let roster = load_pages(&source, 10).await.unwrap();
        assert_eq!(roster.records().len(), 4);
        assert_eq!(source.requested().len(), 2);
    }

    #[tokio::test]
    async fn test_first_page_failure_is_an_error() {
        let source = ScriptedSource::new().then_fail(500);
        let err = load_pages(&source, 2).await.unwrap_err();
        assert_eq!(err.to_string(), "Error fetching users");
        assert_eq!(source.requested().len(), 1);
    }

    #[tokio::test]
    async fn test_later_failure_keeps_earlier_rows() {
        let source = ScriptedSource::new()
            .then_page(PageResult::new(page_users(1, 3), Some(PageToken::new(2))))
            .then_fail(502);
        let roster = load_pages(&source, 4).await.unwrap();

        assert_eq!(roster.records().len(), 3);
        assert!(roster.is_errored());
        assert_eq!(source.requested().len(), 2);
    }
}
